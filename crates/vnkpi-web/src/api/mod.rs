use crate::error::ErrorDetail;
use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;
use vnkpi_airtable::Record;

pub mod kpi;

#[derive(OpenApi)]
#[openapi(
    info(title = "VN KPI API", description = "Latest KPI rows per ticker, served from Airtable"),
    paths(kpi::latest),
    components(schemas(Record, ErrorDetail))
)]
pub struct ApiDoc;

/// OpenAPI document of every route above.
#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
