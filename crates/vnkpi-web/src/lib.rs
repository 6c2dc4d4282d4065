use actix_web::web;
use reqwest::Client;
use vnkpi_airtable::AirtableConfig;

pub mod api;
pub mod cli;
pub mod error;

/// Read-only state shared by every worker: built once at startup.
pub struct AppState {
    pub client: Client,
    pub config: AirtableConfig,
}

/// Register the API routes; shared by the server and the route tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api::kpi::latest).service(api::openapi_json);
}
