use crate::error::{ApiError, ErrorDetail};
use crate::AppState;
use actix_web::{get, web, HttpResponse};
use tracing::{debug, error, warn};
use vnkpi_airtable::{fetch_latest_kpis, FetchError, Record, Ticker};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Latest row of every KPI reported for a stock ticker symbol
///
/// ```json
/// [
///     {
///         "Ticker": "FPT",
///         "kpi": "Revenue",
///         "date": "2024-03-31",
///         "value": 100
///     },
///     // ...
/// ]
/// ```
#[utoipa::path(
    get,
    path = "/kpi/{ticker}",
    responses(
        (
            status = 200, description = "Newest row per KPI name, newest first",
            body = [Record], content_type = "application/json",
            example = json!([
                {
                    "Ticker": "FPT",
                    "kpi": "Revenue",
                    "date": "2024-03-31",
                    "value": 100
                }
            ])
        ),
        (
            status = 404, description = "No KPI rows for this ticker",
            body = ErrorDetail, example = json!({"detail": "No records found"})
        ),
        (
            status = 500, description = "Airtable unreachable or unreadable",
            body = ErrorDetail
        ),
        (
            status = "default", description = "Airtable error, status and body forwarded as received",
            body = ErrorDetail
        )
    ),
    params(
        ("ticker" = String, Path, description = "Stock ticker symbol, case-insensitive")
    )
)]
#[get("/kpi/{ticker}")]
pub async fn latest(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let ticker = Ticker::parse(&path.into_inner())?;

    let data = fetch_latest_kpis(&state.client, &state.config, &ticker)
        .await
        .map_err(|e| {
            match &e {
                FetchError::Upstream { status, .. } => warn!("Airtable rejected {ticker}: {status}"),
                _ => error!("KPI fetch failed for {ticker}: {e}"),
            }
            e
        })?;

    if data.is_empty() {
        debug!("no KPI rows for {ticker}");
        return Err(ApiError::NotFound);
    }

    Ok(HttpResponse::Ok().json(data))
}
