use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vnkpi_airtable::{FetchError, TickerError};

/// Error payload of every non-2xx response.
///
/// ```json
/// { "detail": "No records found" }
/// ```
#[derive(Deserialize, Serialize, Debug, utoipa::ToSchema)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No records found")]
    NotFound,

    #[error(transparent)]
    Ticker(#[from] TickerError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Ticker(_) => StatusCode::BAD_REQUEST,
            // mirror whatever Airtable said
            ApiError::Fetch(FetchError::Upstream { status, .. }) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ApiError::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            ApiError::Fetch(FetchError::Upstream { body, .. }) => body.clone(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorDetail { detail })
    }
}
