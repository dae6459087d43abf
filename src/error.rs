use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::ERR_CITY_NOT_FOUND;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Upstream request error: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("City not found")]
    CityNotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Implement IntoResponse to convert AppError into HTTP responses
///
/// `CityNotFound` is a domain outcome and maps to a clean 404; upstream
/// transport failures map to 502 and storage failures to 500, both with a
/// generic message so provider/database details never leak to clients.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::Upstream(ref e) => {
                tracing::error!("Upstream request error: {:?}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Upstream weather service unavailable",
                )
            }
            AppError::CityNotFound => (StatusCode::NOT_FOUND, ERR_CITY_NOT_FOUND),
            AppError::InvalidInput(ref msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
