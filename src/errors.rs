use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The measurement table holds no rows, so the reference values
    /// (latest date, most-active station) cannot be computed. Raised only
    /// during startup and fatal to it.
    #[error("Dataset is empty: {0}")]
    EmptyDataset(String),

    /// The latest observation date is not a parseable YYYY-MM-DD string.
    /// Raised only during startup, where the one place requiring calendar
    /// arithmetic (the 365-day cutoff) lives.
    #[error("Malformed date: {0}")]
    MalformedDate(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // Startup-only conditions; no handler produces these.
            AppError::EmptyDataset(msg) | AppError::MalformedDate(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Database(err) => {
                tracing::error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal database error".to_string(),
                )
            }
        };

        (status, axum::Json(ErrorResponse { error: message })).into_response()
    }
}
