use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Not found")]
    NotFound,
    #[error("Validation failed for {field}: {message}")]
    Validation { field: &'static str, message: String },
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Database(e) => {
                tracing::error!(error = %e, "Database error");
                let body = Json(json!({ "error": "Internal server error" }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            Self::NotFound => {
                tracing::debug!("Resource not found");
                let body = Json(json!({ "error": "Not found" }));
                (StatusCode::NOT_FOUND, body).into_response()
            }
            Self::Validation { field, message } => {
                tracing::debug!(field = %field, message = %message, "Validation failed");
                // Field errors are keyed by field name, each with a list of messages.
                let body = Json(json!({ field: [message] }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}
