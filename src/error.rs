use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum ImagebookError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Blocking task failed: {0}")]
    TaskJoin(String),
}

impl From<tokio::task::JoinError> for ImagebookError {
    fn from(e: tokio::task::JoinError) -> Self {
        ImagebookError::TaskJoin(e.to_string())
    }
}

impl IntoResponse for ImagebookError {
    fn into_response(self) -> axum::response::Response {
        if let ImagebookError::Database(_) | ImagebookError::Hash(_) | ImagebookError::TaskJoin(_) =
            &self
        {
            error!(error = %self, "request failed");
        }

        let (status, error_body) = match self {
            ImagebookError::Database(_) | ImagebookError::Hash(_) | ImagebookError::TaskJoin(_) => {
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (status, body)
            }
            ImagebookError::InvalidBody(reason) => {
                let status = StatusCode::BAD_REQUEST;
                let body = ApiErrorBody {
                    code: "BAD_REQUEST".to_string(),
                    message: reason,
                };
                (status, body)
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
