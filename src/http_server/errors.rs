//! # API Errors
//!
//! Two kinds surface on the wire: client input errors detected before
//! any store access (422) and store failures (500). Both respond with
//! a `detail` body carrying the message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::model::ValidationError;
use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors a handler can produce
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client input rejected before the store was touched
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Failure acquiring a connection, executing a statement, or committing
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let validation = ApiError::Validation(ValidationError::EmptyField("nombre"));
        assert_eq!(validation.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let store = ApiError::Store(StoreError::Pool("pool closed".to_string()));
        assert_eq!(store.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_store_message_passes_through() {
        let store = ApiError::Store(StoreError::Pool("pool closed".to_string()));
        assert_eq!(store.to_string(), "connection pool error: pool closed");
    }
}
