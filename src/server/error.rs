//! JSON error payloads.
//!
//! Every failure the API reports is `{"success": false, "error": ..}`
//! with a human-readable message and nothing else. Domain-level failures
//! (missing fields, bad enums, unknown ids, SQL errors) keep HTTP 200
//! since the catalog client switches on the `success` flag; malformed
//! request bodies are 400.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new<M: Into<String>>(message: M) -> Self {
        ApiError {
            status: StatusCode::OK,
            message: message.into(),
        }
    }

    pub fn bad_request<M: Into<String>>(message: M) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({ "success": false, "error": self.message })),
        )
            .into_response()
    }
}

impl From<crate::catalog_store::ValidationError> for ApiError {
    fn from(err: crate::catalog_store::ValidationError) -> Self {
        ApiError::new(err.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::new(format!("Database error: {}", err))
    }
}
