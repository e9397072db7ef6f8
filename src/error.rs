//! Error types for the task service
//!
//! Errors carry their HTTP semantics: each kind maps to a fixed status code
//! when converted into a response, so handlers never translate errors by hand.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Error taxonomy for the task service
#[derive(Debug, Error)]
pub enum TaskError {
    /// The client sent a request missing a required field
    #[error("{0}")]
    Validation(String),

    /// The referenced task id has no matching row
    #[error("Task not found")]
    NotFound,

    /// Backend connectivity or query failure
    #[error("{0}")]
    Storage(String),
}

impl TaskError {
    pub fn validation(message: &str) -> Self {
        TaskError::Validation(message.to_string())
    }

    pub fn storage(message: &str) -> Self {
        TaskError::Storage(message.to_string())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            TaskError::Validation(_) => StatusCode::BAD_REQUEST,
            TaskError::NotFound => StatusCode::NOT_FOUND,
            TaskError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
