//! Error responses for the HTTP layer.
//!
//! # Design
//! Handlers return `Result<_, ApiError>` and rely on `IntoResponse` for the
//! status code and body shape. Every error body is `{"message": ...}`: a
//! field-name map for validation failures, a string for 404 and 500. Store
//! `NotFound` maps to 404; any other store failure is logged and hidden
//! behind a generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use todo_store::StoreError;

use crate::validation::FieldErrors;

/// Errors a request handler can produce.
#[derive(Debug)]
pub enum ApiError {
    /// One or more body fields failed validation.
    Validation(FieldErrors),

    /// The referenced todo does not exist.
    NotFound(i64),

    /// The store failed for a reason other than a missing row.
    Store(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(id),
            other => Self::Store(other),
        }
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": errors })),
            )
                .into_response(),
            Self::NotFound(id) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": format!("Todo with id:{id} does not exist") })),
            )
                .into_response(),
            Self::Store(err) => {
                tracing::error!(error = %err, "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
