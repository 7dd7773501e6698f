//! Shared HTTP error payload and the domain-error → status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::collections::HashMap;

use crate::domain::foundation::{DomainError, ErrorCode};

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, String>,
}

impl ErrorResponse {
    pub fn from_domain(error: &DomainError) -> Self {
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            details: error.details.clone(),
        }
    }
}

/// Maps a domain error to an HTTP response.
///
/// Validation failures are 422, missing records 404, conflicts 409,
/// state errors 409, storage failures 500.
pub fn domain_error_response(error: DomainError) -> Response {
    let status = match error.code {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat => StatusCode::UNPROCESSABLE_ENTITY,
        code if code.is_not_found() => StatusCode::NOT_FOUND,
        code if code.is_conflict() => StatusCode::CONFLICT,
        ErrorCode::InvalidStateTransition | ErrorCode::PlanInactive => StatusCode::CONFLICT,
        ErrorCode::StorageError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(code = %error.code, message = %error.message, "request failed");
    }
    (status, Json(ErrorResponse::from_domain(&error))).into_response()
}
