/// Unified error handling module
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Unified error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Every calculation is a single deterministic attempt; failures surface
/// synchronously to the caller and are never retried.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing, malformed or out-of-domain input, caught before computing.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Mathematically undefined operation inside a formula, e.g. the
    /// logarithm of a non-positive quantity. Reported instead of letting
    /// NaN/infinity propagate into the response.
    #[error("Domain error: {0}")]
    Domain(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::InvalidInput(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_INPUT", msg.clone())
            }
            ApiError::Domain(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "DOMAIN_ERROR", msg.clone())
            }
        };

        let error_response = ErrorResponse {
            ok: false,
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(error_response)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
