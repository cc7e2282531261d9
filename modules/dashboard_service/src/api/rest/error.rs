//! HTTP error mapping to the `{status: "error", message}` envelope

use super::dto::ResponseStatus;
use crate::contract::DashboardError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Error response for the HTTP API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: ResponseStatus,
    message: &'a str,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status: ResponseStatus::Error,
            message: &self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<DashboardError> for ApiError {
    fn from(error: DashboardError) -> Self {
        map_domain_error(error)
    }
}

/// Map domain errors to HTTP errors
pub fn map_domain_error(error: DashboardError) -> ApiError {
    match error {
        DashboardError::Validation { message } => ApiError::bad_request(message),
        DashboardError::Internal => {
            tracing::error!("Internal error while handling request");
            ApiError::internal()
        }
    }
}

/// Fallback for a known path called with an unsupported method
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

/// Convert a caught handler panic into a 500 response
pub fn map_panic(panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "Handler panicked");
    ApiError::internal().into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = map_domain_error(DashboardError::validation("Wilaya is required"));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Wilaya is required");
    }

    #[test]
    fn test_internal_hides_detail() {
        let err = map_domain_error(DashboardError::Internal);
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_panic_maps_to_500() {
        let response = map_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
