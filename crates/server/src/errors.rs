use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// JSON error body `{"error": <message>}` used by the structured endpoints.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "not found")
    }

    /// Map a storage failure for operation `op`, logging anything but not-found.
    pub fn from_service(op: &'static str, e: ServiceError) -> Self {
        if e.is_not_found() {
            return Self::not_found();
        }
        error!(op, error = %e, "storage operation failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.message}))).into_response()
    }
}

/// Plain-text errors for the raw download endpoint.
#[derive(Debug, PartialEq, Eq)]
pub enum RawApiError {
    NotFound,
    Internal,
}

impl RawApiError {
    pub fn from_service(e: ServiceError) -> Self {
        if e.is_not_found() {
            return Self::NotFound;
        }
        error!(op = "raw", error = %e, "storage operation failed");
        Self::Internal
    }
}

impl IntoResponse for RawApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            Self::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Server error"),
        };
        (status, [(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("storage initialization failed: {0}")]
    Storage(#[from] ServiceError),
    #[error("storage shutdown failed: {0}")]
    Shutdown(ServiceError),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn not_found_service_error_maps_to_404() {
        let e = JsonApiError::from_service("get", ServiceError::not_found("record"));
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.message, "not found");
        assert_eq!(RawApiError::from_service(ServiceError::not_found("record")), RawApiError::NotFound);
    }

    #[test]
    fn storage_failures_map_to_500() {
        let e = JsonApiError::from_service("put", ServiceError::Timeout(Duration::from_secs(5)));
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(e.message.contains("timed out"));

        let raw = RawApiError::from_service(ServiceError::Db("disk I/O error".into()));
        assert_eq!(raw, RawApiError::Internal);
        assert_eq!(raw.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn shutdown_failure_is_not_reported_as_initialization() {
        let e = StartupError::Shutdown(ServiceError::Db("pool already closed".into()));
        let msg = e.to_string();
        assert!(msg.starts_with("storage shutdown failed"), "{msg}");
        assert!(!msg.contains("initialization"));

        let init: StartupError = ServiceError::Db("disk I/O error".into()).into();
        assert!(init.to_string().starts_with("storage initialization failed"));
    }
}
