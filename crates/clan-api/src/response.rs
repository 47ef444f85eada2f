//! API error and response types
//!
//! Converts service/application errors into HTTP responses with a stable
//! `{ code, message }` JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use clan_common::AppError;
use clan_service::ServiceError;

/// API-level error
#[derive(Debug)]
pub enum ApiError {
    /// Error bubbled up from the service layer
    Service(ServiceError),

    /// Error from shared utilities (auth, config)
    App(AppError),

    /// No Authorization header present
    MissingAuth,

    /// Bearer token present but invalid
    InvalidAuth,

    /// Authenticated but lacking the required role
    Forbidden,

    /// Malformed path parameter
    InvalidPath(String),

    /// Request body failed validation
    Validation(String),
}

impl ApiError {
    /// Create an invalid-path error
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    fn status_and_code(&self) -> (StatusCode, String, String) {
        match self {
            Self::Service(e) => (
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                e.error_code().to_string(),
                e.to_string(),
            ),
            Self::App(e) => (
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                e.error_code().to_string(),
                e.to_string(),
            ),
            Self::MissingAuth => (
                StatusCode::UNAUTHORIZED,
                "MISSING_AUTH".to_string(),
                "Missing authentication".to_string(),
            ),
            Self::InvalidAuth => (
                StatusCode::UNAUTHORIZED,
                "INVALID_TOKEN".to_string(),
                "Invalid or expired token".to_string(),
            ),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                "INSUFFICIENT_PERMISSIONS".to_string(),
                "Insufficient permissions".to_string(),
            ),
            Self::InvalidPath(msg) => (
                StatusCode::BAD_REQUEST,
                "INVALID_PATH".to_string(),
                msg.clone(),
            ),
            Self::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR".to_string(),
                msg.clone(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.status_and_code();

        if status.is_server_error() {
            tracing::error!(code = %code, message = %message, "Request failed");
        }

        (status, Json(json!({ "code": code, "message": message }))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::Service(err)
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// 204 No Content response
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}
