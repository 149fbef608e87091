//! # API Errors
//!
//! The public error taxonomy. Every variant leaves the service as the JSON
//! envelope `{"msg": <string>, "status": <code>}` with the matching HTTP
//! status, so clients see one shape regardless of what went wrong.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::constants;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Malformed id, body or query parameter
    #[error("{}", constants::INVALID_PARAMETERS)]
    InvalidParameters,

    /// Requested page starts past the last record
    #[error("{}", constants::NO_ENOUGH_POEMS)]
    NotEnoughPoems,

    /// No record under this id
    #[error("{}", constants::POEM_NOT_FOUND)]
    PoemNotFound,

    /// Shared secret missing or wrong
    #[error("{}", constants::NOT_AUTHORIZED_MSG)]
    NotAuthorized,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Opaque stand-in for any store fault; the detail is already logged
    #[error("{}", constants::INTERNAL_SERVER_ERROR_MSG)]
    Internal,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ApiError::InvalidParameters => StatusCode::BAD_REQUEST,
            ApiError::NotEnoughPoems => StatusCode::BAD_REQUEST,

            // 404 Not Found
            ApiError::PoemNotFound => StatusCode::NOT_FOUND,

            // 403 Forbidden
            ApiError::NotAuthorized => StatusCode::FORBIDDEN,

            // 500 Internal Server Error
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub msg: String,
    pub status: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            msg: err.to_string(),
            status: err.status_code().as_u16(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidParameters.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotEnoughPoems.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::PoemNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::NotAuthorized.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_are_the_wire_constants() {
        assert_eq!(
            ApiError::InvalidParameters.to_string(),
            constants::INVALID_PARAMETERS
        );
        assert_eq!(ApiError::NotEnoughPoems.to_string(), constants::NO_ENOUGH_POEMS);
        assert_eq!(ApiError::PoemNotFound.to_string(), constants::POEM_NOT_FOUND);
        assert_eq!(
            ApiError::NotAuthorized.to_string(),
            constants::NOT_AUTHORIZED_MSG
        );
        assert_eq!(
            ApiError::Internal.to_string(),
            constants::INTERNAL_SERVER_ERROR_MSG
        );
    }

    #[test]
    fn test_envelope_shape() {
        let body = ErrorResponse::from(ApiError::PoemNotFound);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["msg"], constants::POEM_NOT_FOUND);
        assert_eq!(json["status"], 404);
    }
}
