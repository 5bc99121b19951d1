//! API error type mapping service failures onto HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::domain::draw::DrawError;
use crate::domain::DomainError;
use crate::infrastructure::user::AuthError;

use super::envelope::ApiEnvelope;

/// An error response: HTTP status plus the envelope message key
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
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

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let envelope = ApiEnvelope::<Value>::failure(self.message);
        (self.status, Json(envelope)).into_response()
    }
}

impl From<DrawError> for ApiError {
    fn from(error: DrawError) -> Self {
        let key = error.key();
        match error {
            DrawError::Rejected(_) => Self::bad_request(key),
            DrawError::NotFound { .. } => Self::not_found(key),
            DrawError::Engine(_) | DrawError::Storage(_) => {
                tracing::error!(%error, "Draw operation failed");
                Self::internal(key)
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        let key = error.key();
        match error {
            AuthError::EmailAlreadyRegistered | AuthError::Validation(_) => {
                Self::bad_request(key)
            }
            AuthError::Storage(_) => {
                tracing::error!(%error, "Auth operation failed");
                Self::internal(key)
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        tracing::error!(%error, "Unhandled domain error");
        Self::internal("InternalError")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use crate::domain::draw::DrawRejection;

    use super::*;

    #[test]
    fn test_rejection_maps_to_bad_request() {
        let error = ApiError::from(DrawError::from(DrawRejection::NameRequired));

        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert_eq!(error.message, "NameRequired");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let error = ApiError::from(DrawError::not_found("abc"));

        assert_eq!(error.status, StatusCode::NOT_FOUND);
        assert_eq!(error.message, "DrawNotFound");
    }

    #[test]
    fn test_storage_maps_to_500() {
        let error = ApiError::from(DrawError::from(DomainError::storage("down")));

        assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message, "InternalError");
    }

    #[test]
    fn test_duplicate_email_maps_to_bad_request() {
        let error = ApiError::from(AuthError::EmailAlreadyRegistered);

        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert_eq!(error.message, "EmailAlreadyRegistered");
    }
}
