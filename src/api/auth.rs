//! Authentication API endpoints
//!
//! Registration and login with JWT issuance.

use axum::{
    extract::State,
    routing::post,
    Json, Router,
};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::state::{AppState, UserServiceApi};
use crate::api::types::{ApiEnvelope, ApiError};
use crate::infrastructure::auth::JwtGenerator;
use crate::infrastructure::user::RegisterRequest;

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Registration request payload
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterApiRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
}

/// Login request payload
#[derive(Debug, Deserialize)]
pub struct LoginApiRequest {
    pub email: String,
    pub password: String,
}

/// Login response payload
#[derive(Debug, Serialize)]
pub struct LoginData {
    pub token: String,
    pub expires_at: String,
}

/// Register a new user
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterApiRequest>,
) -> Result<Json<ApiEnvelope<()>>, ApiError> {
    request
        .validate()
        .map_err(|_| ApiError::bad_request("InvalidRegistration"))?;

    state
        .user_service
        .register(RegisterRequest {
            email: request.email,
            password: request.password,
            first_name: request.first_name,
            last_name: request.last_name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ApiEnvelope::message_only("RegistrationSuccessful")))
}

/// Login with email and password
///
/// POST /auth/login
///
/// Returns a JWT token on successful authentication.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginApiRequest>,
) -> Result<Json<ApiEnvelope<LoginData>>, ApiError> {
    let user = state
        .user_service
        .authenticate(&request.email, &request.password)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::unauthorized("InvalidCredentials"))?;

    let token = state
        .jwt_service
        .generate(&user)
        .map_err(ApiError::from)?;

    let expires_at = Utc::now() + Duration::hours(state.jwt_service.expiration_hours() as i64);

    Ok(Json(ApiEnvelope::ok_with_message(
        "LoginSuccessful",
        LoginData {
            token,
            expires_at: expires_at.to_rfc3339(),
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterApiRequest {
            email: "john@example.com".to_string(),
            password: "secure_password".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = RegisterApiRequest {
            email: "not-an-email".to_string(),
            ..valid_request()
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterApiRequest {
            password: "short".to_string(),
            ..valid_request()
        };
        assert!(short_password.validate().is_err());

        let empty_name = RegisterApiRequest {
            first_name: String::new(),
            ..valid_request()
        };
        assert!(empty_name.validate().is_err());
    }

    fn valid_request() -> RegisterApiRequest {
        RegisterApiRequest {
            email: "john@example.com".to_string(),
            password: "secure_password".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
        }
    }
}
