//! User authentication middleware using JWT tokens

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::debug;

use crate::api::state::{AppState, UserServiceApi};
use crate::api::types::ApiError;
use crate::domain::user::User;
use crate::infrastructure::auth::JwtGenerator;

/// Extractor that requires a valid JWT token.
///
/// Reads the token from the `Authorization: Bearer <jwt>` header and
/// resolves the authenticated user.
#[derive(Debug, Clone)]
pub struct RequireUser(pub User);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_jwt_token(&parts.headers)?;

        debug!("Validating JWT token");

        let claims = state
            .jwt_service
            .validate(&token)
            .map_err(|_| ApiError::unauthorized("InvalidToken"))?;

        let user = state
            .user_service
            .get(claims.user_id())
            .await
            .map_err(ApiError::from)?
            .ok_or_else(|| ApiError::unauthorized("InvalidToken"))?;

        if !user.is_active() {
            return Err(ApiError::unauthorized("InvalidToken"));
        }

        Ok(RequireUser(user))
    }
}

/// Extract JWT token from the Authorization header
fn extract_jwt_token(headers: &axum::http::HeaderMap) -> Result<String, ApiError> {
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        let auth_str = auth_header
            .to_str()
            .map_err(|_| ApiError::bad_request("InvalidAuthorizationHeader"))?;

        if let Some(token) = auth_str.strip_prefix("Bearer ") {
            return Ok(token.trim().to_string());
        }
    }

    Err(ApiError::unauthorized("AuthenticationRequired"))
}
