/// Bearer-token identity resolution.
///
/// Tokens are issued by the external authentication service; this module only
/// verifies the HS256 signature with the shared secret and reads the numeric
/// user id from the `sub` claim. Every core operation receives that id
/// explicitly and scopes its reads and writes by it.
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;
use crate::server::AppState;

/// Claims carried by tokens from the authentication service
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id, as a string per JWT convention
    pub sub: String,
    /// Expiry, seconds since the epoch
    pub exp: usize,
}

/// The authenticated caller's user id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub i64);

/// Verify a bearer token and resolve it to a user id
pub fn verify_token(token: &str, secret: &str) -> Result<i64, ApiError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|_| ApiError::Unauthorized)?;

    data.claims
        .sub
        .parse::<i64>()
        .map_err(|_| ApiError::Unauthorized)
}

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;

        let token = header.strip_prefix("Bearer ").ok_or(ApiError::Unauthorized)?;

        let user_id = verify_token(token, &state.jwt_secret)?;
        Ok(AuthUser(user_id))
    }
}
