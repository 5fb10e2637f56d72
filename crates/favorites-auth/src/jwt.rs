//! JWT creation and verification.
//!
//! Verification checks the HS256 signature and the `exp` claim (with the
//! default 60 second leeway of [`jsonwebtoken::Validation`]). Every failure
//! collapses into the same unauthorized error so callers learn nothing about
//! why a token was refused.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use favorites_config::JwtConfig;
use favorites_core::AppError;

use crate::claims::Claims;

/// Creates a token for `user_id` valid for the configured lifetime.
pub fn create_token(user_id: i64, jwt_config: &JwtConfig) -> Result<String, AppError> {
    create_token_expiring_in(user_id, jwt_config.token_expiry, jwt_config)
}

/// Creates a token for `user_id` expiring `seconds` from now. A negative
/// value yields an already expired token.
pub fn create_token_expiring_in(
    user_id: i64,
    seconds: i64,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = (now + seconds).max(0);

    let claims = Claims {
        user_id,
        exp: exp as usize,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Verifies a token and returns its claims.
///
/// # Errors
///
/// Returns an unauthorized error if the signature is invalid, the token has
/// expired, or the token is malformed.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(anyhow::anyhow!("Unauthorized")))
}
