use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use favorites_auth::{Claims, verify_token};
use favorites_core::AppError;

use crate::state::AppState;

fn unauthorized() -> AppError {
    AppError::unauthorized(anyhow::anyhow!("Unauthorized"))
}

/// Middleware guarding every favorites route.
///
/// Reads the token from the configured cookie, verifies it and stores the
/// decoded [`Claims`] in the request extensions. Requests without a valid
/// token never reach the handler.
///
/// ```rust,ignore
/// let routes = init_favorites_router()
///     .route_layer(middleware::from_fn_with_state(state.clone(), authorize));
/// ```
pub async fn authorize(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = jar
        .get(&state.jwt_config.cookie_name)
        .map(|cookie| cookie.value().to_owned())
        .ok_or_else(|| {
            tracing::debug!(cookie = %state.jwt_config.cookie_name, "Missing token cookie");
            unauthorized()
        })?;

    let claims = verify_token(&token, &state.jwt_config).inspect_err(|_| {
        tracing::debug!("Rejected token");
    })?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Extractor handing the verified claims to a handler.
///
/// Only succeeds behind [`authorize`]; on an unguarded route it rejects with
/// 401 instead of trusting anything the client sent.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> i64 {
        self.0.user_id
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(unauthorized)
    }
}
