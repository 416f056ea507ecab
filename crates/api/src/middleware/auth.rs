//! Bearer-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use sciday_core::error::CoreError;
use sciday_core::roles::Principal;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The verified requester, extracted from `Authorization: Bearer <token>`.
///
/// ```ignore
/// async fn my_handler(AuthUser(principal): AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %principal.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub Principal);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("Unauthorized"))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            unauthorized("Invalid Authorization format. Expected: Bearer <token>")
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|err| {
            tracing::debug!(error = %err, "Rejected access token");
            unauthorized("Invalid or expired token")
        })?;

        if claims.email.trim().is_empty() {
            return Err(unauthorized("Token is missing an email claim"));
        }

        Ok(AuthUser(claims.into_principal()))
    }
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.to_string()))
}
