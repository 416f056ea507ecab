//! Role-based access control extractors.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sciday_core::access::ensure_staff;
use sciday_core::roles::Principal;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires `admin` or `school_official`. Rejects with 403 otherwise, and
/// with 401 when the request is not authenticated at all.
///
/// ```ignore
/// async fn staff_only(RequireStaff(principal): RequireStaff) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireStaff(pub Principal);

impl FromRequestParts<AppState> for RequireStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(principal) = AuthUser::from_request_parts(parts, state).await?;
        ensure_staff(&principal)?;
        Ok(RequireStaff(principal))
    }
}
