pub mod reference;
pub mod registration;

use crate::error::AppError;

/// Fallback for a known path hit with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Router-wide fallback for unknown paths.
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}
