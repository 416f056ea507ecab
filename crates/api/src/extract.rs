//! Request extractors that report failures through [`AppError`].

use axum::extract::FromRequest;

use crate::error::AppError;

/// Drop-in replacement for [`axum::Json`] whose rejection is an
/// [`AppError`], so malformed bodies get the standard JSON error shape.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
