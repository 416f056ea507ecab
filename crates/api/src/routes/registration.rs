//! Registration workflow routes.
//!
//! Each path accepts exactly one method; any other method gets a JSON 405.
//! `OPTIONS` never reaches these routes because the CORS layer answers it.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{self, registration};
use crate::state::AppState;

/// ```text
/// POST   /submit-registration    submit_registration
/// GET    /get-registrations      get_registrations
/// PUT    /update-registration    update_registration
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/submit-registration",
            post(registration::submit_registration)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/get-registrations",
            get(registration::get_registrations)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/update-registration",
            put(registration::update_registration)
                .fallback(handlers::method_not_allowed),
        )
}
