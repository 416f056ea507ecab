pub mod health;
pub mod reference;
pub mod registration;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /submit-registration      POST   submit a registration (public)
/// /get-registrations        GET    list registrations (auth, role-scoped)
/// /update-registration      PUT    change status (admin / school_official)
///
/// /schools                  GET    schools for the form (public)
/// /categories               GET    project categories (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(registration::router())
        .merge(reference::router())
}
