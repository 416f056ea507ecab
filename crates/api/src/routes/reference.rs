use axum::routing::get;
use axum::Router;

use crate::handlers::{self, reference};
use crate::state::AppState;

/// ```text
/// GET    /schools       list_schools
/// GET    /categories    list_categories
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/schools",
            get(reference::list_schools).fallback(handlers::method_not_allowed),
        )
        .route(
            "/categories",
            get(reference::list_categories).fallback(handlers::method_not_allowed),
        )
}
