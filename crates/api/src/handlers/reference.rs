//! Read-only lists backing the public registration form.

use axum::extract::State;
use axum::Json;
use sciday_core::categories::{Category, CATEGORIES};
use sciday_db::models::school::SchoolOption;
use sciday_db::repositories::SchoolRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/schools
pub async fn list_schools(State(state): State<AppState>) -> AppResult<Json<Vec<SchoolOption>>> {
    let schools = SchoolRepo::list_all(&state.pool)
        .await
        .map_err(AppError::storage("Failed to fetch schools"))?;
    Ok(Json(schools.into_iter().map(SchoolOption::from).collect()))
}

/// GET /api/v1/categories
pub async fn list_categories() -> Json<&'static [Category]> {
    Json(CATEGORIES)
}
