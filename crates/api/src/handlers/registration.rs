//! Handlers for the registration workflow: public submission, role-scoped
//! listing, and staff status changes.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use sciday_core::access::ListingScope;
use sciday_core::error::CoreError;
use sciday_core::registration::StatusChangeRequest;
use sciday_core::submission::RegistrationSubmission;
use sciday_core::types::DbId;
use sciday_db::models::registration::{Registration, RegistrationWithStudent};
use sciday_db::models::student::CreateStudent;
use sciday_db::repositories::{RegistrationRepo, SchoolRepo, StatusUpdate};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRegistrationResponse {
    pub message: &'static str,
    pub registration_id: DbId,
    pub student_id: DbId,
}

#[derive(Debug, Serialize)]
pub struct UpdateRegistrationResponse {
    pub message: &'static str,
    pub registration: Registration,
}

/// POST /api/v1/submit-registration
///
/// Validate the form, then write the student and its `pending`
/// registration in one transaction. No authentication required.
pub async fn submit_registration(
    State(state): State<AppState>,
    AppJson(input): AppJson<RegistrationSubmission>,
) -> AppResult<Json<SubmitRegistrationResponse>> {
    let submission = input.validate()?;

    let school = SchoolRepo::find_by_id(&state.pool, &submission.school_id)
        .await
        .map_err(AppError::storage("Failed to save student data"))?;
    if school.is_none() {
        return Err(CoreError::Validation(format!(
            "Unknown school: {}",
            submission.school_id
        ))
        .into());
    }

    let (student, registration) =
        RegistrationRepo::submit(&state.pool, &CreateStudent::from(submission)).await?;

    tracing::info!(
        registration_id = %registration.id,
        student_id = %student.id,
        school_id = %student.school_id,
        "Registration submitted"
    );

    Ok(Json(SubmitRegistrationResponse {
        message: "Registration submitted successfully",
        registration_id: registration.id,
        student_id: student.id,
    }))
}

/// GET /api/v1/get-registrations
///
/// Admins and school officials see every registration; anyone else only
/// sees registrations submitted under their own email.
pub async fn get_registrations(
    AuthUser(principal): AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<RegistrationWithStudent>>> {
    let scope = ListingScope::for_principal(&principal);

    let registrations = RegistrationRepo::list_with_students(&state.pool, &scope)
        .await
        .map_err(AppError::storage("Failed to fetch registrations"))?;

    tracing::debug!(
        user_id = %principal.user_id,
        scope = ?scope,
        count = registrations.len(),
        "Listed registrations"
    );

    Ok(Json(registrations))
}

/// PUT /api/v1/update-registration
///
/// Overwrite a registration's status. Staff only. Supplying
/// `expectedVersion` turns the write into a check-and-set.
pub async fn update_registration(
    RequireStaff(principal): RequireStaff,
    State(state): State<AppState>,
    AppJson(input): AppJson<StatusChangeRequest>,
) -> AppResult<Json<UpdateRegistrationResponse>> {
    let change = input.validate()?;

    let outcome = RegistrationRepo::update_status(
        &state.pool,
        change.registration_id,
        change.status,
        change.expected_version,
    )
    .await
    .map_err(AppError::storage("Failed to update registration"))?;

    let registration = match outcome {
        StatusUpdate::Updated(registration) => registration,
        StatusUpdate::NotFound => {
            return Err(CoreError::NotFound {
                entity: "Registration",
                id: change.registration_id,
            }
            .into());
        }
        StatusUpdate::VersionMismatch { current } => {
            tracing::info!(
                registration_id = %change.registration_id,
                expected = ?change.expected_version,
                current,
                "Stale status update rejected"
            );
            return Err(CoreError::Conflict(
                "Registration was modified concurrently".to_string(),
            )
            .into());
        }
    };

    tracing::info!(
        user_id = %principal.user_id,
        registration_id = %registration.id,
        status = %change.status,
        version = registration.version,
        "Registration status updated"
    );

    Ok(Json(UpdateRegistrationResponse {
        message: "Registration updated successfully",
        registration,
    }))
}
