//! Repository for the `registrations` table and the submission write path.

use sciday_core::access::ListingScope;
use sciday_core::registration::{RegistrationStatus, STATUS_PENDING};
use sciday_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::registration::{Registration, RegistrationListRow, RegistrationWithStudent};
use crate::models::student::{CreateStudent, Student};
use crate::repositories::StudentRepo;

const COLUMNS: &str = "id, student_id, status, version, created_at, updated_at";

/// Which step of a submission failed. The transaction has been rolled back
/// in every case, so no partial rows remain.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionWriteError {
    #[error("failed to insert student: {0}")]
    Student(#[source] sqlx::Error),

    #[error("failed to insert registration: {0}")]
    Registration(#[source] sqlx::Error),

    #[error("submission transaction failed: {0}")]
    Transaction(#[source] sqlx::Error),
}

/// Outcome of a status write.
#[derive(Debug)]
pub enum StatusUpdate {
    Updated(Registration),
    NotFound,
    /// The caller's expected version did not match the stored one.
    VersionMismatch { current: i32 },
}

pub struct RegistrationRepo;

impl RegistrationRepo {
    /// Insert a student and its `pending` registration in one transaction.
    pub async fn submit(
        pool: &PgPool,
        input: &CreateStudent,
    ) -> Result<(Student, Registration), SubmissionWriteError> {
        let mut tx = pool.begin().await.map_err(SubmissionWriteError::Transaction)?;

        let student = StudentRepo::insert(&mut *tx, input)
            .await
            .map_err(SubmissionWriteError::Student)?;

        let registration = Self::insert_pending(&mut *tx, student.id)
            .await
            .map_err(SubmissionWriteError::Registration)?;

        tx.commit().await.map_err(SubmissionWriteError::Transaction)?;

        tracing::debug!(
            student_id = %student.id,
            registration_id = %registration.id,
            "Submission persisted"
        );
        Ok((student, registration))
    }

    /// Insert a `pending` registration for an existing student.
    pub async fn insert_pending(
        conn: &mut PgConnection,
        student_id: DbId,
    ) -> Result<Registration, sqlx::Error> {
        let query = format!(
            "INSERT INTO registrations (student_id, status)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Registration>(&query)
            .bind(student_id)
            .bind(STATUS_PENDING)
            .fetch_one(conn)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Registration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM registrations WHERE id = $1");
        sqlx::query_as::<_, Registration>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List registrations joined with their student and school, newest first.
    pub async fn list_with_students(
        pool: &PgPool,
        scope: &ListingScope,
    ) -> Result<Vec<RegistrationWithStudent>, sqlx::Error> {
        let email = match scope {
            ListingScope::All => None,
            ListingScope::OwnEmail(email) => Some(email.as_str()),
        };

        let rows = sqlx::query_as::<_, RegistrationListRow>(
            "SELECT
                r.id, r.student_id, r.status, r.version, r.created_at, r.updated_at,
                s.first_name, s.last_name, s.email, s.project_title, s.category,
                sc.name AS school_name
             FROM registrations r
             JOIN students s ON s.id = r.student_id
             JOIN schools sc ON sc.id = s.school_id
             WHERE ($1::text IS NULL OR s.email = $1)
             ORDER BY r.created_at DESC, r.id DESC",
        )
        .bind(email)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(RegistrationWithStudent::from).collect())
    }

    /// Overwrite a registration's status.
    ///
    /// With `expected_version` set, the write only applies when the stored
    /// version matches. Without it the write is unconditional.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: RegistrationStatus,
        expected_version: Option<i32>,
    ) -> Result<StatusUpdate, sqlx::Error> {
        let query = format!(
            "UPDATE registrations
             SET status = $2, version = version + 1, updated_at = NOW()
             WHERE id = $1 AND ($3::int4 IS NULL OR version = $3)
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Registration>(&query)
            .bind(id)
            .bind(status.as_str())
            .bind(expected_version)
            .fetch_optional(pool)
            .await?;

        if let Some(registration) = updated {
            return Ok(StatusUpdate::Updated(registration));
        }

        Ok(match Self::find_by_id(pool, id).await? {
            Some(current) => StatusUpdate::VersionMismatch {
                current: current.version,
            },
            None => StatusUpdate::NotFound,
        })
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM registrations")
            .fetch_one(pool)
            .await
    }
}
