//! Registration models, including the joined listing shape.

use sciday_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `registrations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Registration {
    pub id: DbId,
    pub student_id: DbId,
    pub status: String,
    /// Incremented on every status write; used for check-and-set updates.
    pub version: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Flat result row of the registrations/students/schools join.
#[derive(Debug, Clone, FromRow)]
pub struct RegistrationListRow {
    pub id: DbId,
    pub student_id: DbId,
    pub status: String,
    pub version: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub project_title: String,
    pub category: String,
    pub school_name: String,
}

/// A registration with its student and school nested, as returned by the
/// listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationWithStudent {
    pub id: DbId,
    pub student_id: DbId,
    pub status: String,
    pub version: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub student: StudentSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentSummary {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub project_title: String,
    pub category: String,
    pub school: SchoolSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct SchoolSummary {
    pub name: String,
}

impl From<RegistrationListRow> for RegistrationWithStudent {
    fn from(row: RegistrationListRow) -> Self {
        Self {
            id: row.id,
            student_id: row.student_id,
            status: row.status,
            version: row.version,
            created_at: row.created_at,
            updated_at: row.updated_at,
            student: StudentSummary {
                first_name: row.first_name,
                last_name: row.last_name,
                email: row.email,
                project_title: row.project_title,
                category: row.category,
                school: SchoolSummary {
                    name: row.school_name,
                },
            },
        }
    }
}
