//! Student model and insert DTO.

use sciday_core::submission::ValidSubmission;
use sciday_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub school_id: String,
    pub grade: i32,
    pub project_title: String,
    pub project_description: String,
    pub category: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a student.
#[derive(Debug, Clone)]
pub struct CreateStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub school_id: String,
    pub grade: i32,
    pub project_title: String,
    pub project_description: String,
    pub category: String,
}

impl From<ValidSubmission> for CreateStudent {
    fn from(v: ValidSubmission) -> Self {
        Self {
            first_name: v.first_name,
            last_name: v.last_name,
            email: v.email,
            phone: v.phone,
            school_id: v.school_id,
            grade: v.grade,
            project_title: v.project_title,
            project_description: v.project_description,
            category: v.category,
        }
    }
}
