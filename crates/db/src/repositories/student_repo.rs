//! Repository for the `students` table.

use sciday_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::student::{CreateStudent, Student};

const COLUMNS: &str = "id, first_name, last_name, email, phone, school_id, grade, \
    project_title, project_description, category, created_at";

pub struct StudentRepo;

impl StudentRepo {
    /// Insert a student on the given connection, returning the created row.
    ///
    /// Takes a connection rather than the pool so the caller can run it
    /// inside the submission transaction.
    pub async fn insert(
        conn: &mut PgConnection,
        input: &CreateStudent,
    ) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students
                (first_name, last_name, email, phone, school_id, grade,
                 project_title, project_description, category)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.school_id)
            .bind(input.grade)
            .bind(&input.project_title)
            .bind(&input.project_description)
            .bind(&input.category)
            .fetch_one(conn)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of student rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(pool)
            .await
    }
}
