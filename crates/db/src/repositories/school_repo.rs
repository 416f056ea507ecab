//! Repository for the `schools` table.

use sqlx::PgPool;

use crate::models::school::School;

const COLUMNS: &str = "id, name, address, created_at";

/// Read-only access to schools.
pub struct SchoolRepo;

impl SchoolRepo {
    /// List all schools, ordered by name ascending.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<School>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM schools ORDER BY name ASC");
        sqlx::query_as::<_, School>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<School>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM schools WHERE id = $1");
        sqlx::query_as::<_, School>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
