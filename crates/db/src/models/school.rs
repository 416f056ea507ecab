use sciday_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `schools` table. Schools are seeded, never created here.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct School {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub created_at: Timestamp,
}

/// Public projection used to populate the registration form.
#[derive(Debug, Clone, Serialize)]
pub struct SchoolOption {
    pub id: String,
    pub name: String,
}

impl From<School> for SchoolOption {
    fn from(school: School) -> Self {
        Self {
            id: school.id,
            name: school.name,
        }
    }
}
