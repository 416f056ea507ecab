//! Project categories offered on the registration form.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category { id: "biology", name: "Biology" },
    Category { id: "chemistry", name: "Chemistry" },
    Category { id: "physics", name: "Physics" },
    Category { id: "engineering", name: "Engineering" },
    Category { id: "environmental", name: "Environmental Science" },
    Category { id: "computer", name: "Computer Science" },
];
