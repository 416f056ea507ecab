//! Row types and insert DTOs, one module per table.

pub mod registration;
pub mod school;
pub mod student;
