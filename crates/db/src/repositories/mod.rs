//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` (or a transaction connection) as the first argument.

pub mod registration_repo;
pub mod school_repo;
pub mod student_repo;

pub use registration_repo::{RegistrationRepo, StatusUpdate, SubmissionWriteError};
pub use school_repo::SchoolRepo;
pub use student_repo::StudentRepo;
