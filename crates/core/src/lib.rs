//! Domain types and rules for Science Day registrations.
//!
//! This crate performs no I/O. The database crate persists the values
//! produced here and the API crate maps [`error::CoreError`] onto HTTP.

pub mod access;
pub mod categories;
pub mod error;
pub mod registration;
pub mod roles;
pub mod submission;
pub mod types;
