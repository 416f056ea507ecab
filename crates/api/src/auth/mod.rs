//! Identity-service token handling.
//!
//! - [`jwt`] -- HS256 access-token validation and the claim layout.

pub mod jwt;
