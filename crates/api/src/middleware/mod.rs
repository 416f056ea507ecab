//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the verified [`Principal`](sciday_core::roles::Principal)
//!   from a Bearer token.
//! - [`rbac::RequireStaff`] -- Requires the `admin` or `school_official` role.

pub mod auth;
pub mod rbac;
