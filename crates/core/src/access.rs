//! Access rules for reading and mutating registrations.

use crate::error::CoreError;
use crate::roles::{Principal, Role};

/// Which registrations a principal may list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingScope {
    /// Every registration.
    All,
    /// Only registrations whose student email equals this address.
    OwnEmail(String),
}

impl ListingScope {
    pub fn for_principal(principal: &Principal) -> Self {
        if principal.has_role(Role::Admin) {
            return Self::All;
        }
        if principal.has_role(Role::SchoolOfficial) {
            // TODO: restrict to the official's school once identity tokens
            // carry a school_id claim. Until then officials see everything.
            return Self::All;
        }
        Self::OwnEmail(principal.email.clone())
    }
}

/// Only staff may change a registration's status.
pub fn ensure_staff(principal: &Principal) -> Result<(), CoreError> {
    if principal.is_staff() {
        Ok(())
    } else {
        Err(CoreError::Forbidden("Insufficient permissions".to_string()))
    }
}
