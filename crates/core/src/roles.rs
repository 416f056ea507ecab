//! Well-known role names and the authenticated principal.
//!
//! Role names must match the strings the identity service places in a
//! token's `app_metadata.roles` array.

use std::collections::BTreeSet;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_SCHOOL_OFFICIAL: &str = "school_official";

/// A role this service recognises. Any other role string is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Admin,
    SchoolOfficial,
}

impl Role {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            ROLE_ADMIN => Some(Self::Admin),
            ROLE_SCHOOL_OFFICIAL => Some(Self::SchoolOfficial),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => ROLE_ADMIN,
            Self::SchoolOfficial => ROLE_SCHOOL_OFFICIAL,
        }
    }
}

/// The verified requester of an authenticated call.
///
/// Built once from a validated token and handed to every handler and
/// policy check that needs to know who is asking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Identity-service user id (the token's `sub` claim).
    pub user_id: String,
    pub email: String,
    pub roles: BTreeSet<Role>,
}

impl Principal {
    /// Build a principal, keeping only the role names this service knows.
    pub fn new<I, S>(user_id: impl Into<String>, email: impl Into<String>, role_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            roles: role_names
                .into_iter()
                .filter_map(|name| Role::parse(name.as_ref()))
                .collect(),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// True for admins and school officials.
    pub fn is_staff(&self) -> bool {
        self.has_role(Role::Admin) || self.has_role(Role::SchoolOfficial)
    }
}
