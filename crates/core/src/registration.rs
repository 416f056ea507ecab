//! Registration status values and parsing.
//!
//! A registration starts out `pending` and staff may move it to any of the
//! three states from any state. There is no directed transition graph; the
//! only guard on a status write is the optional version check performed by
//! the repository.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";

/// All valid status values, in display order.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_APPROVED, STATUS_REJECTED];

/// Workflow state of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl RegistrationStatus {
    /// The lowercase name stored in the `registrations.status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => STATUS_PENDING,
            Self::Approved => STATUS_APPROVED,
            Self::Rejected => STATUS_REJECTED,
        }
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegistrationStatus {
    type Err = CoreError;

    /// Parse a status name. Matching is exact: `"Approved"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_PENDING => Ok(Self::Pending),
            STATUS_APPROVED => Ok(Self::Approved),
            STATUS_REJECTED => Ok(Self::Rejected),
            _ => Err(CoreError::Validation("Invalid status".to_string())),
        }
    }
}

/// Body of a status-change request as sent by the dashboard.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChangeRequest {
    pub registration_id: Option<String>,
    pub status: Option<String>,
    /// When present, the write only applies if the stored version matches.
    pub expected_version: Option<i32>,
}

/// A validated status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub registration_id: DbId,
    pub status: RegistrationStatus,
    pub expected_version: Option<i32>,
}

impl StatusChangeRequest {
    /// Check presence first, then the status value, then the id format.
    pub fn validate(self) -> Result<StatusChange, CoreError> {
        let (Some(id), Some(status)) = (
            self.registration_id.filter(|v| !v.trim().is_empty()),
            self.status.filter(|v| !v.trim().is_empty()),
        ) else {
            return Err(CoreError::Validation("Missing required fields".to_string()));
        };

        let status: RegistrationStatus = status.parse()?;
        let registration_id = DbId::parse_str(id.trim())
            .map_err(|_| CoreError::Validation("Invalid registrationId".to_string()))?;

        Ok(StatusChange {
            registration_id,
            status,
            expected_version: self.expected_version,
        })
    }
}
