use chrono::NaiveDate;
use serde::Serialize;

use crate::ministry::roster::domain::{BlackoutDate, RoleId, Volunteer, VolunteerId};

/// Read side of the congregation's backend of record. Adapters filter to
/// volunteers who hold the role and are active; the service re-checks the
/// predicate itself, so a lax adapter cannot leak ineligible candidates.
pub trait RosterDirectory: Send + Sync {
    fn active_volunteers_for_role(&self, role: &RoleId) -> Result<Vec<Volunteer>, DirectoryError>;
    fn blackout_dates(&self, volunteer: &VolunteerId)
        -> Result<Vec<BlackoutDate>, DirectoryError>;
}

/// Error enumeration for roster reads.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("roster backend unavailable: {0}")]
    Unavailable(String),
}

/// Write side of the backend: exactly one commit call per role assignment.
/// The backend's own transaction guarantees are the only atomicity promised.
pub trait AssignmentSink: Send + Sync {
    fn commit(
        &self,
        role: &RoleId,
        volunteer: &VolunteerId,
        service_date: NaiveDate,
    ) -> Result<(), CommitError>;
}

/// Per-assignment commit failures reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommitError {
    #[error("role already filled")]
    RoleFilled,
    #[error("volunteer no longer eligible")]
    VolunteerIneligible,
    #[error("assignment backend unavailable: {0}")]
    Unavailable(String),
}

/// Result of one commit attempt. Failures never abort the rest of a batch.
#[derive(Debug, Clone, Serialize)]
pub struct CommitOutcome {
    pub role_id: RoleId,
    pub volunteer_id: VolunteerId,
    pub committed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl CommitOutcome {
    pub(crate) fn committed(role_id: RoleId, volunteer_id: VolunteerId) -> Self {
        Self {
            role_id,
            volunteer_id,
            committed: true,
            failure: None,
        }
    }

    pub(crate) fn failed(role_id: RoleId, volunteer_id: VolunteerId, error: &CommitError) -> Self {
        Self {
            role_id,
            volunteer_id,
            committed: false,
            failure: Some(error.to_string()),
        }
    }
}
