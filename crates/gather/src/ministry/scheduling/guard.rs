use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::domain::{ScheduleRequest, TargetServiceTime};
use crate::ministry::roster::domain::{RoleId, TeamRole};

/// Validation errors raised before any scoring happens. A violation rejects
/// the whole batch; there are no partial results.
#[derive(Debug, thiserror::Error)]
pub enum RequestViolation {
    #[error("request contains no roles to fill")]
    EmptyBatch,
    #[error("role {0:?} appears more than once in the batch")]
    DuplicateRole(RoleId),
    #[error("role {0:?} has no name")]
    UnnamedRole(RoleId),
    #[error("role {role:?} capacity bounds are inverted (min {min}, max {max})")]
    InvertedCapacity { role: RoleId, min: u8, max: u8 },
}

/// A request that passed validation, with scoring inputs derived.
#[derive(Debug)]
pub(crate) struct ValidatedRequest<'a> {
    pub(crate) service_date: NaiveDate,
    pub(crate) target_time: TargetServiceTime,
    pub(crate) today: NaiveDate,
    pub(crate) roles: &'a [TeamRole],
}

pub(crate) fn validate(
    request: &ScheduleRequest,
    today: NaiveDate,
) -> Result<ValidatedRequest<'_>, RequestViolation> {
    if request.roles.is_empty() {
        return Err(RequestViolation::EmptyBatch);
    }

    let mut seen = BTreeSet::new();
    for role in &request.roles {
        if role.name.trim().is_empty() {
            return Err(RequestViolation::UnnamedRole(role.id.clone()));
        }
        if role.min_volunteers > role.max_volunteers {
            return Err(RequestViolation::InvertedCapacity {
                role: role.id.clone(),
                min: role.min_volunteers,
                max: role.max_volunteers,
            });
        }
        if !seen.insert(role.id.clone()) {
            return Err(RequestViolation::DuplicateRole(role.id.clone()));
        }
    }

    Ok(ValidatedRequest {
        service_date: request.service_date,
        target_time: TargetServiceTime::from_label(&request.service_time),
        today,
        roles: &request.roles,
    })
}
