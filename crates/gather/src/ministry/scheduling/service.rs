use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::Serialize;

use super::domain::{ScheduleRequest, TargetServiceTime};
use super::guard::{self, RequestViolation};
use super::repository::{
    AssignmentSink, CommitError, CommitOutcome, DirectoryError, RosterDirectory,
};
use super::scoring::{
    auto_select, rank_candidates, suggestion_status, RoleSuggestions, ScoreContext, ScoringEngine,
    ScoringPolicy,
};
use crate::ministry::roster::domain::{RoleId, Volunteer, VolunteerId};

/// Service composing the roster boundary, the scorer, and the ranker into the
/// suggestion pipeline. Stateless across invocations: every run reads a fresh
/// roster snapshot and produces a disjoint suggestion set, so concurrent runs
/// need no coordination.
pub struct SchedulingService<D, S> {
    directory: Arc<D>,
    sink: Arc<S>,
    engine: Arc<ScoringEngine>,
}

/// One scheduling run's output: ranked shortlists per role plus the
/// auto-selected defaults. Ephemeral; discarded once the operator applies or
/// abandons it.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionBatch {
    pub service_date: NaiveDate,
    pub target_time: TargetServiceTime,
    pub roles: Vec<RoleSuggestions>,
    pub selected_assignments: BTreeMap<RoleId, VolunteerId>,
}

impl<D, S> SchedulingService<D, S>
where
    D: RosterDirectory + 'static,
    S: AssignmentSink + 'static,
{
    pub fn new(directory: Arc<D>, sink: Arc<S>, policy: ScoringPolicy) -> Self {
        Self {
            directory,
            sink,
            engine: Arc::new(ScoringEngine::new(policy)),
        }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        self.engine.policy()
    }

    /// Generate ranked candidate shortlists for every role in the request.
    ///
    /// Roles with nobody eligible come back with `NoCandidates` status and an
    /// empty shortlist; only malformed input or an unreachable roster backend
    /// fails the batch.
    pub fn generate_suggestions(
        &self,
        request: &ScheduleRequest,
    ) -> Result<SuggestionBatch, SchedulingServiceError> {
        let today = request
            .today
            .unwrap_or_else(|| Local::now().date_naive());
        let validated = guard::validate(request, today)?;
        let ctx = ScoreContext {
            service_date: validated.service_date,
            target_time: validated.target_time,
            today: validated.today,
        };

        let mut roles = Vec::with_capacity(validated.roles.len());
        let mut selected_assignments = BTreeMap::new();

        for role in validated.roles {
            let roster = self.directory.active_volunteers_for_role(&role.id)?;
            let mut candidates = Vec::new();
            for volunteer in eligible_candidates(roster, &role.id) {
                let blackouts = self.directory.blackout_dates(&volunteer.id)?;
                candidates.push(self.engine.score(&volunteer, &blackouts, &ctx));
            }

            let ranked = rank_candidates(candidates, self.engine.policy());
            if let Some(volunteer_id) = auto_select(&ranked, self.engine.policy()) {
                selected_assignments.insert(role.id.clone(), volunteer_id);
            }

            roles.push(RoleSuggestions {
                role_id: role.id.clone(),
                role_name: role.name.clone(),
                status: suggestion_status(&ranked),
                candidates: ranked,
            });
        }

        Ok(SuggestionBatch {
            service_date: validated.service_date,
            target_time: validated.target_time,
            roles,
            selected_assignments,
        })
    }

    /// Commit a reviewed role-to-volunteer mapping.
    ///
    /// An empty mapping is a no-op returning an empty list. Each pair is
    /// re-checked against the live roster before its commit call, and
    /// failures are reported per assignment; the rest of the batch is always
    /// attempted.
    pub fn apply_assignments(
        &self,
        assignments: &BTreeMap<RoleId, VolunteerId>,
        service_date: NaiveDate,
    ) -> Vec<CommitOutcome> {
        let mut outcomes = Vec::with_capacity(assignments.len());

        for (role_id, volunteer_id) in assignments {
            let roster = match self.directory.active_volunteers_for_role(role_id) {
                Ok(roster) => roster,
                Err(DirectoryError::Unavailable(detail)) => {
                    outcomes.push(CommitOutcome::failed(
                        role_id.clone(),
                        volunteer_id.clone(),
                        &CommitError::Unavailable(detail),
                    ));
                    continue;
                }
            };

            let still_eligible = roster
                .iter()
                .any(|volunteer| &volunteer.id == volunteer_id && volunteer.is_active());
            if !still_eligible {
                outcomes.push(CommitOutcome::failed(
                    role_id.clone(),
                    volunteer_id.clone(),
                    &CommitError::VolunteerIneligible,
                ));
                continue;
            }

            match self.sink.commit(role_id, volunteer_id, service_date) {
                Ok(()) => {
                    outcomes.push(CommitOutcome::committed(role_id.clone(), volunteer_id.clone()))
                }
                Err(error) => outcomes.push(CommitOutcome::failed(
                    role_id.clone(),
                    volunteer_id.clone(),
                    &error,
                )),
            }
        }

        outcomes
    }
}

/// Structural eligibility: the volunteer holds the role and is active. The
/// directory is expected to pre-filter, but the predicate is re-applied here
/// so scoring never sees a candidate a lax adapter let through.
fn eligible_candidates(roster: Vec<Volunteer>, role_id: &RoleId) -> Vec<Volunteer> {
    roster
        .into_iter()
        .filter(|volunteer| volunteer.is_active() && volunteer.holds_role(role_id))
        .collect()
}

/// Error raised when a whole suggestion batch is rejected.
#[derive(Debug, thiserror::Error)]
pub enum SchedulingServiceError {
    #[error(transparent)]
    InvalidRequest(#[from] RequestViolation),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}
