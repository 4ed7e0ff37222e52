//! Volunteer auto-scheduling: eligibility resolution, candidate scoring,
//! shortlist ranking, and assignment commit against the backend of record.

pub mod domain;
pub(crate) mod guard;
pub mod repository;
pub mod router;
pub(crate) mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Assignment, ScheduleRequest, TargetServiceTime};
pub use guard::RequestViolation;
pub use repository::{
    AssignmentSink, CommitError, CommitOutcome, DirectoryError, RosterDirectory,
};
pub use router::scheduling_router;
pub use scoring::{
    RoleSuggestions, ScoreComponent, ScoreContext, ScoreFactor, ScoredCandidate, ScoringEngine,
    ScoringPolicy, SuggestionStatus,
};
pub use service::{SchedulingService, SchedulingServiceError, SuggestionBatch};
