mod config;
mod rank;
mod rules;

pub use config::ScoringPolicy;

pub(crate) use rank::{auto_select, rank_candidates, suggestion_status};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::TargetServiceTime;
use crate::ministry::roster::domain::{BlackoutDate, RoleId, Volunteer, VolunteerId};

/// Stateless scorer applying the policy weights to one volunteer at a time.
pub struct ScoringEngine {
    policy: ScoringPolicy,
}

impl ScoringEngine {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    pub fn score(
        &self,
        volunteer: &Volunteer,
        blackouts: &[BlackoutDate],
        ctx: &ScoreContext,
    ) -> ScoredCandidate {
        let (components, raw_total) = rules::score_volunteer(volunteer, blackouts, ctx, &self.policy);

        let reasons = components
            .iter()
            .filter(|component| !component.blocking)
            .map(|component| component.note.clone())
            .collect();
        let conflicts = components
            .iter()
            .filter(|component| component.blocking)
            .map(|component| component.note.clone())
            .collect();

        ScoredCandidate {
            volunteer_id: volunteer.id.clone(),
            volunteer_name: volunteer.name.clone(),
            score: raw_total.clamp(0, 100) as u8,
            reasons,
            conflicts,
            components,
        }
    }
}

/// Inputs a single scoring pass needs beyond the volunteer record itself.
#[derive(Debug, Clone, Copy)]
pub struct ScoreContext {
    pub service_date: NaiveDate,
    pub target_time: TargetServiceTime,
    /// Evaluation date for the recency rule; never read from the clock here.
    pub today: NaiveDate,
}

/// Discrete contribution to a candidate's score, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub delta: i16,
    pub note: String,
    /// Blocking components surface as conflicts rather than reasons.
    pub blocking: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    TimePreference,
    Blackout,
    MonthlyQuota,
    Recency,
    FamilyServing,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreFactor::TimePreference => "Time preference",
            ScoreFactor::Blackout => "Blackout",
            ScoreFactor::MonthlyQuota => "Monthly quota",
            ScoreFactor::Recency => "Recency",
            ScoreFactor::FamilyServing => "Family serving",
        }
    }
}

/// Scored volunteer for one role. Reasons and conflicts are populated
/// independently of the net score: a candidate can carry both a preference
/// match and a blackout conflict, and consumers must show both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub volunteer_id: VolunteerId,
    pub volunteer_name: String,
    pub score: u8,
    pub reasons: Vec<String>,
    pub conflicts: Vec<String>,
    pub components: Vec<ScoreComponent>,
}

impl ScoredCandidate {
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

/// Ranked shortlist for one role in a suggestion batch. Every role reports
/// its own status; an empty shortlist is a valid outcome, not an error.
#[derive(Debug, Clone, Serialize)]
pub struct RoleSuggestions {
    pub role_id: RoleId,
    pub role_name: String,
    pub status: SuggestionStatus,
    pub candidates: Vec<ScoredCandidate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionStatus {
    SuggestionsReady,
    NoCandidates,
    ConflictsPresent,
}

impl SuggestionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            SuggestionStatus::SuggestionsReady => "suggestions_ready",
            SuggestionStatus::NoCandidates => "no_candidates",
            SuggestionStatus::ConflictsPresent => "conflicts_present",
        }
    }
}
