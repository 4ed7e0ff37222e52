use super::config::ScoringPolicy;
use super::{ScoredCandidate, SuggestionStatus};
use crate::ministry::roster::domain::VolunteerId;

/// Order a role's candidates best-first and cut to the shortlist. The sort is
/// stable, so equal scores keep their roster iteration order.
pub(crate) fn rank_candidates(
    mut candidates: Vec<ScoredCandidate>,
    policy: &ScoringPolicy,
) -> Vec<ScoredCandidate> {
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(policy.shortlist_size);
    candidates
}

/// The default pick for a role: its top candidate, but only when that
/// candidate clears the confidence threshold. Roles below it stay unselected
/// and require an explicit human choice.
pub(crate) fn auto_select(
    ranked: &[ScoredCandidate],
    policy: &ScoringPolicy,
) -> Option<VolunteerId> {
    ranked
        .first()
        .filter(|candidate| candidate.score >= policy.auto_select_threshold)
        .map(|candidate| candidate.volunteer_id.clone())
}

pub(crate) fn suggestion_status(ranked: &[ScoredCandidate]) -> SuggestionStatus {
    if ranked.is_empty() {
        SuggestionStatus::NoCandidates
    } else if ranked.iter().any(ScoredCandidate::has_conflicts) {
        SuggestionStatus::ConflictsPresent
    } else {
        SuggestionStatus::SuggestionsReady
    }
}
