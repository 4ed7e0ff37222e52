use serde::{Deserialize, Serialize};

/// Scoring weights for the volunteer suggestion pipeline, versioned so tests
/// can pin behavior and administrators can tune weights without code changes.
///
/// Penalties are stored as positive magnitudes and subtracted where applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub version: u32,
    /// Every eligible candidate starts here before adjustments.
    pub base_score: i16,
    pub preferred_time_bonus: i16,
    /// Large enough to dominate every positive adjustment combined.
    pub blackout_penalty: i16,
    pub quota_open_bonus: i16,
    pub quota_exhausted_penalty: i16,
    pub recency_bonus: i16,
    /// Whole days since last serving beyond which the recency bonus applies.
    pub recency_threshold_days: i64,
    /// Minimum top score for a role to receive an automatic default pick.
    pub auto_select_threshold: u8,
    /// Candidates surfaced per role after ranking.
    pub shortlist_size: usize,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            version: 1,
            base_score: 50,
            preferred_time_bonus: 15,
            blackout_penalty: 100,
            quota_open_bonus: 20,
            quota_exhausted_penalty: 30,
            recency_bonus: 10,
            recency_threshold_days: 14,
            auto_select_threshold: 50,
            shortlist_size: 3,
        }
    }
}
