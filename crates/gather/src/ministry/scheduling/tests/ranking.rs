use super::common::*;
use crate::ministry::roster::domain::VolunteerId;
use crate::ministry::scheduling::scoring::{
    auto_select, rank_candidates, suggestion_status, ScoringPolicy, SuggestionStatus,
};

#[test]
fn ranking_is_non_increasing_and_truncated() {
    let candidates = vec![
        candidate("vol-1", 40),
        candidate("vol-2", 95),
        candidate("vol-3", 70),
        candidate("vol-4", 85),
        candidate("vol-5", 20),
    ];

    let ranked = rank_candidates(candidates, &scoring_policy());

    assert_eq!(ranked.len(), 3);
    assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));
    assert_eq!(ranked[0].volunteer_id, VolunteerId("vol-2".to_string()));
}

#[test]
fn equal_scores_keep_roster_order() {
    let candidates = vec![
        candidate("vol-1", 85),
        candidate("vol-2", 85),
        candidate("vol-3", 85),
    ];

    let ranked = rank_candidates(candidates, &scoring_policy());

    let order: Vec<&str> = ranked
        .iter()
        .map(|candidate| candidate.volunteer_id.0.as_str())
        .collect();
    assert_eq!(order, vec!["vol-1", "vol-2", "vol-3"]);
}

#[test]
fn shortlist_size_is_policy_driven() {
    let policy = ScoringPolicy {
        shortlist_size: 1,
        ..ScoringPolicy::default()
    };
    let ranked = rank_candidates(vec![candidate("vol-1", 60), candidate("vol-2", 90)], &policy);

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].volunteer_id, VolunteerId("vol-2".to_string()));
}

#[test]
fn auto_select_requires_the_threshold() {
    let policy = scoring_policy();

    let below = vec![candidate("vol-1", 49)];
    let at = vec![candidate("vol-2", 50)];

    assert_eq!(auto_select(&below, &policy), None);
    assert_eq!(
        auto_select(&at, &policy),
        Some(VolunteerId("vol-2".to_string()))
    );
}

#[test]
fn auto_select_of_empty_shortlist_is_none() {
    assert_eq!(auto_select(&[], &scoring_policy()), None);
}

#[test]
fn status_reflects_the_shortlist() {
    let mut conflicted = candidate("vol-1", 0);
    conflicted.conflicts.push("Blackout date".to_string());

    assert_eq!(suggestion_status(&[]), SuggestionStatus::NoCandidates);
    assert_eq!(
        suggestion_status(&[conflicted]),
        SuggestionStatus::ConflictsPresent
    );
    assert_eq!(
        suggestion_status(&[candidate("vol-2", 85)]),
        SuggestionStatus::SuggestionsReady
    );
}
