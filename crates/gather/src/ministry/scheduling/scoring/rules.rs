use tracing::warn;

use super::config::ScoringPolicy;
use super::{ScoreComponent, ScoreContext, ScoreFactor};
use crate::ministry::roster::domain::{BlackoutDate, Volunteer};

/// Apply the policy's adjustments to one volunteer. Adjustments are
/// independent and order-insensitive; the caller clamps the raw total.
pub(crate) fn score_volunteer(
    volunteer: &Volunteer,
    blackouts: &[BlackoutDate],
    ctx: &ScoreContext,
    policy: &ScoringPolicy,
) -> (Vec<ScoreComponent>, i16) {
    let mut components = Vec::new();
    let mut total = policy.base_score;

    if ctx.target_time.admitted_by(volunteer.preferred_service_time) {
        components.push(ScoreComponent {
            factor: ScoreFactor::TimePreference,
            delta: policy.preferred_time_bonus,
            note: "Preferred time".to_string(),
            blocking: false,
        });
        total += policy.preferred_time_bonus;
    }

    if blacked_out(volunteer, blackouts, ctx) {
        components.push(ScoreComponent {
            factor: ScoreFactor::Blackout,
            delta: -policy.blackout_penalty,
            note: "Blackout date".to_string(),
            blocking: true,
        });
        total -= policy.blackout_penalty;
    }

    if volunteer.services_this_month < volunteer.max_services_per_month {
        let remaining = volunteer.remaining_monthly_slots();
        components.push(ScoreComponent {
            factor: ScoreFactor::MonthlyQuota,
            delta: policy.quota_open_bonus,
            note: format!("{remaining} slots available"),
            blocking: false,
        });
        total += policy.quota_open_bonus;
    } else {
        components.push(ScoreComponent {
            factor: ScoreFactor::MonthlyQuota,
            delta: -policy.quota_exhausted_penalty,
            note: "At monthly limit".to_string(),
            blocking: true,
        });
        total -= policy.quota_exhausted_penalty;
    }

    if let Some(last_served) = volunteer.last_served {
        let days_since = (ctx.today - last_served).num_days();
        if days_since > policy.recency_threshold_days {
            components.push(ScoreComponent {
                factor: ScoreFactor::Recency,
                delta: policy.recency_bonus,
                note: "Due to serve".to_string(),
                blocking: false,
            });
            total += policy.recency_bonus;
        }
    }

    if !volunteer.family_members.is_empty() {
        components.push(ScoreComponent {
            factor: ScoreFactor::FamilyServing,
            delta: 0,
            note: "Family can serve together".to_string(),
            blocking: false,
        });
    }

    (components, total)
}

fn blacked_out(volunteer: &Volunteer, blackouts: &[BlackoutDate], ctx: &ScoreContext) -> bool {
    blackouts.iter().any(|blackout| {
        if blackout.end_date < blackout.start_date {
            warn!(
                volunteer = %volunteer.id.0,
                blackout = %blackout.id,
                "ignoring inverted blackout interval"
            );
            return false;
        }
        blackout.contains(ctx.service_date)
    })
}
