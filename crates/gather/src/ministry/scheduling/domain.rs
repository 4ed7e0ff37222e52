use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ministry::roster::domain::{RoleId, TeamRole, TimePreference, VolunteerId};

/// One scheduling run: which gathering, and which roles to fill for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub service_date: NaiveDate,
    /// Display label for the gathering time, e.g. "9:00 AM" or "11am".
    pub service_time: String,
    pub roles: Vec<TeamRole>,
    /// Evaluation date for recency scoring. Defaults to the local date at the
    /// service entry point when omitted.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// The gathering a request resolves to for preference matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetServiceTime {
    #[serde(rename = "9am")]
    NineAm,
    #[serde(rename = "11am")]
    ElevenAm,
}

impl TargetServiceTime {
    /// Any label mentioning a 9 is the early gathering; everything else is
    /// the late one.
    pub fn from_label(label: &str) -> Self {
        if label.contains('9') {
            Self::NineAm
        } else {
            Self::ElevenAm
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TargetServiceTime::NineAm => "9am",
            TargetServiceTime::ElevenAm => "11am",
        }
    }

    /// Whether a volunteer's stated preference admits this gathering.
    pub fn admitted_by(self, preference: TimePreference) -> bool {
        match preference {
            TimePreference::Either => true,
            TimePreference::NineAm => self == Self::NineAm,
            TimePreference::ElevenAm => self == Self::ElevenAm,
        }
    }
}

/// A reviewed role-to-volunteer pairing handed to the backend for commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub role_id: RoleId,
    pub volunteer_id: VolunteerId,
}
