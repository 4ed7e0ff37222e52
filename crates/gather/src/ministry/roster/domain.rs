use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for volunteers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VolunteerId(pub String);

/// Identifier of the person record behind a volunteer profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId(pub String);

/// Identifier wrapper for serving teams.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub String);

/// Identifier wrapper for team roles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoleId(pub String);

/// Lifecycle status of a volunteer profile. Only `Active` volunteers are
/// eligible for scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VolunteerStatus {
    Active,
    Inactive,
    Onboarding,
    OnLeave,
}

impl VolunteerStatus {
    pub const fn label(self) -> &'static str {
        match self {
            VolunteerStatus::Active => "active",
            VolunteerStatus::Inactive => "inactive",
            VolunteerStatus::Onboarding => "onboarding",
            VolunteerStatus::OnLeave => "on-leave",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            "onboarding" => Some(Self::Onboarding),
            "on-leave" | "on leave" => Some(Self::OnLeave),
            _ => None,
        }
    }
}

/// Which Sunday gathering a volunteer prefers to serve at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimePreference {
    #[serde(rename = "9am")]
    NineAm,
    #[serde(rename = "11am")]
    ElevenAm,
    #[serde(rename = "either")]
    Either,
}

impl TimePreference {
    pub const fn label(self) -> &'static str {
        match self {
            TimePreference::NineAm => "9am",
            TimePreference::ElevenAm => "11am",
            TimePreference::Either => "either",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "9am" => Some(Self::NineAm),
            "11am" => Some(Self::ElevenAm),
            "either" => Some(Self::Either),
            _ => None,
        }
    }
}

/// A serving volunteer as mirrored from the backend of record. The scheduling
/// core reads these snapshots and never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volunteer {
    pub id: VolunteerId,
    pub person_id: PersonId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub teams: Vec<TeamId>,
    pub roles: Vec<RoleId>,
    pub skills: Vec<String>,
    pub preferred_service_time: TimePreference,
    pub max_services_per_month: u8,
    pub services_this_month: u8,
    pub status: VolunteerStatus,
    pub family_members: Vec<VolunteerId>,
    pub last_served: Option<NaiveDate>,
}

impl Volunteer {
    pub fn is_active(&self) -> bool {
        self.status == VolunteerStatus::Active
    }

    pub fn holds_role(&self, role: &RoleId) -> bool {
        self.roles.contains(role)
    }

    /// Serving slots left this month; a penalty signal, not a hard cap.
    pub fn remaining_monthly_slots(&self) -> u8 {
        self.max_services_per_month
            .saturating_sub(self.services_this_month)
    }
}

/// A serving team. `member_count` is derived display data, not authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub category: String,
    pub leader: Option<VolunteerId>,
    pub member_count: u32,
}

/// A named serving position owned by a team. Capacity bounds are
/// informational in the scheduler; it fills at most one volunteer per role
/// per run. Background-check enforcement happens upstream of scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRole {
    pub id: RoleId,
    pub team_id: TeamId,
    pub name: String,
    pub min_volunteers: u8,
    pub max_volunteers: u8,
    pub requires_background_check: bool,
    pub skills: Vec<String>,
}

/// An inclusive date range during which a volunteer is unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackoutDate {
    pub id: String,
    pub volunteer_id: VolunteerId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
}

impl BlackoutDate {
    /// Closed-interval membership: both endpoints count as blacked out.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
