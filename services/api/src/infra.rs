use std::collections::{HashMap, HashSet};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveTime};
use gather::ministry::roster::domain::{
    BlackoutDate, PersonId, RoleId, TeamId, TeamRole, TimePreference, Volunteer, VolunteerId,
    VolunteerStatus,
};
use gather::ministry::scheduling::{
    AssignmentSink, CommitError, DirectoryError, RosterDirectory, ScoringPolicy,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Roster adapter backed by in-memory state. Stands in for the managed
/// backend's row-level-security RPC surface.
#[derive(Default, Clone)]
pub(crate) struct InMemoryRosterDirectory {
    volunteers: Arc<Mutex<Vec<Volunteer>>>,
    blackouts: Arc<Mutex<HashMap<VolunteerId, Vec<BlackoutDate>>>>,
}

impl InMemoryRosterDirectory {
    pub(crate) fn new(volunteers: Vec<Volunteer>, blackouts: Vec<BlackoutDate>) -> Self {
        let mut by_volunteer: HashMap<VolunteerId, Vec<BlackoutDate>> = HashMap::new();
        for blackout in blackouts {
            by_volunteer
                .entry(blackout.volunteer_id.clone())
                .or_default()
                .push(blackout);
        }

        Self {
            volunteers: Arc::new(Mutex::new(volunteers)),
            blackouts: Arc::new(Mutex::new(by_volunteer)),
        }
    }
}

impl RosterDirectory for InMemoryRosterDirectory {
    fn active_volunteers_for_role(&self, role: &RoleId) -> Result<Vec<Volunteer>, DirectoryError> {
        let guard = self.volunteers.lock().expect("roster mutex poisoned");
        Ok(guard
            .iter()
            .filter(|volunteer| volunteer.is_active() && volunteer.holds_role(role))
            .cloned()
            .collect())
    }

    fn blackout_dates(
        &self,
        volunteer: &VolunteerId,
    ) -> Result<Vec<BlackoutDate>, DirectoryError> {
        let guard = self.blackouts.lock().expect("blackout mutex poisoned");
        Ok(guard.get(volunteer).cloned().unwrap_or_default())
    }
}

/// Assignment adapter recording commits in memory. A role can be filled once
/// per service date; a second commit reports the backend's conflict error.
#[derive(Default, Clone)]
pub(crate) struct InMemoryAssignmentSink {
    filled: Arc<Mutex<HashSet<(RoleId, NaiveDate)>>>,
    events: Arc<Mutex<Vec<(RoleId, VolunteerId, NaiveDate)>>>,
}

impl InMemoryAssignmentSink {
    pub(crate) fn events(&self) -> Vec<(RoleId, VolunteerId, NaiveDate)> {
        self.events.lock().expect("sink mutex poisoned").clone()
    }
}

impl AssignmentSink for InMemoryAssignmentSink {
    fn commit(
        &self,
        role: &RoleId,
        volunteer: &VolunteerId,
        service_date: NaiveDate,
    ) -> Result<(), CommitError> {
        let mut filled = self.filled.lock().expect("sink mutex poisoned");
        if !filled.insert((role.clone(), service_date)) {
            return Err(CommitError::RoleFilled);
        }

        self.events
            .lock()
            .expect("sink mutex poisoned")
            .push((role.clone(), volunteer.clone(), service_date));
        Ok(())
    }
}

pub(crate) fn default_scoring_policy() -> ScoringPolicy {
    ScoringPolicy::default()
}

pub(crate) fn demo_roles() -> Vec<TeamRole> {
    vec![
        TeamRole {
            id: RoleId("worship-leader".to_string()),
            team_id: TeamId("worship".to_string()),
            name: "Worship Leader".to_string(),
            min_volunteers: 1,
            max_volunteers: 1,
            requires_background_check: false,
            skills: vec!["vocals".to_string(), "guitar".to_string()],
        },
        TeamRole {
            id: RoleId("vocalist".to_string()),
            team_id: TeamId("worship".to_string()),
            name: "Vocalist".to_string(),
            min_volunteers: 1,
            max_volunteers: 3,
            requires_background_check: false,
            skills: vec!["vocals".to_string()],
        },
        TeamRole {
            id: RoleId("sound-engineer".to_string()),
            team_id: TeamId("tech".to_string()),
            name: "Sound Engineer".to_string(),
            min_volunteers: 1,
            max_volunteers: 2,
            requires_background_check: false,
            skills: vec!["audio".to_string()],
        },
        TeamRole {
            id: RoleId("kids-check-in".to_string()),
            team_id: TeamId("kids".to_string()),
            name: "Kids Check-In".to_string(),
            min_volunteers: 1,
            max_volunteers: 2,
            requires_background_check: true,
            skills: Vec::new(),
        },
    ]
}

pub(crate) fn demo_roster() -> (Vec<Volunteer>, Vec<BlackoutDate>) {
    let volunteers = vec![
        demo_volunteer(
            "vol-1",
            "Dana Whitfield",
            &["worship-leader", "vocalist"],
            TimePreference::NineAm,
            3,
            1,
            Some("2025-02-09"),
        ),
        demo_volunteer(
            "vol-2",
            "Eli Ortega",
            &["sound-engineer"],
            TimePreference::Either,
            4,
            4,
            Some("2025-03-02"),
        ),
        demo_volunteer(
            "vol-3",
            "Faye Lin",
            &["vocalist"],
            TimePreference::ElevenAm,
            4,
            1,
            None,
        ),
        demo_volunteer(
            "vol-4",
            "Gus Moran",
            &["vocalist", "kids-check-in"],
            TimePreference::Either,
            4,
            0,
            Some("2025-01-26"),
        ),
        demo_volunteer(
            "vol-5",
            "Hana Cho",
            &["sound-engineer"],
            TimePreference::NineAm,
            2,
            0,
            Some("2025-02-23"),
        ),
    ];

    let blackouts = vec![BlackoutDate {
        id: "blk-1".to_string(),
        volunteer_id: VolunteerId("vol-4".to_string()),
        start_date: date("2025-03-07"),
        end_date: date("2025-03-10"),
        reason: Some("Spring break trip".to_string()),
    }];

    (volunteers, blackouts)
}

fn demo_volunteer(
    id: &str,
    name: &str,
    roles: &[&str],
    preferred_service_time: TimePreference,
    max_services_per_month: u8,
    services_this_month: u8,
    last_served: Option<&str>,
) -> Volunteer {
    Volunteer {
        id: VolunteerId(id.to_string()),
        person_id: PersonId(format!("person-{id}")),
        name: name.to_string(),
        email: Some(format!("{id}@gather.example")),
        phone: None,
        teams: Vec::new(),
        roles: roles.iter().map(|role| RoleId(role.to_string())).collect(),
        skills: Vec::new(),
        preferred_service_time,
        max_services_per_month,
        services_this_month,
        status: VolunteerStatus::Active,
        family_members: Vec::new(),
        last_served: last_served.map(date),
    }
}

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid demo date")
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_time(raw: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw.trim(), "%H:%M:%S"))
        .map_err(|err| format!("failed to parse '{raw}' as HH:MM ({err})"))
}
