use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::ministry::roster::domain::{
    BlackoutDate, PersonId, RoleId, TeamId, TeamRole, TimePreference, Volunteer, VolunteerId,
    VolunteerStatus,
};
use crate::ministry::scheduling::domain::{ScheduleRequest, TargetServiceTime};
use crate::ministry::scheduling::repository::{
    AssignmentSink, CommitError, DirectoryError, RosterDirectory,
};
use crate::ministry::scheduling::scoring::{ScoreContext, ScoredCandidate, ScoringEngine, ScoringPolicy};
use crate::ministry::scheduling::service::SchedulingService;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn service_date() -> NaiveDate {
    date(2025, 3, 9)
}

pub(super) fn today() -> NaiveDate {
    date(2025, 3, 4)
}

pub(super) fn role(id: &str, name: &str) -> TeamRole {
    TeamRole {
        id: RoleId(id.to_string()),
        team_id: TeamId("worship".to_string()),
        name: name.to_string(),
        min_volunteers: 1,
        max_volunteers: 2,
        requires_background_check: false,
        skills: vec!["vocals".to_string()],
    }
}

pub(super) fn volunteer(id: &str, name: &str, role_ids: &[&str]) -> Volunteer {
    Volunteer {
        id: VolunteerId(id.to_string()),
        person_id: PersonId(format!("person-{id}")),
        name: name.to_string(),
        email: Some(format!("{id}@gather.example")),
        phone: None,
        teams: vec![TeamId("worship".to_string())],
        roles: role_ids.iter().map(|r| RoleId(r.to_string())).collect(),
        skills: vec!["vocals".to_string()],
        preferred_service_time: TimePreference::Either,
        max_services_per_month: 4,
        services_this_month: 2,
        status: VolunteerStatus::Active,
        family_members: Vec::new(),
        last_served: None,
    }
}

pub(super) fn blackout(id: &str, volunteer: &str, start: NaiveDate, end: NaiveDate) -> BlackoutDate {
    BlackoutDate {
        id: id.to_string(),
        volunteer_id: VolunteerId(volunteer.to_string()),
        start_date: start,
        end_date: end,
        reason: Some("Out of town".to_string()),
    }
}

pub(super) fn scoring_policy() -> ScoringPolicy {
    ScoringPolicy::default()
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(scoring_policy())
}

pub(super) fn nine_am_context(service: NaiveDate, today: NaiveDate) -> ScoreContext {
    ScoreContext {
        service_date: service,
        target_time: TargetServiceTime::NineAm,
        today,
    }
}

pub(super) fn eleven_am_context(service: NaiveDate, today: NaiveDate) -> ScoreContext {
    ScoreContext {
        service_date: service,
        target_time: TargetServiceTime::ElevenAm,
        today,
    }
}

pub(super) fn request(roles: Vec<TeamRole>) -> ScheduleRequest {
    ScheduleRequest {
        service_date: service_date(),
        service_time: "9:00 AM".to_string(),
        roles,
        today: Some(today()),
    }
}

/// Shortlist entry built directly, for exercising the ranker in isolation.
pub(super) fn candidate(id: &str, score: u8) -> ScoredCandidate {
    ScoredCandidate {
        volunteer_id: VolunteerId(id.to_string()),
        volunteer_name: format!("Volunteer {id}"),
        score,
        reasons: Vec::new(),
        conflicts: Vec::new(),
        components: Vec::new(),
    }
}

/// In-memory directory. Deliberately lax: it filters on role membership only,
/// so the service's own eligibility predicate is what keeps inactive
/// volunteers out of suggestions.
#[derive(Default, Clone)]
pub(super) struct MemoryDirectory {
    volunteers: Arc<Mutex<Vec<Volunteer>>>,
    blackouts: Arc<Mutex<HashMap<VolunteerId, Vec<BlackoutDate>>>>,
}

impl MemoryDirectory {
    pub(super) fn with_volunteers(volunteers: Vec<Volunteer>) -> Self {
        Self {
            volunteers: Arc::new(Mutex::new(volunteers)),
            blackouts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub(super) fn add_blackout(&self, blackout: BlackoutDate) {
        self.blackouts
            .lock()
            .expect("blackout mutex poisoned")
            .entry(blackout.volunteer_id.clone())
            .or_default()
            .push(blackout);
    }

    pub(super) fn remove_volunteer(&self, id: &VolunteerId) {
        self.volunteers
            .lock()
            .expect("roster mutex poisoned")
            .retain(|volunteer| &volunteer.id != id);
    }

    pub(super) fn set_status(&self, id: &VolunteerId, status: VolunteerStatus) {
        let mut guard = self.volunteers.lock().expect("roster mutex poisoned");
        if let Some(volunteer) = guard.iter_mut().find(|volunteer| &volunteer.id == id) {
            volunteer.status = status;
        }
    }
}

impl RosterDirectory for MemoryDirectory {
    fn active_volunteers_for_role(&self, role: &RoleId) -> Result<Vec<Volunteer>, DirectoryError> {
        let guard = self.volunteers.lock().expect("roster mutex poisoned");
        Ok(guard
            .iter()
            .filter(|volunteer| volunteer.holds_role(role))
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

pub(super) struct UnavailableDirectory;

impl RosterDirectory for UnavailableDirectory {
    fn active_volunteers_for_role(&self, _role: &RoleId) -> Result<Vec<Volunteer>, DirectoryError> {
        Err(DirectoryError::Unavailable("backend offline".to_string()))
    }

    fn blackout_dates(
        &self,
        _volunteer: &VolunteerId,
    ) -> Result<Vec<BlackoutDate>, DirectoryError> {
        Err(DirectoryError::Unavailable("backend offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct RecordingSink {
    committed: Arc<Mutex<Vec<(RoleId, VolunteerId, NaiveDate)>>>,
    failures: Arc<Mutex<HashMap<RoleId, CommitError>>>,
}

impl RecordingSink {
    pub(super) fn committed(&self) -> Vec<(RoleId, VolunteerId, NaiveDate)> {
        self.committed.lock().expect("sink mutex poisoned").clone()
    }

    pub(super) fn fail_role(&self, role: RoleId, error: CommitError) {
        self.failures
            .lock()
            .expect("sink mutex poisoned")
            .insert(role, error);
    }
}

impl AssignmentSink for RecordingSink {
    fn commit(
        &self,
        role: &RoleId,
        volunteer: &VolunteerId,
        service_date: NaiveDate,
    ) -> Result<(), CommitError> {
        if let Some(error) = self.failures.lock().expect("sink mutex poisoned").get(role) {
            return Err(error.clone());
        }
        self.committed
            .lock()
            .expect("sink mutex poisoned")
            .push((role.clone(), volunteer.clone(), service_date));
        Ok(())
    }
}

pub(super) fn build_service(
    volunteers: Vec<Volunteer>,
) -> (
    SchedulingService<MemoryDirectory, RecordingSink>,
    Arc<MemoryDirectory>,
    Arc<RecordingSink>,
) {
    let directory = Arc::new(MemoryDirectory::with_volunteers(volunteers));
    let sink = Arc::new(RecordingSink::default());
    let service = SchedulingService::new(directory.clone(), sink.clone(), scoring_policy());
    (service, directory, sink)
}
