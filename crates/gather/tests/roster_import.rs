//! Importing a people-directory CSV export and driving the scheduling
//! pipeline from the imported roster.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use gather::ministry::roster::domain::{
    BlackoutDate, RoleId, TeamId, TeamRole, TimePreference, Volunteer, VolunteerId,
};
use gather::ministry::roster::import::RosterCsvImporter;
use gather::ministry::scheduling::{
    AssignmentSink, CommitError, DirectoryError, RosterDirectory, ScheduleRequest,
    SchedulingService, ScoringPolicy, SuggestionStatus,
};

const EXPORT: &str = "\
Volunteer ID,Person ID,Name,Email,Phone,Teams,Roles,Skills,Preferred Time,Max Per Month,Served This Month,Status,Family Members,Last Served
vol-1,per-1,Dana Whitfield,dana@example.com,555-0101,worship,worship-leader;vocalist,vocals;keys,9am,3,1,active,,2025-02-09
vol-2,per-2,Eli Ortega,eli@example.com,,tech,sound-engineer,audio,either,4,4,active,,2025-03-02
vol-3,per-3,Faye Lin,,,kids,kids-check-in,,11am,2,0,on-leave,,
vol-4,per-4,Gus Moran,,,worship,vocalist,vocals,either,4,0,active,vol-1,bad-date
";

fn import() -> Vec<Volunteer> {
    RosterCsvImporter::from_reader(EXPORT.as_bytes()).expect("export parses")
}

#[test]
fn export_rows_become_volunteers() {
    let volunteers = import();

    assert_eq!(volunteers.len(), 4);
    let dana = &volunteers[0];
    assert_eq!(dana.preferred_service_time, TimePreference::NineAm);
    assert_eq!(dana.roles.len(), 2);
    assert_eq!(dana.last_served, NaiveDate::from_ymd_opt(2025, 2, 9));
}

#[test]
fn messy_cells_degrade_gracefully() {
    let volunteers = import();

    let gus = volunteers
        .iter()
        .find(|volunteer| volunteer.id == VolunteerId("vol-4".to_string()))
        .expect("gus imported");
    assert_eq!(gus.last_served, None);
    assert_eq!(gus.family_members, vec![VolunteerId("vol-1".to_string())]);
}

struct ImportedDirectory {
    volunteers: Vec<Volunteer>,
}

impl RosterDirectory for ImportedDirectory {
    fn active_volunteers_for_role(&self, role: &RoleId) -> Result<Vec<Volunteer>, DirectoryError> {
        Ok(self
            .volunteers
            .iter()
            .filter(|volunteer| volunteer.is_active() && volunteer.holds_role(role))
            .cloned()
            .collect())
    }

    fn blackout_dates(
        &self,
        _volunteer: &VolunteerId,
    ) -> Result<Vec<BlackoutDate>, DirectoryError> {
        Ok(Vec::new())
    }
}

#[derive(Default)]
struct NullSink {
    committed: Arc<Mutex<HashMap<RoleId, VolunteerId>>>,
}

impl AssignmentSink for NullSink {
    fn commit(
        &self,
        role: &RoleId,
        volunteer: &VolunteerId,
        _service_date: NaiveDate,
    ) -> Result<(), CommitError> {
        self.committed
            .lock()
            .expect("lock")
            .insert(role.clone(), volunteer.clone());
        Ok(())
    }
}

#[test]
fn imported_roster_feeds_the_scheduler() {
    let service = SchedulingService::new(
        Arc::new(ImportedDirectory {
            volunteers: import(),
        }),
        Arc::new(NullSink::default()),
        ScoringPolicy::default(),
    );

    let request = ScheduleRequest {
        service_date: NaiveDate::from_ymd_opt(2025, 3, 9).expect("valid date"),
        service_time: "9:00 AM".to_string(),
        roles: vec![
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
                id: RoleId("kids-check-in".to_string()),
                team_id: TeamId("kids".to_string()),
                name: "Kids Check-In".to_string(),
                min_volunteers: 1,
                max_volunteers: 2,
                requires_background_check: true,
                skills: Vec::new(),
            },
        ],
        today: NaiveDate::from_ymd_opt(2025, 3, 4),
    };

    let batch = service.generate_suggestions(&request).expect("batch");

    let vocalist = &batch.roles[0];
    assert_eq!(vocalist.status, SuggestionStatus::SuggestionsReady);
    assert_eq!(vocalist.candidates.len(), 2);

    // Faye is on leave, so the kids role has nobody.
    let kids = &batch.roles[1];
    assert_eq!(kids.status, SuggestionStatus::NoCandidates);
}
