//! Volunteer roster: people, teams, serving roles, and blackout windows, plus
//! ingestion from people-directory CSV exports.

pub mod domain;
pub mod import;

pub use domain::{
    BlackoutDate, PersonId, RoleId, Team, TeamId, TeamRole, TimePreference, Volunteer,
    VolunteerId, VolunteerStatus,
};
pub use import::{RosterCsvImporter, RosterImportError};
