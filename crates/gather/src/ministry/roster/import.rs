use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use tracing::warn;

use super::domain::{
    PersonId, RoleId, TeamId, TimePreference, Volunteer, VolunteerId, VolunteerStatus,
};

/// Importer for people-directory CSV exports.
///
/// Import is forgiving at the cell level: a bad date or count on one row is
/// treated as missing and logged, so a single messy record never sinks the
/// whole export. A row without a usable id, name, or status is skipped.
pub struct RosterCsvImporter;

impl RosterCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Volunteer>, RosterImportError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| RosterImportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Volunteer>, RosterImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut volunteers = Vec::new();

        for record in csv_reader.deserialize::<RosterRow>() {
            let row = record?;
            match row.into_volunteer() {
                Some(volunteer) => volunteers.push(volunteer),
                None => continue,
            }
        }

        Ok(volunteers)
    }
}

/// Error raised when a roster export cannot be read at all.
#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to open roster export {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse roster export: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Volunteer ID")]
    volunteer_id: String,
    #[serde(rename = "Person ID", default, deserialize_with = "empty_string_as_none")]
    person_id: Option<String>,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Email", default, deserialize_with = "empty_string_as_none")]
    email: Option<String>,
    #[serde(rename = "Phone", default, deserialize_with = "empty_string_as_none")]
    phone: Option<String>,
    #[serde(rename = "Teams", default)]
    teams: String,
    #[serde(rename = "Roles", default)]
    roles: String,
    #[serde(rename = "Skills", default)]
    skills: String,
    #[serde(
        rename = "Preferred Time",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    preferred_time: Option<String>,
    #[serde(
        rename = "Max Per Month",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    max_per_month: Option<String>,
    #[serde(
        rename = "Served This Month",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    served_this_month: Option<String>,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Family Members", default)]
    family_members: String,
    #[serde(
        rename = "Last Served",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    last_served: Option<String>,
}

const DEFAULT_MAX_PER_MONTH: u8 = 4;

impl RosterRow {
    fn into_volunteer(self) -> Option<Volunteer> {
        let id = self.volunteer_id.trim();
        let name = self.name.trim();
        if id.is_empty() || name.is_empty() {
            warn!("skipping roster row without volunteer id or name");
            return None;
        }

        let status = match VolunteerStatus::from_label(&self.status) {
            Some(status) => status,
            None => {
                warn!(volunteer = id, status = %self.status, "skipping roster row with unknown status");
                return None;
            }
        };

        let preferred_service_time = match self.preferred_time.as_deref() {
            None => TimePreference::Either,
            Some(value) => TimePreference::from_label(value).unwrap_or_else(|| {
                warn!(volunteer = id, preferred = value, "unknown time preference, treating as either");
                TimePreference::Either
            }),
        };

        let max_services_per_month = parse_count(id, "Max Per Month", self.max_per_month.as_deref())
            .filter(|count| *count > 0)
            .unwrap_or(DEFAULT_MAX_PER_MONTH);
        let services_this_month =
            parse_count(id, "Served This Month", self.served_this_month.as_deref()).unwrap_or(0);

        let last_served = self
            .last_served
            .as_deref()
            .and_then(|value| parse_date(id, "Last Served", value));

        Some(Volunteer {
            id: VolunteerId(id.to_string()),
            person_id: PersonId(
                self.person_id
                    .clone()
                    .unwrap_or_else(|| format!("person-{id}")),
            ),
            name: name.to_string(),
            email: self.email,
            phone: self.phone,
            teams: split_cell(&self.teams).map(TeamId).collect(),
            roles: split_cell(&self.roles).map(RoleId).collect(),
            skills: split_cell(&self.skills).collect(),
            preferred_service_time,
            max_services_per_month,
            services_this_month,
            status,
            family_members: split_cell(&self.family_members).map(VolunteerId).collect(),
            last_served,
        })
    }
}

/// Multi-value cells are semicolon separated in the people-directory export.
fn split_cell(cell: &str) -> impl Iterator<Item = String> + '_ {
    cell.split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
}

fn parse_count(volunteer: &str, column: &str, value: Option<&str>) -> Option<u8> {
    let raw = value?;
    match raw.trim().parse::<u8>() {
        Ok(count) => Some(count),
        Err(_) => {
            warn!(volunteer, column, value = raw, "unparsable count, treating as missing");
            None
        }
    }
}

fn parse_date(volunteer: &str, column: &str, value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%m/%d/%Y") {
        return Some(date);
    }

    warn!(volunteer, column, value = trimmed, "unparsable date, treating as missing");
    None
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
