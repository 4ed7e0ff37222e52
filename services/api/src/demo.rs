use crate::infra::{
    default_scoring_policy, demo_roles, demo_roster, InMemoryAssignmentSink,
    InMemoryRosterDirectory,
};
use chrono::{Local, NaiveDate, NaiveTime};
use clap::Args;
use gather::error::AppError;
use gather::ministry::roster::domain::{BlackoutDate, Volunteer};
use gather::ministry::roster::import::RosterCsvImporter;
use gather::ministry::scheduling::{
    ScheduleRequest, SchedulingService, SuggestionBatch, SuggestionStatus,
};
use gather::ministry::worship::{ServiceBlueprint, ServicePlan};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct SuggestArgs {
    /// Service date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) service_date: Option<NaiveDate>,
    /// Gathering time label, e.g. "9:00 AM" or "11:00 AM"
    #[arg(long, default_value = "9:00 AM")]
    pub(crate) service_time: String,
    /// Override the evaluation date for recency scoring (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Optional people-directory CSV export to use instead of the demo roster
    #[arg(long)]
    pub(crate) roster_csv: Option<PathBuf>,
    /// Commit the auto-selected assignments after printing the batch
    #[arg(long)]
    pub(crate) apply: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Service date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) service_date: Option<NaiveDate>,
    /// Override the evaluation date for recency scoring (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Run sheet start time (HH:MM)
    #[arg(long, value_parser = crate::infra::parse_time)]
    pub(crate) starts_at: Option<NaiveTime>,
    /// Optional people-directory CSV export to use instead of the demo roster
    #[arg(long)]
    pub(crate) roster_csv: Option<PathBuf>,
    /// Skip the assignment commit portion of the demo
    #[arg(long)]
    pub(crate) skip_commit: bool,
}

pub(crate) fn run_suggest(args: SuggestArgs) -> Result<(), AppError> {
    let SuggestArgs {
        service_date,
        service_time,
        today,
        roster_csv,
        apply,
    } = args;

    let service_date = service_date.unwrap_or_else(|| Local::now().date_naive());
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let (service, sink) = build_scheduling_service(roster_csv)?;
    let request = ScheduleRequest {
        service_date,
        service_time,
        roles: demo_roles(),
        today: Some(today),
    };

    let batch = match service.generate_suggestions(&request) {
        Ok(batch) => batch,
        Err(err) => {
            println!("Suggestion batch rejected: {err}");
            return Ok(());
        }
    };

    render_batch(&batch);

    if apply {
        render_commit(&service, &batch, &sink);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        service_date,
        today,
        starts_at,
        roster_csv,
        skip_commit,
    } = args;

    let service_date = service_date.unwrap_or_else(|| Local::now().date_naive());
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let starts_at =
        starts_at.unwrap_or_else(|| NaiveTime::from_hms_opt(9, 0, 0).expect("valid service start"));

    println!("Gather scheduling demo");
    println!("Service date: {service_date} (evaluated {today})");

    let (service, sink) = build_scheduling_service(roster_csv)?;
    let request = ScheduleRequest {
        service_date,
        service_time: "9:00 AM".to_string(),
        roles: demo_roles(),
        today: Some(today),
    };

    let batch = match service.generate_suggestions(&request) {
        Ok(batch) => batch,
        Err(err) => {
            println!("Suggestion batch rejected: {err}");
            return Ok(());
        }
    };
    render_batch(&batch);

    if !skip_commit {
        render_commit(&service, &batch, &sink);
    }

    let blueprint = ServiceBlueprint::sunday_morning();
    let plan = ServicePlan::new(&blueprint, service_date, starts_at);

    println!(
        "\nRun sheet ({} -> {}, {} minutes)",
        plan.starts_at(),
        plan.ends_at(),
        plan.total_duration_minutes()
    );
    for item in plan.item_details() {
        println!(
            "- {} | {} | {} -> {} ({} min)",
            item.kind_label, item.title, item.starts_at, item.ends_at, item.duration_minutes
        );
    }

    Ok(())
}

type DemoSchedulingService = SchedulingService<InMemoryRosterDirectory, InMemoryAssignmentSink>;

fn build_scheduling_service(
    roster_csv: Option<PathBuf>,
) -> Result<(DemoSchedulingService, Arc<InMemoryAssignmentSink>), AppError> {
    let (volunteers, blackouts) = load_roster(roster_csv)?;
    let directory = Arc::new(InMemoryRosterDirectory::new(volunteers, blackouts));
    let sink = Arc::new(InMemoryAssignmentSink::default());
    let service = SchedulingService::new(directory, sink.clone(), default_scoring_policy());
    Ok((service, sink))
}

fn load_roster(
    roster_csv: Option<PathBuf>,
) -> Result<(Vec<Volunteer>, Vec<BlackoutDate>), AppError> {
    match roster_csv {
        Some(path) => {
            let volunteers = RosterCsvImporter::from_path(path)?;
            println!("Roster source: CSV import ({} volunteers)", volunteers.len());
            Ok((volunteers, Vec::new()))
        }
        None => {
            let (volunteers, blackouts) = demo_roster();
            println!(
                "Roster source: built-in demo roster ({} volunteers)",
                volunteers.len()
            );
            Ok((volunteers, blackouts))
        }
    }
}

fn render_batch(batch: &SuggestionBatch) {
    println!(
        "\nSuggestions for {} at {}",
        batch.service_date,
        batch.target_time.label()
    );

    for suggestions in &batch.roles {
        println!(
            "\n{} [{}]",
            suggestions.role_name,
            suggestions.status.label()
        );

        if suggestions.status == SuggestionStatus::NoCandidates {
            println!("  (no eligible volunteers; needs manual follow-up)");
            continue;
        }

        for candidate in &suggestions.candidates {
            let selected = batch
                .selected_assignments
                .get(&suggestions.role_id)
                .map(|volunteer| volunteer == &candidate.volunteer_id)
                .unwrap_or(false);
            let marker = if selected { "*" } else { "-" };
            println!(
                "  {marker} {} (score {})",
                candidate.volunteer_name, candidate.score
            );
            for reason in &candidate.reasons {
                println!("      + {reason}");
            }
            for conflict in &candidate.conflicts {
                println!("      ! {conflict}");
            }
        }
    }
}

fn render_commit(
    service: &DemoSchedulingService,
    batch: &SuggestionBatch,
    sink: &Arc<InMemoryAssignmentSink>,
) {
    if batch.selected_assignments.is_empty() {
        println!("\nNothing auto-selected; no assignments to commit");
        return;
    }

    println!("\nCommitting auto-selected assignments");
    let outcomes = service.apply_assignments(&batch.selected_assignments, batch.service_date);
    for outcome in &outcomes {
        match &outcome.failure {
            None => println!("- {} -> {}: committed", outcome.role_id.0, outcome.volunteer_id.0),
            Some(failure) => println!(
                "- {} -> {}: failed ({failure})",
                outcome.role_id.0, outcome.volunteer_id.0
            ),
        }
    }
    println!("Backend received {} commit call(s)", sink.events().len());
}
