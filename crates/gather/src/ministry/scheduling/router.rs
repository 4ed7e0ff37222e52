use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use super::domain::ScheduleRequest;
use super::repository::{AssignmentSink, RosterDirectory};
use super::service::{SchedulingService, SchedulingServiceError};
use crate::ministry::roster::domain::{RoleId, VolunteerId};

/// Router builder exposing the scheduling pipeline's two entry points.
pub fn scheduling_router<D, S>(service: Arc<SchedulingService<D, S>>) -> Router
where
    D: RosterDirectory + 'static,
    S: AssignmentSink + 'static,
{
    Router::new()
        .route(
            "/api/v1/scheduling/suggestions",
            post(suggestions_handler::<D, S>),
        )
        .route(
            "/api/v1/scheduling/assignments",
            post(assignments_handler::<D, S>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApplyAssignmentsRequest {
    pub(crate) service_date: NaiveDate,
    pub(crate) assignments: BTreeMap<RoleId, VolunteerId>,
}

pub(crate) async fn suggestions_handler<D, S>(
    State(service): State<Arc<SchedulingService<D, S>>>,
    axum::Json(request): axum::Json<ScheduleRequest>,
) -> Response
where
    D: RosterDirectory + 'static,
    S: AssignmentSink + 'static,
{
    match service.generate_suggestions(&request) {
        Ok(batch) => (StatusCode::OK, axum::Json(batch)).into_response(),
        Err(SchedulingServiceError::InvalidRequest(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(SchedulingServiceError::Directory(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn assignments_handler<D, S>(
    State(service): State<Arc<SchedulingService<D, S>>>,
    axum::Json(request): axum::Json<ApplyAssignmentsRequest>,
) -> Response
where
    D: RosterDirectory + 'static,
    S: AssignmentSink + 'static,
{
    let outcomes = service.apply_assignments(&request.assignments, request.service_date);
    let payload = json!({ "outcomes": outcomes });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
