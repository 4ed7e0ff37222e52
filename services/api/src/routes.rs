use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{NaiveDate, NaiveTime};
use gather::ministry::scheduling::{
    scheduling_router, AssignmentSink, RosterDirectory, SchedulingService,
};
use gather::ministry::worship::{PlanItemView, ServiceBlueprint, ServicePlan};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct RunSheetRequest {
    pub(crate) service_date: NaiveDate,
    pub(crate) starts_at: NaiveTime,
    #[serde(default)]
    pub(crate) include_items: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct RunSheetResponse {
    pub(crate) service_date: NaiveDate,
    pub(crate) starts_at: NaiveTime,
    pub(crate) ends_at: NaiveTime,
    pub(crate) total_duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) items: Option<Vec<PlanItemView>>,
}

pub(crate) fn with_scheduling_routes<D, S>(
    service: Arc<SchedulingService<D, S>>,
) -> axum::Router
where
    D: RosterDirectory + 'static,
    S: AssignmentSink + 'static,
{
    scheduling_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/worship/run-sheet",
            axum::routing::post(run_sheet_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn run_sheet_endpoint(
    Json(payload): Json<RunSheetRequest>,
) -> Json<RunSheetResponse> {
    let RunSheetRequest {
        service_date,
        starts_at,
        include_items,
    } = payload;

    let blueprint = ServiceBlueprint::sunday_morning();
    let plan = ServicePlan::new(&blueprint, service_date, starts_at);
    let items = if include_items {
        Some(plan.item_details())
    } else {
        None
    };

    Json(RunSheetResponse {
        service_date,
        starts_at,
        ends_at: plan.ends_at(),
        total_duration_minutes: plan.total_duration_minutes(),
        items,
    })
}
