use crate::cli::ServeArgs;
use crate::infra::{
    default_scoring_policy, demo_roster, AppState, InMemoryAssignmentSink,
    InMemoryRosterDirectory,
};
use crate::routes::with_scheduling_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use gather::config::AppConfig;
use gather::error::AppError;
use gather::ministry::scheduling::SchedulingService;
use gather::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let (volunteers, blackouts) = demo_roster();
    let directory = Arc::new(InMemoryRosterDirectory::new(volunteers, blackouts));
    let sink = Arc::new(InMemoryAssignmentSink::default());
    let scheduling_service = Arc::new(SchedulingService::new(
        directory,
        sink,
        default_scoring_policy(),
    ));

    let app = with_scheduling_routes(scheduling_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "volunteer scheduling service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
