use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryLeaderboardStore, InMemoryScoreStore, InMemoryViolationLog};
use crate::routes::with_engine_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use traffic_watch::config::AppConfig;
use traffic_watch::engine::clock::SystemClock;
use traffic_watch::engine::fines::{FinePolicy, FineService};
use traffic_watch::engine::scoring::ScoringService;
use traffic_watch::error::AppError;
use traffic_watch::telemetry;

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

    let history = Arc::new(InMemoryViolationLog::default());
    let clock = Arc::new(SystemClock);
    let fine_policy = FinePolicy {
        due_in_days: config.engine.fine_due_days,
        ..FinePolicy::default()
    };
    let fine_service = Arc::new(FineService::new(history, clock, fine_policy));

    let scores = Arc::new(InMemoryScoreStore::default());
    let leaderboards = Arc::new(InMemoryLeaderboardStore::default());
    let scoring_service = Arc::new(ScoringService::new(scores, leaderboards));

    let app = with_engine_routes(fine_service, scoring_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "traffic-watch engine ready");

    axum::serve(listener, app).await?;
    Ok(())
}
