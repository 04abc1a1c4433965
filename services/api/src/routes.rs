use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use traffic_watch::engine::clock::Clock;
use traffic_watch::engine::fines::{fine_router, FineService, ViolationHistory};
use traffic_watch::engine::scoring::{
    scoring_router, LeaderboardStore, ScoreRepository, ScoringService,
};

pub(crate) fn with_engine_routes<H, C, S, L>(
    fines: Arc<FineService<H, C>>,
    scoring: Arc<ScoringService<S, L>>,
) -> axum::Router
where
    H: ViolationHistory + 'static,
    C: Clock + 'static,
    S: ScoreRepository + 'static,
    L: LeaderboardStore + 'static,
{
    fine_router(fines)
        .merge(scoring_router(scoring))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body.get("status"), Some(&json!("ok")));
    }
}
