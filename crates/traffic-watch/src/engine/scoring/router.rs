use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use super::domain::UserId;
use super::ledger::LedgerError;
use super::repository::{LeaderboardStore, ScoreRepository, ScoreStoreError};
use super::service::{ScoringService, ScoringServiceError};

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterUserRequest {
    pub(crate) user_id: String,
}

const DEFAULT_REWARD_POINTS: i64 = 50;

fn default_reward() -> i64 {
    DEFAULT_REWARD_POINTS
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApproveReportRequest {
    #[serde(default = "default_reward")]
    pub(crate) reward_points: i64,
}

/// Router builder exposing score and leaderboard endpoints.
pub fn scoring_router<S, L>(service: Arc<ScoringService<S, L>>) -> Router
where
    S: ScoreRepository + 'static,
    L: LeaderboardStore + 'static,
{
    Router::new()
        .route("/api/v1/scores", post(register_handler::<S, L>))
        .route("/api/v1/scores/:user_id", get(score_handler::<S, L>))
        .route(
            "/api/v1/scores/:user_id/report-approvals",
            post(approve_handler::<S, L>),
        )
        .route(
            "/api/v1/scores/:user_id/violation-confirmations",
            post(confirm_handler::<S, L>),
        )
        .route(
            "/api/v1/leaderboards/:date",
            get(leaderboard_handler::<S, L>),
        )
        .route(
            "/api/v1/leaderboards/:date/generate",
            post(generate_handler::<S, L>),
        )
        .with_state(service)
}

pub(crate) async fn register_handler<S, L>(
    State(service): State<Arc<ScoringService<S, L>>>,
    axum::Json(request): axum::Json<RegisterUserRequest>,
) -> Response
where
    S: ScoreRepository + 'static,
    L: LeaderboardStore + 'static,
{
    match service.register_user(UserId(request.user_id)) {
        Ok(score) => (StatusCode::CREATED, axum::Json(score.view())).into_response(),
        Err(error) => failure_response(error),
    }
}

pub(crate) async fn score_handler<S, L>(
    State(service): State<Arc<ScoringService<S, L>>>,
    Path(user_id): Path<String>,
) -> Response
where
    S: ScoreRepository + 'static,
    L: LeaderboardStore + 'static,
{
    match service.get(&UserId(user_id)) {
        Ok(score) => (StatusCode::OK, axum::Json(score.view())).into_response(),
        Err(error) => failure_response(error),
    }
}

pub(crate) async fn approve_handler<S, L>(
    State(service): State<Arc<ScoringService<S, L>>>,
    Path(user_id): Path<String>,
    axum::Json(request): axum::Json<ApproveReportRequest>,
) -> Response
where
    S: ScoreRepository + 'static,
    L: LeaderboardStore + 'static,
{
    match service.award_report_approval(&UserId(user_id), request.reward_points) {
        Ok(score) => (StatusCode::OK, axum::Json(score.view())).into_response(),
        Err(error) => failure_response(error),
    }
}

pub(crate) async fn confirm_handler<S, L>(
    State(service): State<Arc<ScoringService<S, L>>>,
    Path(user_id): Path<String>,
) -> Response
where
    S: ScoreRepository + 'static,
    L: LeaderboardStore + 'static,
{
    match service.confirm_violation(&UserId(user_id)) {
        Ok(score) => (StatusCode::OK, axum::Json(score.view())).into_response(),
        Err(error) => failure_response(error),
    }
}

pub(crate) async fn generate_handler<S, L>(
    State(service): State<Arc<ScoringService<S, L>>>,
    Path(date): Path<String>,
) -> Response
where
    S: ScoreRepository + 'static,
    L: LeaderboardStore + 'static,
{
    let date = match parse_date(&date) {
        Ok(date) => date,
        Err(response) => return response,
    };

    match service.generate_leaderboard(date) {
        Ok(entries) => (StatusCode::OK, axum::Json(entries)).into_response(),
        Err(error) => failure_response(error),
    }
}

pub(crate) async fn leaderboard_handler<S, L>(
    State(service): State<Arc<ScoringService<S, L>>>,
    Path(date): Path<String>,
) -> Response
where
    S: ScoreRepository + 'static,
    L: LeaderboardStore + 'static,
{
    let date = match parse_date(&date) {
        Ok(date) => date,
        Err(response) => return response,
    };

    match service.leaderboard_for(date) {
        Ok(Some(entries)) => (StatusCode::OK, axum::Json(entries)).into_response(),
        Ok(None) => {
            let payload = json!({
                "error": format!("no leaderboard generated for {date}"),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => failure_response(error),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, Response> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        let payload = json!({
            "error": format!("'{raw}' is not a YYYY-MM-DD date"),
        });
        (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
    })
}

fn failure_response(error: ScoringServiceError) -> Response {
    let status = match &error {
        ScoringServiceError::Ledger(LedgerError::NegativeReward(_)) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ScoringServiceError::Ledger(LedgerError::UnknownUser(_)) => StatusCode::NOT_FOUND,
        ScoringServiceError::Ledger(LedgerError::Contention { .. }) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        ScoringServiceError::Store(ScoreStoreError::Conflict) => StatusCode::CONFLICT,
        ScoringServiceError::Store(ScoreStoreError::NotFound) => StatusCode::NOT_FOUND,
        ScoringServiceError::Store(ScoreStoreError::Unavailable(_))
        | ScoringServiceError::Ledger(LedgerError::Store(_))
        | ScoringServiceError::Leaderboard(_) => StatusCode::SERVICE_UNAVAILABLE,
        ScoringServiceError::Store(ScoreStoreError::VersionMismatch) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
