use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use super::domain::ViolationSnapshot;
use super::history::ViolationHistory;
use super::service::{FineService, FineServiceError};
use crate::engine::clock::Clock;

#[derive(Debug, Deserialize)]
pub(crate) struct ComputeFineRequest {
    pub(crate) violation: ViolationSnapshot,
    pub(crate) base_amount: Decimal,
}

/// Router builder exposing the fine computation endpoint.
pub fn fine_router<H, C>(service: Arc<FineService<H, C>>) -> Router
where
    H: ViolationHistory + 'static,
    C: Clock + 'static,
{
    Router::new()
        .route("/api/v1/fines/compute", post(compute_handler::<H, C>))
        .with_state(service)
}

pub(crate) async fn compute_handler<H, C>(
    State(service): State<Arc<FineService<H, C>>>,
    axum::Json(request): axum::Json<ComputeFineRequest>,
) -> Response
where
    H: ViolationHistory + 'static,
    C: Clock + 'static,
{
    match service.compute_fine(&request.violation, request.base_amount) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(FineServiceError::Input(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(FineServiceError::History(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
    }
}
