use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::engine::fines::{fine_router, FinePolicy, FineService};

fn build_router(history: StaticHistory) -> axum::Router {
    let service = Arc::new(FineService::new(
        Arc::new(history),
        Arc::new(FixedClock(issued_at())),
        FinePolicy::default(),
    ));
    fine_router(service)
}

fn compute_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/fines/compute")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn violation_body(severity: u8) -> Value {
    json!({
        "violation": {
            "violation_id": "vio-1001",
            "vehicle": "KA-01-AB-1234",
            "severity": severity,
            "occurred_at": "2026-03-14T09:00:00Z",
            "is_verified": true,
        },
        "base_amount": "500.00",
    })
}

#[tokio::test]
async fn compute_endpoint_returns_created_fine() {
    let router = build_router(StaticHistory::with_count("KA-01-AB-1234", 2));

    let response = router
        .oneshot(compute_request(violation_body(3)))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let payload: Value = serde_json::from_slice(&body).expect("json");
    assert_eq!(payload.get("final_amount"), Some(&json!("1750.00")));
    assert_eq!(payload.get("discount_percentage"), Some(&json!(0)));
    assert_eq!(payload.get("payment_status"), Some(&json!("Pending")));
}

#[tokio::test]
async fn out_of_range_severity_is_rejected_at_the_boundary() {
    let router = build_router(StaticHistory::with_count("KA-01-AB-1234", 0));

    let response = router
        .oneshot(compute_request(violation_body(7)))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unreachable_store_maps_to_service_unavailable() {
    let router = build_router(StaticHistory::unreachable());

    let response = router
        .oneshot(compute_request(violation_body(2)))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = to_bytes(response.into_body(), 1024).await.expect("body");
    let payload: Value = serde_json::from_slice(&body).expect("json");
    assert!(payload
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("unavailable"));
}
