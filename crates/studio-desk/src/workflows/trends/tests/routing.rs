use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use chrono::NaiveDate;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::trends::router::{aggregate_handler, AggregateRequest};
use crate::workflows::trends::{trend_router, TrendError};

#[test]
fn explicit_month_overrides_today() {
    let request = AggregateRequest {
        year: Some(2025),
        month: Some(2),
        today: NaiveDate::from_ymd_opt(2030, 1, 1),
    };

    assert_eq!(request.period(), Ok(february()));
}

#[test]
fn today_resolves_to_previous_month() {
    let request = AggregateRequest {
        today: NaiveDate::from_ymd_opt(2025, 3, 9),
        ..AggregateRequest::default()
    };

    assert_eq!(request.period(), Ok(february()));
}

#[test]
fn lone_year_or_month_is_refused() {
    let year_only = AggregateRequest {
        year: Some(2024),
        ..AggregateRequest::default()
    };
    let month_only = AggregateRequest {
        month: Some(3),
        today: NaiveDate::from_ymd_opt(2025, 7, 10),
        ..AggregateRequest::default()
    };

    assert_eq!(year_only.period(), Err(TrendError::IncompletePeriod));
    assert_eq!(month_only.period(), Err(TrendError::IncompletePeriod));
}

#[tokio::test]
async fn aggregate_handler_returns_report() {
    let (job, _) = memory_job(february_samples());
    let request = AggregateRequest {
        year: Some(2025),
        month: Some(2),
        today: None,
    };

    let response = aggregate_handler(State(Arc::new(job)), axum::Json(request)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["period"], json!({ "kind": "month", "year": 2025, "month": 2 }));
    assert_eq!(body["summaries"].as_array().expect("summaries").len(), 4);
    assert_eq!(body["failures"], json!([]));
}

#[tokio::test]
async fn aggregate_handler_rejects_invalid_month() {
    let (job, _) = memory_job(february_samples());
    let request = AggregateRequest {
        year: Some(2025),
        month: Some(13),
        today: None,
    };

    let response = aggregate_handler(State(Arc::new(job)), axum::Json(request)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn summaries_route_filters_by_month() {
    let (job, _) = memory_job(february_samples());
    job.run_for(february()).expect("february run");
    job.run_previous_month(NaiveDate::from_ymd_opt(2025, 2, 10).expect("valid"))
        .expect("january run");
    let router = trend_router(Arc::new(job));

    let response = router
        .clone()
        .oneshot(
            Request::get("/api/v1/trends/summaries/2025/2")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body.as_array().expect("summary list").len(), 4);

    let response = router
        .oneshot(
            Request::get("/api/v1/trends/summaries")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = read_json_body(response).await;
    assert_eq!(body.as_array().expect("summary list").len(), 8);
}

#[tokio::test]
async fn aggregate_route_accepts_json_payloads() {
    let (job, store) = memory_job(february_samples());
    let router = trend_router(Arc::new(job));

    let response = router
        .oneshot(
            Request::post("/api/v1/trends/aggregate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    json!({ "today": "2025-03-04" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.stored().len(), 4);
}

#[tokio::test]
async fn aggregate_route_rejects_year_without_month() {
    let (job, store) = memory_job(february_samples());
    let router = trend_router(Arc::new(job));

    let response = router
        .oneshot(
            Request::post("/api/v1/trends/aggregate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(json!({ "year": 2024 }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("year and month"));
    assert!(store.stored().is_empty());
}

#[tokio::test]
async fn monthly_summaries_reject_invalid_month() {
    let (job, _) = memory_job(february_samples());
    let router = trend_router(Arc::new(job));

    let response = router
        .oneshot(
            Request::get("/api/v1/trends/summaries/2025/13")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
