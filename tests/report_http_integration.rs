//! Integration tests for report HTTP endpoints.
//!
//! These tests drive the full axum router with `oneshot` requests:
//! 1. Successful framework and composite responses
//! 2. Completeness conditions map to user-facing statuses
//! 3. Invalid path parameters are rejected

mod common;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use persona_insight::adapters::http::{api_router, ReportAppState};
use persona_insight::domain::assessment::Framework;

use common::*;

async fn app(frameworks: &[Framework]) -> Router {
    let store = seeded_store(&user("u-1"), frameworks).await;
    api_router(ReportAppState {
        answer_reader: Arc::new(store),
        report_repository: report_repository(),
        engine: engine(),
    })
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get(app(&[]).await, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn framework_report_returns_classification() {
    let (status, body) = get(app(&[Framework::Disc]).await, "/api/reports/u-1/frameworks/disc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["test_type"], "DISC");
    assert_eq!(body["user_id"], "u-1");
    assert_eq!(body["classification"]["code"], "D");
    assert_eq!(body["answers_scored"], 3);
}

#[tokio::test]
async fn big_five_alias_is_accepted() {
    let (status, body) =
        get(app(&[Framework::BigFive]).await, "/api/reports/u-1/frameworks/Big5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["classification"]["code"], "social_leader");
}

#[tokio::test]
async fn unstarted_framework_is_404_with_code() {
    let (status, body) = get(app(&[]).await, "/api/reports/u-1/frameworks/MBTI").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ASSESSMENT_NOT_COMPLETED");
    assert_eq!(body["details"]["test_type"], "MBTI");
}

#[tokio::test]
async fn unknown_framework_is_400() {
    let (status, body) = get(app(&[]).await, "/api/reports/u-1/frameworks/HEXACO").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UNSUPPORTED_FRAMEWORK");
}

#[tokio::test]
async fn composite_report_is_flattened() {
    let (status, body) = get(
        app(&[Framework::Mbti, Framework::BigFive]).await,
        "/api/reports/u-1/composite",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["completed_tests"], serde_json::json!(["MBTI", "BIG5"]));
    assert_eq!(body["summary"]["mbti_type"], "ESTJ");
    assert_eq!(body["summary"]["big5_type"], "social_leader");
    assert!(body["integrated_insights"]["leadership_style"]["primary_style"].is_string());
    assert!(body["report_id"].is_string());
}

#[tokio::test]
async fn composite_without_assessments_is_422() {
    let (status, body) = get(app(&[]).await, "/api/reports/u-1/composite").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "NO_COMPLETED_ASSESSMENTS");
    assert_eq!(body["message"], "complete at least one assessment first");
}

#[tokio::test]
async fn listing_shows_generated_reports() {
    let app = app(&[Framework::Mbti]).await;
    let (status, _) = get(app.clone(), "/api/reports/u-1/frameworks/MBTI").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(app, "/api/reports/u-1").await;
    assert_eq!(status, StatusCode::OK);
    let reports = body["reports"].as_array().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["report_type"], "MBTI");
    assert_eq!(reports[0]["result"]["code"], "ESTJ");
}
