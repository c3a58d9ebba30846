//! End-to-end tests for the HTTP API.
//!
//! Drives the full axum router with `oneshot` against the mock AI provider,
//! the mock session validator and the in-memory activity stores.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use ndis_assist::adapters::activity::{InMemoryAuditLog, InMemoryPresenceStore};
use ndis_assist::adapters::ai::{MockAIProvider, MockError};
use ndis_assist::adapters::auth::MockSessionValidator;
use ndis_assist::adapters::http::{build_router, AppDependencies, AppState};
use ndis_assist::application::handlers::AI_NOT_CONFIGURED;
use ndis_assist::config::AppConfig;
use ndis_assist::ports::AIProvider;

// =============================================================================
// Test Infrastructure
// =============================================================================

const COORDINATOR: &str = "coordinator-token";
const VIEWER: &str = "viewer-token";
const ADMIN: &str = "admin-token";

fn validator() -> MockSessionValidator {
    MockSessionValidator::new()
        .with_test_user(COORDINATOR, "coordinator-1")
        .with_role_user(VIEWER, "viewer-1", "viewer")
        .with_role_user(ADMIN, "admin-1", "admin")
}

fn app_with(provider: Option<MockAIProvider>) -> Router {
    let ai_provider = provider.map(|p| Arc::new(p) as Arc<dyn AIProvider>);
    let state = AppState::new(
        Arc::new(AppConfig::default()),
        AppDependencies {
            ai_provider,
            session_validator: Arc::new(validator()),
            presence_store: Arc::new(InMemoryPresenceStore::new()),
            audit_log: Arc::new(InMemoryAuditLog::new()),
        },
    )
    .expect("default access config is valid");
    build_router(state)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

fn at_request() -> Value {
    json!({
        "participantName": "Jordan Lee",
        "selectedAT": {"name": "Power chair", "cost": 5000, "maintenanceCost": 200, "effectiveness": 80, "preference": 70},
        "alternativeAT": {"name": "Manual chair", "cost": 3000, "maintenanceCost": 500, "effectiveness": 60, "preference": 50}
    })
}

// =============================================================================
// AI Feature Endpoints
// =============================================================================

#[tokio::test]
async fn at_justification_returns_local_scores_and_normalized_draft() {
    let provider = MockAIProvider::new().with_structured(json!({
        "summary": "The power chair is justified",
        "risks": ["Battery replacement"],
        "selectedScore": 99
    }));
    let app = app_with(Some(provider.clone()));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/at-justification",
        Some(COORDINATOR),
        Some(at_request()),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "body: {body}");
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["model"], json!("mock-model-1"));

    let comparison = &body["data"]["comparison"];
    assert_eq!(comparison["selectedScore"], json!(55));
    assert_eq!(comparison["alternativeScore"], json!(44));
    assert_eq!(comparison["recommendation"], json!("selected"));
    assert_eq!(comparison["costDifference"].as_f64(), Some(2000.0));
    assert_eq!(comparison["fiveYearCost"]["selected"].as_f64(), Some(6000.0));
    assert_eq!(comparison["fiveYearCost"]["alternative"].as_f64(), Some(5500.0));

    let justification = &body["data"]["justification"];
    assert_eq!(justification["summary"], json!("The power chair is justified"));
    assert_eq!(justification["risks"], json!(["Battery replacement"]));
    assert_eq!(justification["recommendations"], json!([]));

    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn at_justification_requires_both_options() {
    let provider = MockAIProvider::new();
    let app = app_with(Some(provider.clone()));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/at-justification",
        Some(COORDINATOR),
        Some(json!({"participantName": "Jordan Lee", "selectedAT": {"name": "Power chair"}})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Both selected and alternative AT options are required"})
    );
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn quality_checker_rejects_blank_report_without_calling_ai() {
    let provider = MockAIProvider::new();
    let app = app_with(Some(provider.clone()));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/quality-checker",
        Some(COORDINATOR),
        Some(json!({"reportContent": "   "})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Report content is required"}));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn adapter_failure_without_status_is_500_with_its_message() {
    let provider = MockAIProvider::new().with_error(MockError::Failed {
        message: "rate limited".to_string(),
        status: None,
    });
    let app = app_with(Some(provider));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/quality-checker",
        Some(COORDINATOR),
        Some(json!({"reportContent": "Participant requires daily support."})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "rate limited"}));
}

#[tokio::test]
async fn adapter_status_is_propagated() {
    let provider = MockAIProvider::new().with_error(MockError::Failed {
        message: "quota exceeded".to_string(),
        status: Some(403),
    });
    let app = app_with(Some(provider));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/sc-goal-strategies",
        Some(COORDINATOR),
        Some(json!({"participantName": "Jordan Lee", "goals": ["Build independence"]})),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], json!("quota exceeded"));
}

#[tokio::test]
async fn missing_ai_credentials_is_configuration_error() {
    let app = app_with(None);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/case-notes",
        Some(COORDINATOR),
        Some(json!({
            "participantName": "Jordan Lee",
            "activities": [{"type": "phone_call", "description": "Called OT"}]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], json!(AI_NOT_CONFIGURED));
}

#[tokio::test]
async fn case_notes_fill_missing_fields_with_defaults() {
    let provider = MockAIProvider::new().with_structured(json!({"caseNote": "Called the OT."}));
    let app = app_with(Some(provider));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/case-notes",
        Some(COORDINATOR),
        Some(json!({
            "participantName": "Jordan Lee",
            "activities": [{"type": "phone_call", "description": "Called OT"}]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "body: {body}");
    assert_eq!(body["data"]["caseNote"], json!("Called the OT."));
    assert_eq!(body["data"]["keyPoints"], json!([]));
    assert_eq!(body["data"]["followUps"], json!([]));
    assert!(body["data"]["activityStats"]["emails"].is_number());
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = app_with(Some(MockAIProvider::new()));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/fca-pipeline")
        .header("Authorization", format!("Bearer {COORDINATOR}"))
        .header("content-type", "application/json")
        .body(Body::from("{\"participantName\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Authentication and Authorization
// =============================================================================

#[tokio::test]
async fn missing_token_is_401() {
    let app = app_with(Some(MockAIProvider::new()));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/quality-checker",
        None,
        Some(json!({"reportContent": "text"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"error": "Authentication required"}));
}

#[tokio::test]
async fn unknown_token_is_401() {
    let app = app_with(Some(MockAIProvider::new()));

    let (status, _) = send(
        &app,
        Method::GET,
        "/api/me/permissions",
        Some("forged-token"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn viewer_cannot_use_ai_tools() {
    let provider = MockAIProvider::new();
    let app = app_with(Some(provider.clone()));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/quality-checker",
        Some(VIEWER),
        Some(json!({"reportContent": "Participant requires daily support."})),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].is_string());
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn permissions_reflect_resolved_role() {
    let app = app_with(None);

    let (status, body) = send(&app, Method::GET, "/api/me/permissions", Some(COORDINATOR), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], json!("support_coordinator"));
    assert_eq!(body["isAdmin"], json!(false));
    assert_eq!(body["capabilities"]["useAiTools"], json!(true));
    assert_eq!(body["capabilities"]["viewAuditLog"], json!(false));

    let (_, body) = send(&app, Method::GET, "/api/me/permissions", Some(ADMIN), None).await;
    assert_eq!(body["isAdmin"], json!(true));
    assert_eq!(body["capabilities"]["manageUsers"], json!(true));
}

// =============================================================================
// Presence and Audit
// =============================================================================

#[tokio::test]
async fn presence_heartbeat_and_listing() {
    let app = app_with(None);

    let (status, body) = send(&app, Method::PATCH, "/api/presence", Some(COORDINATOR), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("online"));

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/presence",
        Some(COORDINATOR),
        Some(json!({"status": "away"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("away"));

    let (status, _) = send(&app, Method::GET, "/api/presence", Some(COORDINATOR), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, Method::GET, "/api/presence", Some(ADMIN), None).await;
    assert_eq!(status, StatusCode::OK);
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["email"], json!("coordinator-1@test.example.com"));

    let (status, _) = send(&app, Method::DELETE, "/api/presence", Some(COORDINATOR), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, Method::GET, "/api/presence", Some(ADMIN), None).await;
    assert_eq!(body["users"], json!([]));
}

#[tokio::test]
async fn heartbeat_cannot_set_offline() {
    let app = app_with(None);

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/presence",
        Some(COORDINATOR),
        Some(json!({"status": "offline"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Status must be online or away"}));
}

#[tokio::test]
async fn successful_generation_is_audited() {
    let app = app_with(Some(MockAIProvider::new()));

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/at-justification",
        Some(COORDINATOR),
        Some(at_request()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, "/api/audit", Some(COORDINATOR), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, Method::GET, "/api/audit?limit=10", Some(ADMIN), None).await;
    assert_eq!(status, StatusCode::OK);
    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["feature"], json!("at-justification"));
    assert_eq!(entries[0]["model"], json!("mock-model-1"));
    assert_eq!(entries[0]["userEmail"], json!("coordinator-1@test.example.com"));
}

#[tokio::test]
async fn failed_generation_is_not_audited() {
    let provider = MockAIProvider::new().with_error(MockError::Unavailable {
        message: "down".to_string(),
    });
    let app = app_with(Some(provider));

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/at-justification",
        Some(COORDINATOR),
        Some(at_request()),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (_, body) = send(&app, Method::GET, "/api/audit", Some(ADMIN), None).await;
    assert_eq!(body["entries"], json!([]));
}

#[tokio::test]
async fn invalid_audit_limit_is_bad_request() {
    let app = app_with(None);

    let (status, _) = send(&app, Method::GET, "/api/audit?limit=lots", Some(ADMIN), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_needs_no_auth() {
    let app = app_with(None);

    let (status, body) = send(&app, Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}
