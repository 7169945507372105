//! Integration tests for the REST boundary over the in-memory adapters,
//! covering the route contract and error-status mapping.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use mockable::DefaultClock;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use timecard::directory::{
    adapters::memory::InMemoryUserRepository,
    domain::{EnrichedProfile, PassportId},
    ports::{EnrichmentError, EnrichmentGateway, EnrichmentResult},
    services::UserDirectoryService,
};
use timecard::ledger::{
    adapters::memory::InMemoryTaskRepository,
    services::{OpenTaskPolicy, TaskLedgerService},
};
use timecard::rest::{AppState, routes};

/// Gateway answering every lookup with a canned result.
struct ScriptedGateway(Result<EnrichedProfile, u16>);

#[async_trait]
impl EnrichmentGateway for ScriptedGateway {
    async fn lookup(&self, _passport: &PassportId) -> EnrichmentResult {
        self.0.clone().map_err(EnrichmentError::UpstreamStatus)
    }
}

fn app_with(gateway: ScriptedGateway, policy: OpenTaskPolicy) -> Router {
    let directory = UserDirectoryService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(gateway),
        Arc::new(DefaultClock),
    );
    let ledger = TaskLedgerService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
        policy,
    );
    routes::router(Arc::new(AppState::new(directory, ledger)))
}

fn ivanov_app() -> Router {
    app_with(
        ScriptedGateway(Ok(EnrichedProfile::new(
            "Ivanov",
            "Ivan",
            "Ivanovich",
            "Moscow",
        ))),
        OpenTaskPolicy::Unrestricted,
    )
}

async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: &Value,
) -> eyre::Result<(StatusCode, Value)> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?;
    read_response(app.clone().oneshot(request).await?).await
}

async fn send_empty(app: &Router, method: &str, uri: &str) -> eyre::Result<(StatusCode, Value)> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())?;
    read_response(app.clone().oneshot(request).await?).await
}

async fn read_response(
    response: axum::response::Response,
) -> eyre::Result<(StatusCode, Value)> {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, value))
}

#[tokio::test]
async fn create_user_discards_client_fields_for_the_enrichment_result() -> eyre::Result<()> {
    let app = ivanov_app();

    let (status, body) = send_json(
        &app,
        "POST",
        "/users",
        &json!({
            "passportNumber": "AB 123456",
            "surname": "ClientJunk",
            "address": "Nowhere",
        }),
    )
    .await?;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["passportNumber"], "AB 123456");
    assert_eq!(body["surname"], "Ivanov");
    assert_eq!(body["name"], "Ivan");
    assert_eq!(body["patronymic"], "Ivanovich");
    assert_eq!(body["address"], "Moscow");
    Ok(())
}

#[tokio::test]
async fn create_user_with_malformed_passport_returns_bad_request() -> eyre::Result<()> {
    let app = ivanov_app();

    let (status, _) = send_json(
        &app,
        "POST",
        "/users",
        &json!({ "passportNumber": "AB123" }),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn failed_enrichment_returns_bad_gateway_and_persists_nothing() -> eyre::Result<()> {
    let app = app_with(ScriptedGateway(Err(500)), OpenTaskPolicy::Unrestricted);

    let (status, _) = send_json(
        &app,
        "POST",
        "/users",
        &json!({ "passportNumber": "AB 123456" }),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let (list_status, listed) = send_empty(&app, "GET", "/users").await?;
    assert_eq!(list_status, StatusCode::OK);
    assert_eq!(listed, json!([]));
    Ok(())
}

#[tokio::test]
async fn duplicate_passport_returns_conflict() -> eyre::Result<()> {
    let app = ivanov_app();
    let body = json!({ "passportNumber": "AB 123456" });

    let (first, _) = send_json(&app, "POST", "/users", &body).await?;
    assert_eq!(first, StatusCode::CREATED);

    let (second, _) = send_json(&app, "POST", "/users", &body).await?;
    assert_eq!(second, StatusCode::CONFLICT);
    Ok(())
}

#[tokio::test]
async fn delete_unknown_user_returns_not_found() -> eyre::Result<()> {
    let app = ivanov_app();

    let (status, _) =
        send_empty(&app, "DELETE", &format!("/users/{}", Uuid::new_v4())).await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn start_stop_and_report_flow_over_rest() -> eyre::Result<()> {
    let app = ivanov_app();

    let (_, user) = send_json(
        &app,
        "POST",
        "/users",
        &json!({ "passportNumber": "AB 123456" }),
    )
    .await?;
    let user_id = user["id"].as_str().expect("user id").to_owned();

    // The client-supplied start time must lose to the server clock.
    let (start_status, task) = send_json(
        &app,
        "POST",
        &format!("/users/{user_id}/start"),
        &json!({
            "description": "code review",
            "startTime": "2000-01-01T00:00:00Z",
        }),
    )
    .await?;
    assert_eq!(start_status, StatusCode::OK);
    assert_eq!(task["description"], "code review");
    assert_ne!(task["startTime"], "2000-01-01T00:00:00Z");
    assert_eq!(task["endTime"], Value::Null);

    let task_id = task["id"].as_str().expect("task id").to_owned();
    let (stop_status, stopped) = send_json(
        &app,
        "POST",
        &format!("/users/{user_id}/stop"),
        &json!({ "taskId": task_id }),
    )
    .await?;
    assert_eq!(stop_status, StatusCode::OK);
    assert_ne!(stopped["endTime"], Value::Null);

    let (report_status, report) = send_empty(
        &app,
        "GET",
        &format!("/users/{user_id}/efforts?start_date=2000-01-01&end_date=2100-01-01"),
    )
    .await?;
    assert_eq!(report_status, StatusCode::OK);
    assert_eq!(report.as_array().map(Vec::len), Some(1));
    assert_eq!(report[0]["id"], Value::String(task_id));
    Ok(())
}

#[tokio::test]
async fn stop_unknown_task_returns_not_found() -> eyre::Result<()> {
    let app = ivanov_app();

    let (status, _) = send_json(
        &app,
        "POST",
        &format!("/users/{}/stop", Uuid::new_v4()),
        &json!({ "taskId": Uuid::new_v4() }),
    )
    .await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn malformed_effort_dates_return_bad_request() -> eyre::Result<()> {
    let app = ivanov_app();

    let (status, _) = send_empty(
        &app,
        "GET",
        &format!(
            "/users/{}/efforts?start_date=whenever&end_date=2100-01-01",
            Uuid::new_v4()
        ),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn single_open_policy_rejects_a_second_start_over_rest() -> eyre::Result<()> {
    let app = app_with(
        ScriptedGateway(Ok(EnrichedProfile::default())),
        OpenTaskPolicy::SingleOpen,
    );

    let (_, user) = send_json(
        &app,
        "POST",
        "/users",
        &json!({ "passportNumber": "AB 123456" }),
    )
    .await?;
    let user_id = user["id"].as_str().expect("user id").to_owned();

    let (first, _) = send_json(
        &app,
        "POST",
        &format!("/users/{user_id}/start"),
        &json!({ "description": "first" }),
    )
    .await?;
    assert_eq!(first, StatusCode::OK);

    let (second, _) = send_json(
        &app,
        "POST",
        &format!("/users/{user_id}/start"),
        &json!({ "description": "second" }),
    )
    .await?;
    assert_eq!(second, StatusCode::CONFLICT);
    Ok(())
}
