/// Tests for the HTTP client against an in-process stub API
use std::time::Duration;

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::Router;
use serde_json::json;

use appstat::actor::{Actor, ActorError, InstanceOrder};
use appstat::api::{set_silent, ApiError, CloudControllerClient, InstanceSource, WARNINGS_HEADER};
use appstat::models::InstanceIndex;

const APP: &str = "known-app";
const TOKEN: &str = "test-token";

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("bearer {}", TOKEN))
        .unwrap_or(false)
}

async fn stats(Path(guid): Path<String>, headers: HeaderMap) -> (StatusCode, [(&'static str, &'static str); 1], String) {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, [(WARNINGS_HEADER, "")], "{}".into());
    }
    if guid == "broken-app" {
        return (StatusCode::INTERNAL_SERVER_ERROR, [(WARNINGS_HEADER, "stats%20degraded")], "oops".into());
    }
    if guid != APP {
        let body = json!({
            "code": 100004,
            "description": format!("The app could not be found: {}", guid),
            "error_code": "CF-AppNotFound"
        });
        return (StatusCode::NOT_FOUND, [(WARNINGS_HEADER, "lookup%20failed")], body.to_string());
    }
    let body = json!({
        "0": { "state": "RUNNING", "stats": { "usage": { "cpu": 0.5, "disk": 100, "mem": 200 }, "disk_quota": 1000, "mem_quota": 2000 } },
        "3": { "state": "RUNNING", "stats": { "usage": { "cpu": 0.1, "disk": 1, "mem": 2 }, "disk_quota": 10, "mem_quota": 20 } }
    });
    (StatusCode::OK, [(WARNINGS_HEADER, "stats%20warning%201,stats%20warning%202")], body.to_string())
}

async fn instances(Path(guid): Path<String>) -> (StatusCode, [(&'static str, &'static str); 1], String) {
    if guid != APP && guid != "broken-app" {
        return (StatusCode::NOT_FOUND, [(WARNINGS_HEADER, "")], "{}".into());
    }
    let body = json!({
        "0": { "state": "RUNNING", "since": 1403140717.98 },
        "1": { "state": "STARTING", "since": 1403140800.0, "details": "starting up" }
    });
    (StatusCode::OK, [(WARNINGS_HEADER, "instances%20warning")], body.to_string())
}

async fn spawn_stub() -> String {
    let app = Router::new()
        .route("/v2/apps/:guid/stats", get(stats))
        .route("/v2/apps/:guid/instances", get(instances));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client(base: &str, token: &str) -> CloudControllerClient {
    set_silent(true);
    CloudControllerClient::new(base, token, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetch_statuses_decodes_body_and_warnings() {
    let base = spawn_stub().await;
    let client = client(&base, TOKEN);

    let (result, warnings) = client.fetch_instance_statuses(APP).await.into_parts();

    let statuses = result.unwrap();
    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[&InstanceIndex(0)].memory_quota, 2000);
    assert_eq!(warnings.into_vec(), vec!["stats warning 1", "stats warning 2"]);
}

#[tokio::test]
async fn test_missing_app_is_resource_not_found() {
    let base = spawn_stub().await;
    let client = client(&base, TOKEN);

    let (result, warnings) = client.fetch_instance_statuses("missing").await.into_parts();

    assert_eq!(
        result.unwrap_err(),
        ApiError::ResourceNotFound("The app could not be found: missing".into())
    );
    assert_eq!(warnings.into_vec(), vec!["lookup failed"]);
}

#[tokio::test]
async fn test_missing_token_is_unexpected_response() {
    let base = spawn_stub().await;
    let client = client(&base, "");

    let result = client.fetch_instance_statuses(APP).await.result;

    assert!(matches!(result, Err(ApiError::UnexpectedResponse { status: 401, .. })));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let client = client("http://127.0.0.1:1", TOKEN);

    let (result, warnings) = client.fetch_instance_metadata(APP).await.into_parts();

    assert!(matches!(result, Err(ApiError::Network(_))));
    assert!(warnings.is_empty());
}

#[tokio::test]
async fn test_end_to_end_reconciliation() {
    let base = spawn_stub().await;
    let actor = Actor::new(client(&base, TOKEN)).with_order(InstanceOrder::Ascending);

    let (result, warnings) = actor.reconcile_instances(APP).await.into_parts();

    let views = result.unwrap();
    let indices: Vec<u32> = views.iter().map(|v| v.index().value()).collect();
    assert_eq!(indices, vec![0, 1, 3]);
    assert!(!views[0].is_incomplete());
    assert_eq!(views[1].details(), "starting up (Unable to retrieve information)");
    assert_eq!(views[2].details(), "(Unable to retrieve information)");
    assert_eq!(
        warnings.into_vec(),
        vec!["stats warning 1", "stats warning 2", "instances warning"]
    );
}

#[tokio::test]
async fn test_end_to_end_not_found() {
    let base = spawn_stub().await;
    let actor = Actor::new(client(&base, TOKEN));

    let (result, warnings) = actor.reconcile_instances("missing").await.into_parts();

    assert_eq!(result.unwrap_err(), ActorError::NotFound { application_id: "missing".into() });
    assert_eq!(warnings.into_vec(), vec!["lookup failed"]);
}

#[tokio::test]
async fn test_end_to_end_server_error() {
    let base = spawn_stub().await;
    let actor = Actor::new(client(&base, TOKEN));

    let (result, warnings) = actor.reconcile_instances("broken-app").await.into_parts();

    assert!(matches!(
        result,
        Err(ActorError::Passthrough(ApiError::UnexpectedResponse { status: 500, .. }))
    ));
    assert_eq!(warnings.into_vec(), vec!["stats degraded"]);
}
