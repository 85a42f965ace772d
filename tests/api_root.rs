//! Router tests driven with tower's oneshot. The pool is lazy, so nothing
//! here needs a live PostgreSQL: routes under test either skip the store or
//! reject the request before reaching it.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use octofit_backend::{app_router, AppConfig, AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn test_app(codespace: Option<&str>) -> Router {
    let pool = sqlx::PgPool::connect_lazy("postgres://localhost/octofit_test")
        .expect("lazy pool");
    let config = AppConfig {
        database_url: "postgres://localhost/octofit_test".into(),
        bind_addr: "127.0.0.1:0".into(),
        codespace_name: codespace.map(String::from),
    };
    app_router(AppState {
        pool,
        config: Arc::new(config),
    })
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .header("host", "127.0.0.1:8000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn api_root_uses_codespace_urls_when_set() {
    let (status, body) = get_json(test_app(Some("myspace")), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["users"], "https://myspace-8000.app.github.dev/api/users/");
    assert_eq!(body["teams"], "https://myspace-8000.app.github.dev/api/teams/");
    assert_eq!(
        body["activities"],
        "https://myspace-8000.app.github.dev/api/activities/"
    );
    assert_eq!(
        body["leaderboard"],
        "https://myspace-8000.app.github.dev/api/leaderboard/"
    );
    assert_eq!(
        body["workouts"],
        "https://myspace-8000.app.github.dev/api/workouts/"
    );
}

#[tokio::test]
async fn api_root_resolves_against_request_host_when_unset() {
    let (status, body) = get_json(test_app(None), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_object().unwrap().len(), 5);
    assert_eq!(body["users"], "http://127.0.0.1:8000/api/users/");
    assert_eq!(body["workouts"], "http://127.0.0.1:8000/api/workouts/");
}

#[tokio::test]
async fn api_root_carries_format_hint_locally() {
    let (status, body) = get_json(test_app(None), "/?format=json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["teams"], "http://127.0.0.1:8000/api/teams/?format=json");
}

#[tokio::test]
async fn health_is_ok_without_database() {
    let (status, body) = get_json(test_app(None), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn unknown_collection_is_not_found() {
    let (status, body) = get_json(test_app(None), "/api/gyms").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn trailing_slash_routes_are_registered() {
    // The discovery document advertises /api/<resource>/ with a trailing
    // slash; the handler (not the router) must produce this 404.
    let (status, body) = get_json(test_app(None), "/api/gyms/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn invalid_id_is_bad_request() {
    let (status, body) = get_json(test_app(None), "/api/users/not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn create_rejects_non_object_body() {
    let app = test_app(None);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/users")
                .header("host", "127.0.0.1:8000")
                .header("content-type", "application/json")
                .body(Body::from("[1, 2, 3]"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
