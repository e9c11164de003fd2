//! Gateway behaviour against a live mock backend.

use std::time::{Duration, Instant};

use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use library_console::gateway::{FailureCause, Level, Method, FALLBACK_MESSAGE};
use serde::Deserialize;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_envelope_payload_is_unwrapped() {
    let app = Router::new().route(
        "/readers/1",
        get(|| async { Json(json!({ "code": 0, "data": { "id": 1, "name": "Alice" } })) }),
    );
    let addr = common::start_backend(app).await;
    let (gateway, mut rx) = common::gateway_for(addr, Duration::from_secs(2));

    let payload = gateway.call(Method::GET, "/readers/1", None).await.unwrap();

    assert_eq!(payload, json!({ "id": 1, "name": "Alice" }));
    assert!(common::drain(&mut rx).is_empty(), "success must not notify");
}

#[tokio::test]
async fn test_backend_detail_is_notified_once() {
    let app = Router::new().route(
        "/readers/",
        get(|| async {
            (StatusCode::BAD_REQUEST, Json(json!({ "detail": "duplicate reader" })))
        }),
    );
    let addr = common::start_backend(app).await;
    let (gateway, mut rx) = common::gateway_for(addr, Duration::from_secs(2));

    let err = gateway.call(Method::GET, "/readers/", None).await.unwrap_err();

    assert_eq!(err.message(), "duplicate reader");
    assert_eq!(err.status(), Some(400));
    let seen = common::drain(&mut rx);
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].level, Level::Error);
    assert_eq!(seen[0].message, "duplicate reader");
}

#[tokio::test]
async fn test_network_failure_uses_fallback() {
    let addr = common::dead_addr().await;
    let (gateway, mut rx) = common::gateway_for(addr, Duration::from_secs(2));

    let err = gateway.call(Method::GET, "/books/", None).await.unwrap_err();

    assert_eq!(err.message(), FALLBACK_MESSAGE);
    assert!(matches!(err.original_cause(), FailureCause::Transport(_)));
    let seen = common::drain(&mut rx);
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].message, FALLBACK_MESSAGE);
}

#[tokio::test]
async fn test_error_without_detail_uses_fallback() {
    let app = Router::new().route(
        "/fines/all",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error") }),
    );
    let addr = common::start_backend(app).await;
    let (gateway, mut rx) = common::gateway_for(addr, Duration::from_secs(2));

    let err = gateway.call(Method::GET, "/fines/all", None).await.unwrap_err();

    assert_eq!(err.message(), FALLBACK_MESSAGE);
    assert_eq!(err.status(), Some(500));
    assert_eq!(common::drain(&mut rx).len(), 1);
}

#[tokio::test]
async fn test_timeout_abandons_call() {
    let app = Router::new().route(
        "/inventory/",
        get(|| async {
            tokio::time::sleep(Duration::from_millis(800)).await;
            Json(json!([]))
        }),
    );
    let addr = common::start_backend(app).await;
    let (gateway, mut rx) = common::gateway_for(addr, Duration::from_millis(100));

    let err = gateway.call(Method::GET, "/inventory/", None).await.unwrap_err();

    assert!(err.is_timeout());
    assert_eq!(err.message(), FALLBACK_MESSAGE);
    assert_eq!(common::drain(&mut rx).len(), 1);
}

#[tokio::test]
async fn test_out_of_order_responses_match_their_calls() {
    let app = Router::new()
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_millis(300)).await;
                Json(json!({ "code": 0, "data": { "id": 1 } }))
            }),
        )
        .route("/fast", get(|| async { Json(json!({ "code": 0, "data": { "id": 2 } })) }));
    let addr = common::start_backend(app).await;
    let (gateway, _rx) = common::gateway_for(addr, Duration::from_secs(2));

    let slow = async {
        let value = gateway.call(Method::GET, "/slow", None).await;
        (value, Instant::now())
    };
    let fast = async {
        let value = gateway.call(Method::GET, "/fast", None).await;
        (value, Instant::now())
    };

    let ((slow_value, slow_done), (fast_value, fast_done)) = tokio::join!(slow, fast);

    assert!(fast_done < slow_done, "fast response should arrive first");
    assert_eq!(slow_value.unwrap(), json!({ "id": 1 }));
    assert_eq!(fast_value.unwrap(), json!({ "id": 2 }));
}

#[tokio::test]
async fn test_each_call_carries_a_request_id() {
    let app = Router::new().route(
        "/echo",
        get(|headers: HeaderMap| async move {
            let id = headers
                .get("x-request-id")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            Json(json!({ "request_id": id }))
        }),
    );
    let addr = common::start_backend(app).await;
    let (gateway, _rx) = common::gateway_for(addr, Duration::from_secs(2));

    let first = gateway.call(Method::GET, "/echo", None).await.unwrap();
    let second = gateway.call(Method::GET, "/echo", None).await.unwrap();

    let first = first["request_id"].as_str().unwrap();
    let second = second["request_id"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(first).is_ok());
    assert_ne!(first, second);
}

#[derive(Debug, Deserialize)]
struct Named {
    #[allow(dead_code)]
    name: String,
}

#[tokio::test]
async fn test_undecodable_payload_is_one_failure() {
    let app = Router::new().route("/readers/", get(|| async { Json(json!({ "unexpected": true })) }));
    let addr = common::start_backend(app).await;
    let (gateway, mut rx) = common::gateway_for(addr, Duration::from_secs(2));

    let err = gateway.get::<Named>("/readers/").await.unwrap_err();

    assert!(matches!(err.original_cause(), FailureCause::Decode(_)));
    assert_eq!(common::drain(&mut rx).len(), 1);
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let app = Router::new().route(
        "/readers/",
        axum::routing::post(|Json(body): Json<Value>| async move {
            Json(json!({
                "card_id": 11,
                "name": body["name"],
                "category": body["category"],
                "borrowed_count": 0
            }))
        }),
    );
    let addr = common::start_backend(app).await;
    let (gateway, mut rx) = common::gateway_for(addr, Duration::from_secs(2));

    let body = json!({ "name": "李雷", "category": "student" });
    let created = gateway.call(Method::POST, "/readers/", Some(&body)).await.unwrap();

    assert_eq!(created["card_id"], 11);
    assert_eq!(created["name"], "李雷");
    assert!(common::drain(&mut rx).is_empty());
}
