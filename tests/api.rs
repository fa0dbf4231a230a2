// Drives the HTTP router in-process, checking that the timer endpoints reflect
// the engine state and that unknown encounters are reported as missing.

use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use boss_helper::{create_router, encounters, AppState};

fn app() -> Router {
    let state = AppState::new(0, "127.0.0.1".to_string(), encounters::all().unwrap()).unwrap();
    create_router(Arc::new(state))
}

async fn call(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn lists_both_encounters() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/encounters").await;

    assert_eq!(status, StatusCode::OK);
    let slugs: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["cerberus", "araxxor"]);
}

#[tokio::test]
async fn encounter_detail_shows_derived_delays() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/encounters/cerberus").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tick_ms"], 100);
    let phases = body["phases"].as_array().unwrap();
    assert_eq!(phases.len(), 11);
    assert_eq!(phases[0]["label"], "COMBO");
    assert_eq!(phases[0]["duration_ms"], 14400);
    assert_eq!(phases[0]["duration_display"], "14.4s");
    assert_eq!(phases[10]["ordinal"], 28);
    assert_eq!(phases[10]["duration_ms"], 3600);

    let (_, body) = call(&app, Method::GET, "/encounters/araxxor").await;
    assert_eq!(body["phases"][0]["duration_display"], "6s");
}

#[tokio::test]
async fn timer_is_stopped_before_start() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/encounters/araxxor/timer").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["running"], false);
    assert_eq!(body["current"]["label"], "Acid Webs");
    assert_eq!(body["next"]["label"], "Leap & Bite");
    assert_eq!(body["remaining_ms"], 6000);
    assert_eq!(body["remaining_display"], "6s");
}

#[tokio::test(start_paused = true)]
async fn start_tick_stop_restart() {
    let app = app();

    let (status, body) = call(&app, Method::POST, "/encounters/araxxor/start").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["running"], true);
    assert_eq!(body["remaining_ms"], 6000);

    tokio::time::sleep(Duration::from_millis(2500)).await;
    let (_, body) = call(&app, Method::GET, "/encounters/araxxor/timer").await;
    assert_eq!(body["remaining_display"], "4s");

    tokio::time::sleep(Duration::from_millis(4000)).await;

    let (_, body) = call(&app, Method::GET, "/encounters/araxxor/timer").await;
    assert_eq!(body["current"]["label"], "Leap & Bite");
    assert_eq!(body["next"]["label"], "Spawn Minions");
    assert_eq!(body["remaining_ms"], 6000);

    let (_, stopped) = call(&app, Method::POST, "/encounters/araxxor/stop").await;
    assert_eq!(stopped["running"], false);

    tokio::time::sleep(Duration::from_millis(5000)).await;
    let (_, frozen) = call(&app, Method::GET, "/encounters/araxxor/timer").await;
    assert_eq!(frozen["current"], stopped["current"]);
    assert_eq!(frozen["remaining_ms"], stopped["remaining_ms"]);

    let (_, restarted) = call(&app, Method::POST, "/encounters/araxxor/start").await;
    assert_eq!(restarted["current"]["label"], "Acid Webs");
    assert_eq!(restarted["remaining_ms"], 6000);

    let (_, status_body) = call(&app, Method::GET, "/status").await;
    assert_eq!(status_body["last_action"], "araxxor-start");
    assert_eq!(status_body["timers"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_encounter_is_not_found() {
    let app = app();

    for (method, uri) in [
        (Method::GET, "/encounters/vorkath"),
        (Method::GET, "/encounters/vorkath/timer"),
        (Method::POST, "/encounters/vorkath/start"),
        (Method::POST, "/encounters/vorkath/stop"),
    ] {
        let (status, _) = call(&app, method, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
    }
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
