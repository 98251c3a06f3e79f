//! HTTP surface tests: static assets, session commands and the ticker task

use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use productivity_timer::{
    api::create_router,
    state::{AppState, Mode},
    tasks::ticker_task,
};

fn test_state() -> Arc<AppState> {
    Arc::new(AppState::new(8787, "127.0.0.1".to_string()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, String, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, _, text) = send(app, method, uri, body).await;
    (status, serde_json::from_str(&text).unwrap())
}

#[tokio::test]
async fn test_index_routes_serve_markup() {
    let app = create_router(test_state());

    for uri in ["/", "/index.html"] {
        let (status, content_type, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "text/html; charset=utf-8");
        assert!(body.contains("<title>Productivity Timer</title>"));
    }
}

#[tokio::test]
async fn test_stylesheet_route() {
    let app = create_router(test_state());
    let (status, content_type, body) = send(&app, Method::GET, "/style.css", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "text/css; charset=utf-8");
    assert!(body.contains(".coffee-liquid"));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = create_router(test_state());
    let (status, content_type, body) = send(&app, Method::GET, "/favicon.ico", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(body, "Not found");
}

#[tokio::test]
async fn test_start_requires_selected_task() {
    let app = create_router(test_state());
    let (status, body) = send_json(&app, Method::POST, "/api/timer/start", None).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "error");

    let (_, status_body) = send_json(&app, Method::GET, "/api/status", None).await;
    assert_eq!(status_body["timer"]["running"], false);
    assert_eq!(status_body["last_action"], Value::Null);
}

#[tokio::test]
async fn test_task_commands() {
    let app = create_router(test_state());

    let (status, _) =
        send_json(&app, Method::POST, "/api/tasks", Some(json!({ "text": "   " }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) =
        send_json(&app, Method::POST, "/api/tasks", Some(json!({ "text": " buy milk " }))).await;
    assert_eq!(status, StatusCode::OK);
    let id = body["task_id"].as_u64().unwrap();

    let (status, body) =
        send_json(&app, Method::POST, &format!("/api/tasks/{}/select", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["display"]["current_task"], "Working on: buy milk");

    let (status, _) = send_json(&app, Method::POST, "/api/tasks/999/select", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send_json(&app, Method::DELETE, "/api/tasks/999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["display"]["current_task"], "Working on: buy milk");

    let (status, body) = send_json(&app, Method::DELETE, &format!("/api/tasks/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["display"]["current_task"], "No task selected");

    let (_, status_body) = send_json(&app, Method::GET, "/api/status", None).await;
    assert_eq!(status_body["tasks"], json!([]));
    assert_eq!(status_body["selected_task_id"], Value::Null);
}

#[tokio::test]
async fn test_timer_commands() {
    let state = test_state();
    let app = create_router(Arc::clone(&state));

    let (_, body) =
        send_json(&app, Method::POST, "/api/tasks", Some(json!({ "text": "write report" }))).await;
    let id = body["task_id"].as_u64().unwrap();
    send_json(&app, Method::POST, &format!("/api/tasks/{}/select", id), None).await;

    let (status, body) = send_json(&app, Method::POST, "/api/timer/start", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["display"]["status"], "Focus");
    assert!(*state.tick_armed_rx.borrow());

    state.tick().unwrap();
    let (_, display) = send_json(&app, Method::GET, "/api/display", None).await;
    assert_eq!(display["clock"], "24:59");

    let (_, body) = send_json(&app, Method::POST, "/api/timer/pause", None).await;
    assert_eq!(body["display"]["status"], "Ready");
    assert!(!*state.tick_armed_rx.borrow());

    let (_, body) = send_json(&app, Method::POST, "/api/timer/reset", None).await;
    assert_eq!(body["display"]["clock"], "25:00");

    let (_, status_body) = send_json(&app, Method::GET, "/api/status", None).await;
    assert_eq!(status_body["last_action"], "reset");
    assert_eq!(status_body["tasks"][0]["text"], "write report");
}

#[tokio::test]
async fn test_health() {
    let app = create_router(test_state());
    let (status, body) = send_json(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test(start_paused = true)]
async fn test_ticker_task_counts_down_while_armed() {
    let state = test_state();
    tokio::spawn(ticker_task(Arc::clone(&state)));

    let id = state.with_widget("add-task", |w| w.add_task("a")).unwrap();
    state.with_widget("select-task", |w| w.select_task(id)).unwrap();
    state.with_widget("start", |w| w.start()).unwrap();

    tokio::time::sleep(Duration::from_millis(3500)).await;
    assert_eq!(state.get_display().clock, "24:57");

    state.with_widget("pause", |w| {
        w.pause();
        Ok(())
    }).unwrap();
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(state.get_display().clock, "24:57");
    assert_eq!(state.get_display().status, "Ready");
}

#[tokio::test(start_paused = true)]
async fn test_ticker_task_rearm_and_restart_after_completion() {
    let state = test_state();
    tokio::spawn(ticker_task(Arc::clone(&state)));

    let id = state.with_widget("add-task", |w| w.add_task("a")).unwrap();
    state.with_widget("select-task", |w| w.select_task(id)).unwrap();
    state.with_widget("start", |w| w.start()).unwrap();

    tokio::time::sleep(Duration::from_millis(2500)).await;
    assert_eq!(state.get_display().clock, "24:58");

    // Pause and start between two ticks: the next second starts over
    state.with_widget("pause", |w| {
        w.pause();
        Ok(())
    }).unwrap();
    state.with_widget("start", |w| w.start()).unwrap();
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(state.get_display().clock, "24:57");

    tokio::time::sleep(Duration::from_secs(1500)).await;
    let display = state.get_display();
    assert_eq!(display.mode, Mode::ShortBreak);
    assert_eq!(display.clock, "05:00");
    assert!(!display.running);
    assert!(!*state.tick_armed_rx.borrow());

    state.with_widget("start", |w| w.start()).unwrap();
    tokio::time::sleep(Duration::from_millis(3500)).await;
    assert_eq!(state.get_display().clock, "04:57");
    assert!(state.get_display().running);
}

#[tokio::test]
async fn test_static_routes_answer_any_method() {
    let app = create_router(test_state());

    let (status, content_type, body) = send(&app, Method::POST, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "text/html; charset=utf-8");
    assert!(body.contains("<title>Productivity Timer</title>"));

    let (status, content_type, _) = send(&app, Method::POST, "/style.css", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "text/css; charset=utf-8");

    let (status, _, body) = send(&app, Method::POST, "/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Not found");
}

#[tokio::test]
async fn test_malformed_task_id_returns_json_error() {
    let app = create_router(test_state());

    for (method, uri) in [
        (Method::POST, "/api/tasks/abc/select"),
        (Method::DELETE, "/api/tasks/abc"),
    ] {
        let (status, content_type, text) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(content_type.starts_with("application/json"));

        let body: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(body["status"], "error");
        assert!(!body["message"].as_str().unwrap().is_empty());
    }
}
