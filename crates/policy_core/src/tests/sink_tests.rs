use std::sync::{Arc, Mutex};

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tokio::net::TcpListener;

use super::*;

#[derive(Clone, Default)]
struct ReceiverState {
    received: Arc<Mutex<Vec<ContactSubmission>>>,
}

async fn spawn_receiver(status: StatusCode) -> (String, ReceiverState) {
    let state = ReceiverState::default();
    let app = Router::new()
        .route(
            "/api/contact",
            post(
                move |State(state): State<ReceiverState>, Json(body): Json<ContactSubmission>| async move {
                    state.received.lock().expect("lock").push(body);
                    status
                },
            ),
        )
        .with_state(state.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    (format!("http://{addr}"), state)
}

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "Asha".into(),
        email: "asha@example.com".into(),
        phone: "+91-9000000000".into(),
        message: "Where is my certificate?".into(),
    }
}

#[tokio::test]
async fn log_sink_accepts_every_submission() {
    LogSink.forward(&submission()).await.expect("forward");
}

#[tokio::test]
async fn http_sink_posts_submission_json() {
    let (base, state) = spawn_receiver(StatusCode::OK).await;
    let sink = HttpSink::for_server(&base).expect("sink");
    assert_eq!(sink.endpoint().path(), "/api/contact");

    sink.forward(&submission()).await.expect("forward");

    let received = state.received.lock().expect("lock").clone();
    assert_eq!(received, vec![submission()]);
}

#[tokio::test]
async fn http_sink_treats_error_status_as_failure() {
    let (base, _state) = spawn_receiver(StatusCode::BAD_GATEWAY).await;
    let sink = HttpSink::for_server(&base).expect("sink");

    let error = sink.forward(&submission()).await.expect_err("should fail");
    assert!(error.reason.contains("502"), "{}", error.reason);
}

#[tokio::test]
async fn http_sink_reports_unreachable_endpoint() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let sink = HttpSink::new(&format!("http://{addr}/api/contact")).expect("sink");
    let error = sink.forward(&submission()).await.expect_err("should fail");
    assert!(error.reason.starts_with("request failed"), "{}", error.reason);
}

#[test]
fn http_sink_rejects_invalid_endpoint() {
    let error = HttpSink::new("not a url").expect_err("should fail");
    assert!(error.to_string().contains("invalid forwarding endpoint"));
}

#[test]
fn server_endpoint_keeps_path_prefix() {
    for base in ["http://host/policy/", "http://host/policy"] {
        let sink = HttpSink::for_server(base).expect("sink");
        assert_eq!(sink.endpoint().as_str(), "http://host/policy/api/contact");
    }
    let sink = HttpSink::for_server("http://host").expect("sink");
    assert_eq!(sink.endpoint().as_str(), "http://host/api/contact");
}
