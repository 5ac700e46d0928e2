use std::process::Command;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use taskmgr::{TaskServer, TaskService};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tower::ServiceExt;

fn taskmgr_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_taskmgr"))
}

fn seeded_app() -> Router {
    TaskServer::new(TaskService::with_sample_data().unwrap()).router()
}

struct Reply {
    status: StatusCode,
    location: Option<String>,
    body: Value,
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Reply {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    Reply {
        status,
        location,
        body,
    }
}

#[test]
fn test_help_lists_serve() {
    let output = taskmgr_cmd().args(["--help"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("serve"));
}

#[test]
fn test_version() {
    let output = taskmgr_cmd().args(["--version"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_serve_rejects_bad_bind_address() {
    let output = taskmgr_cmd()
        .args(["serve", "--bind", "not-an-address"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[tokio::test]
async fn test_create_task_returns_created_with_location() {
    let app = seeded_app();
    let reply = call(
        &app,
        Method::POST,
        "/tasks",
        Some(json!({"title": "T", "description": "D", "dueDate": "2099-01-01"})),
    )
    .await;

    assert_eq!(reply.status, StatusCode::CREATED);
    assert_eq!(reply.location.as_deref(), Some("/tasks/4"));
    assert_eq!(
        reply.body,
        json!({"id": 4, "title": "T", "description": "D", "dueDate": "2099-01-01"})
    );

    let reply = call(&app, Method::GET, "/tasks/4", None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["title"], "T");
}

#[tokio::test]
async fn test_create_task_with_null_field_stores_empty() {
    let app = seeded_app();
    let reply = call(
        &app,
        Method::POST,
        "/tasks",
        Some(json!({"title": null, "description": "D", "dueDate": "2099-01-01"})),
    )
    .await;

    assert_eq!(reply.status, StatusCode::CREATED);
    assert_eq!(reply.location.as_deref(), Some("/tasks/4"));
    assert_eq!(
        reply.body,
        json!({"id": 4, "title": "", "description": "D", "dueDate": "2099-01-01"})
    );
}

#[tokio::test]
async fn test_add_note_with_null_body_stores_empty() {
    let app = seeded_app();
    let reply = call(
        &app,
        Method::POST,
        "/tasks/3/notes",
        Some(json!({"noteBody": null})),
    )
    .await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, json!({"noteId": 7, "noteBody": ""}));
}

#[tokio::test]
async fn test_get_unknown_task_is_404() {
    let app = seeded_app();
    let reply = call(&app, Method::GET, "/tasks/999", None).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.body, json!({"message": "Task with id 999 not found"}));
}

#[tokio::test]
async fn test_add_note_uses_next_global_id() {
    let app = seeded_app();
    let reply = call(
        &app,
        Method::POST,
        "/tasks/1/notes",
        Some(json!({"noteBody": "hi"})),
    )
    .await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, json!({"noteId": 7, "noteBody": "hi"}));

    let reply = call(&app, Method::GET, "/tasks/1/notes", None).await;
    let notes = reply.body.as_array().unwrap();
    assert_eq!(notes.len(), 4);
    assert_eq!(notes[3]["noteBody"], "hi");
}

#[tokio::test]
async fn test_delete_unknown_note_is_404() {
    let app = seeded_app();
    let reply = call(&app, Method::DELETE, "/tasks/1/notes/9999", None).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.body, json!({"message": "Note with id 9999 not found"}));
}

#[tokio::test]
async fn test_delete_note_from_wrong_task_is_404() {
    let app = seeded_app();
    // note 5 lives under task 2
    let reply = call(&app, Method::DELETE, "/tasks/1/notes/5", None).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);

    let reply = call(&app, Method::DELETE, "/tasks/2/notes/5", None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, json!({"noteId": 5, "noteBody": "Note - 1"}));
}

#[tokio::test]
async fn test_notes_survive_task_deletion() {
    let app = seeded_app();
    let reply = call(&app, Method::DELETE, "/tasks/1", None).await;
    assert_eq!(reply.status, StatusCode::ACCEPTED);

    let reply = call(&app, Method::GET, "/tasks/1/notes", None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body.as_array().unwrap().len(), 3);

    let reply = call(&app, Method::DELETE, "/tasks/1/notes/2", None).await;
    assert_eq!(reply.status, StatusCode::OK);
}

#[tokio::test]
async fn test_note_on_missing_task_is_accepted() {
    let app = seeded_app();
    let reply = call(
        &app,
        Method::POST,
        "/tasks/500/notes",
        Some(json!({"noteBody": "orphan"})),
    )
    .await;
    assert_eq!(reply.status, StatusCode::OK);

    let reply = call(&app, Method::GET, "/tasks/500", None).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);

    let reply = call(&app, Method::GET, "/tasks/500/notes", None).await;
    assert_eq!(reply.body, json!([{"noteId": 7, "noteBody": "orphan"}]));
}

#[tokio::test]
async fn test_patch_with_empty_body_changes_nothing() {
    let app = seeded_app();
    let before = call(&app, Method::GET, "/tasks/1", None).await.body;
    let reply = call(&app, Method::PATCH, "/tasks/1", Some(json!({}))).await;
    assert_eq!(reply.status, StatusCode::ACCEPTED);
    assert_eq!(reply.body, before);
}

#[tokio::test]
async fn test_served_over_tcp() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = TaskServer::new(TaskService::with_sample_data().unwrap());
    let handle = tokio::spawn(server.serve(listener));

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /tasks/2 HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut raw = String::new();
    stream.read_to_string(&mut raw).await.unwrap();

    assert!(raw.starts_with("HTTP/1.1 200"));
    assert!(raw.contains(r#""title":"Task 2""#));

    handle.abort();
}
