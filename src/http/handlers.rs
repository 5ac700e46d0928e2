//! Route handlers. Each one locks the shared service once for the whole
//! operation and clones the result out before the guard drops.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use super::error::ApiError;
use super::payloads::{CreateNoteRequest, CreateTaskRequest, HealthResponse, UpdateTaskRequest};
use super::TaskServer;
use crate::entity::{Note, Task};

type TaskPath = Result<Path<u32>, PathRejection>;
type NotePath = Result<Path<(u32, u32)>, PathRejection>;

// ============================================================================
// Tasks
// ============================================================================

pub async fn list_tasks(State(server): State<TaskServer>) -> Json<Vec<Task>> {
    let service = server.service.lock().await;
    Json(service.list_tasks().to_vec())
}

/// `POST /tasks`: 201 with a `Location` header pointing at the new task.
pub async fn create_task(
    State(server): State<TaskServer>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let task = server
        .service
        .lock()
        .await
        .create_task(
            req.title.unwrap_or_default(),
            req.description.unwrap_or_default(),
            req.due_date.unwrap_or_default(),
        )?;

    let location = format!("/tasks/{}", task.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(task)))
}

pub async fn get_task(
    State(server): State<TaskServer>,
    path: TaskPath,
) -> Result<Json<Task>, ApiError> {
    let Path(id) = path?;
    let service = server.service.lock().await;
    Ok(Json(service.get_task(id)?.clone()))
}

pub async fn update_task(
    State(server): State<TaskServer>,
    path: TaskPath,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Path(id) = path?;
    let Json(req) = payload?;
    let mut service = server.service.lock().await;
    let task = service.update_task(id, req.into())?.clone();
    Ok((StatusCode::ACCEPTED, Json(task)))
}

pub async fn delete_task(
    State(server): State<TaskServer>,
    path: TaskPath,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Path(id) = path?;
    let task = server.service.lock().await.delete_task(id)?;
    Ok((StatusCode::ACCEPTED, Json(task)))
}

// ============================================================================
// Notes
// ============================================================================

pub async fn list_notes(
    State(server): State<TaskServer>,
    path: TaskPath,
) -> Result<Json<Vec<Note>>, ApiError> {
    let Path(task_id) = path?;
    let service = server.service.lock().await;
    Ok(Json(service.list_notes(task_id)))
}

pub async fn add_note(
    State(server): State<TaskServer>,
    path: TaskPath,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<Json<Note>, ApiError> {
    let Path(task_id) = path?;
    let Json(req) = payload?;
    let note = server
        .service
        .lock()
        .await
        .add_note(task_id, req.note_body.unwrap_or_default())?;
    Ok(Json(note))
}

pub async fn delete_note(
    State(server): State<TaskServer>,
    path: NotePath,
) -> Result<Json<Note>, ApiError> {
    let Path((task_id, note_id)) = path?;
    let note = server.service.lock().await.delete_note(task_id, note_id)?;
    Ok(Json(note))
}

// ============================================================================
// Health
// ============================================================================

pub async fn health(State(server): State<TaskServer>) -> Json<HealthResponse> {
    let service = server.service.lock().await;
    Json(HealthResponse {
        status: "ok",
        tasks: service.task_count(),
        notes: service.note_count(),
    })
}
