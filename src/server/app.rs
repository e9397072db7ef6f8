//! HTTP surface of the task service
//!
//! Three routes translating between JSON bodies and the task store. Every
//! store failure is converted to a response at this boundary; nothing
//! propagates past it.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::error::TaskError;
use crate::models::CreateTaskRequest;
use crate::store::TaskStore;

const MISSING_TITLE: &str = "Title is required!";

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn TaskStore>,
}

/// Builds the application router around a task store.
pub fn build_router(store: Arc<dyn TaskStore>) -> Router {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/:id/complete", post(complete_task))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { store })
}

/// `GET /tasks` — incomplete tasks, newest first, at most five.
async fn list_tasks(State(state): State<AppState>) -> Result<impl IntoResponse, TaskError> {
    let tasks = state.store.list_incomplete().await.map_err(log_storage)?;
    Ok(Json(tasks))
}

/// `POST /tasks` — creates a task from a JSON body.
async fn create_task(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, TaskError> {
    // Only key presence is validated; an empty-string title is accepted.
    let Some(Json(payload)) = body else {
        return Err(TaskError::validation(MISSING_TITLE));
    };
    if payload.get("title").is_none() {
        return Err(TaskError::validation(MISSING_TITLE));
    }

    let request: CreateTaskRequest =
        serde_json::from_value(payload).map_err(|e| TaskError::Validation(e.to_string()))?;

    let task = state
        .store
        .create(&request.title, &request.description)
        .await
        .map_err(log_storage)?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// `POST /tasks/{id}/complete` — marks a task complete, idempotently.
async fn complete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, TaskError> {
    // A non-integer segment does not name any task; treat it as not found.
    let id: i64 = id.parse().map_err(|_| TaskError::NotFound)?;

    let found = state.store.complete(id).await.map_err(log_storage)?;
    if found {
        Ok(Json(json!({ "message": "Task marked as complete" })))
    } else {
        Err(TaskError::NotFound)
    }
}

fn log_storage(err: TaskError) -> TaskError {
    error!("store operation failed: {}", err);
    err
}
