//! Task API routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::TaskService;
use crate::state::AppState;
use crate::types::{Confirmation, CreateTaskRequest, TaskResponse, UpdateTaskRequest};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

/// Create task routes
pub fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route("/:id", put(update_task).delete(delete_task))
}

/// Query parameters for listing tasks
#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    /// Parent project id; listing is always scoped to one project
    pub project: Uuid,
}

/// GET /api/v1/tasks?project=<uuid> - List the caller's tasks in a project
async fn list_tasks(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListTasksQuery>,
) -> ApiResult<Json<Vec<TaskResponse>>> {
    let tasks = TaskService::list(state.db(), auth.user_id, query.project).await?;
    Ok(Json(tasks))
}

/// POST /api/v1/tasks - Create a task owned by the caller
async fn create_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)> {
    let task = TaskService::create(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /api/v1/tasks/:id - Update a task (creator only)
///
/// The request body always carries an explicit `status`; other fields
/// retain their stored values when absent.
async fn update_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let task = TaskService::update(state.db(), auth.user_id, id, req).await?;
    Ok(Json(task))
}

/// DELETE /api/v1/tasks/:id - Delete a task (creator only)
async fn delete_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Confirmation>> {
    let confirmation = TaskService::delete(state.db(), auth.user_id, id).await?;
    Ok(Json(confirmation))
}
