//! Project API routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::ProjectService;
use crate::state::AppState;
use crate::types::{Confirmation, CreateProjectRequest, ProjectResponse, UpdateProjectRequest};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

/// Create project routes
pub fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route("/:id", put(update_project).delete(delete_project))
}

/// Query parameters for listing projects
#[derive(Debug, Deserialize)]
pub struct ListProjectsQuery {
    /// Exact-match name filter; when absent all of the caller's
    /// projects are returned
    pub name: Option<String>,
}

/// GET /api/v1/projects - List the caller's projects
///
/// With `?name=<value>` the listing is restricted to projects whose
/// name exactly matches the filter.
async fn list_projects(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListProjectsQuery>,
) -> ApiResult<Json<Vec<ProjectResponse>>> {
    let projects = match query.name {
        Some(name) => ProjectService::filter_by_name(state.db(), auth.user_id, &name).await?,
        None => ProjectService::list(state.db(), auth.user_id).await?,
    };
    Ok(Json(projects))
}

/// POST /api/v1/projects - Create a project owned by the caller
async fn create_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<ProjectResponse>)> {
    let project = ProjectService::create(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/v1/projects/:id - Update a project (creator only)
async fn update_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProjectRequest>,
) -> ApiResult<Json<ProjectResponse>> {
    let project = ProjectService::update(state.db(), auth.user_id, id, req).await?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/:id - Delete a project (creator only)
async fn delete_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Confirmation>> {
    let confirmation = ProjectService::delete(state.db(), auth.user_id, id).await?;
    Ok(Json(confirmation))
}

#[cfg(test)]
mod tests {
    // Route tests live in tests/project_integration_test.rs
}
