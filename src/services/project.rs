//! Project service: ownership-checked CRUD on projects

use crate::error::ApiError;
use crate::repositories::{ProjectRecord, ProjectRepository, UpdateProject};
use crate::services::assert_owner;
use crate::types::{Confirmation, CreateProjectRequest, ProjectResponse, UpdateProjectRequest};
use sqlx::PgPool;
use uuid::Uuid;

/// Project service for business logic
pub struct ProjectService;

impl ProjectService {
    /// List all projects created by the caller
    pub async fn list(pool: &PgPool, caller: Uuid) -> Result<Vec<ProjectResponse>, ApiError> {
        let records = ProjectRepository::list_by_creator(pool, caller)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(to_response).collect())
    }

    /// List the caller's projects whose name exactly matches the filter
    pub async fn filter_by_name(
        pool: &PgPool,
        caller: Uuid,
        name: &str,
    ) -> Result<Vec<ProjectResponse>, ApiError> {
        let records = ProjectRepository::list_by_creator_and_name(pool, caller, name)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(to_response).collect())
    }

    /// Create a project, stamping the caller as its creator
    pub async fn create(
        pool: &PgPool,
        caller: Uuid,
        input: CreateProjectRequest,
    ) -> Result<ProjectResponse, ApiError> {
        let record = ProjectRepository::create(pool, &input.name, caller)
            .await
            .map_err(ApiError::Internal)?;

        Ok(to_response(record))
    }

    /// Update a project; only its creator may do so
    pub async fn update(
        pool: &PgPool,
        caller: Uuid,
        id: Uuid,
        input: UpdateProjectRequest,
    ) -> Result<ProjectResponse, ApiError> {
        let existing = ProjectRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))?;

        assert_owner(existing.creator, caller)?;

        let record = ProjectRepository::update(pool, id, UpdateProject { name: input.name })
            .await
            .map_err(ApiError::Internal)?;

        Ok(to_response(record))
    }

    /// Delete a project; only its creator may do so
    pub async fn delete(pool: &PgPool, caller: Uuid, id: Uuid) -> Result<Confirmation, ApiError> {
        let existing = ProjectRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))?;

        assert_owner(existing.creator, caller)?;

        ProjectRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(Confirmation::new("Project deleted"))
    }
}

fn to_response(record: ProjectRecord) -> ProjectResponse {
    ProjectResponse {
        id: record.id,
        name: record.name,
        creator: record.creator,
        created_at: record.created_at,
    }
}
