//! Task service: ownership-checked CRUD on tasks

use crate::error::ApiError;
use crate::repositories::{TaskRecord, TaskRepository, UpdateTask};
use crate::services::assert_owner;
use crate::types::{Confirmation, CreateTaskRequest, TaskResponse, UpdateTaskRequest};
use sqlx::PgPool;
use uuid::Uuid;

/// Task service for business logic
pub struct TaskService;

impl TaskService {
    /// List the caller's tasks within one project
    pub async fn list(
        pool: &PgPool,
        caller: Uuid,
        project: Uuid,
    ) -> Result<Vec<TaskResponse>, ApiError> {
        let records = TaskRepository::list_by_creator_and_project(pool, caller, project)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(to_response).collect())
    }

    /// Create a task, stamping the caller as its creator
    pub async fn create(
        pool: &PgPool,
        caller: Uuid,
        input: CreateTaskRequest,
    ) -> Result<TaskResponse, ApiError> {
        let record = TaskRepository::create(pool, &input.name, input.project, caller)
            .await
            .map_err(ApiError::Internal)?;

        Ok(to_response(record))
    }

    /// Update a task; only its creator may do so
    ///
    /// The explicit `status` in the request is always applied; other
    /// absent fields keep their stored values.
    pub async fn update(
        pool: &PgPool,
        caller: Uuid,
        id: Uuid,
        input: UpdateTaskRequest,
    ) -> Result<TaskResponse, ApiError> {
        let existing = TaskRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

        assert_owner(existing.creator, caller)?;

        let updates = UpdateTask {
            name: input.name,
            status: input.status,
        };
        let record = TaskRepository::update(pool, id, updates)
            .await
            .map_err(ApiError::Internal)?;

        Ok(to_response(record))
    }

    /// Delete a task; only its creator may do so
    pub async fn delete(pool: &PgPool, caller: Uuid, id: Uuid) -> Result<Confirmation, ApiError> {
        let existing = TaskRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

        assert_owner(existing.creator, caller)?;

        TaskRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(Confirmation::new("Task deleted"))
    }
}

fn to_response(record: TaskRecord) -> TaskResponse {
    TaskResponse {
        id: record.id,
        name: record.name,
        status: record.status,
        project: record.project,
        creator: record.creator,
        created_at: record.created_at,
    }
}
