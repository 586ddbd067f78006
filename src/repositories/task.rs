//! Task repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Task record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TaskRecord {
    pub id: Uuid,
    pub name: String,
    pub status: bool,
    pub project: Uuid,
    pub creator: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Fields applied by an update
///
/// `status` is always written: every task update carries an explicit
/// status. `name` keeps its stored value when absent.
#[derive(Debug, Clone)]
pub struct UpdateTask {
    pub name: Option<String>,
    pub status: bool,
}

/// Task repository for database operations
pub struct TaskRepository;

impl TaskRepository {
    /// Create a new task stamped with its creator
    pub async fn create(
        pool: &PgPool,
        name: &str,
        project: Uuid,
        creator: Uuid,
    ) -> Result<TaskRecord> {
        let record = sqlx::query_as::<_, TaskRecord>(
            r#"
            INSERT INTO tasks (name, project, creator)
            VALUES ($1, $2, $3)
            RETURNING id, name, status, project, creator, created_at
            "#,
        )
        .bind(name)
        .bind(project)
        .bind(creator)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get a user's tasks within one project, in insertion order
    pub async fn list_by_creator_and_project(
        pool: &PgPool,
        creator: Uuid,
        project: Uuid,
    ) -> Result<Vec<TaskRecord>> {
        let records = sqlx::query_as::<_, TaskRecord>(
            r#"
            SELECT id, name, status, project, creator, created_at
            FROM tasks
            WHERE creator = $1 AND project = $2
            ORDER BY created_at
            "#,
        )
        .bind(creator)
        .bind(project)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Find a task by id
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<TaskRecord>> {
        let record = sqlx::query_as::<_, TaskRecord>(
            r#"
            SELECT id, name, status, project, creator, created_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Apply an update to a task, returning the updated row
    pub async fn update(pool: &PgPool, id: Uuid, updates: UpdateTask) -> Result<TaskRecord> {
        let record = sqlx::query_as::<_, TaskRecord>(
            r#"
            UPDATE tasks SET
                name = COALESCE($2, name),
                status = $3
            WHERE id = $1
            RETURNING id, name, status, project, creator, created_at
            "#,
        )
        .bind(id)
        .bind(updates.name)
        .bind(updates.status)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Delete a task by id
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
