//! Project repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Project record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProjectRecord {
    pub id: Uuid,
    pub name: String,
    pub creator: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Fields applied by an update; absent fields keep their stored values
#[derive(Debug, Clone, Default)]
pub struct UpdateProject {
    pub name: Option<String>,
}

/// Project repository for database operations
pub struct ProjectRepository;

impl ProjectRepository {
    /// Create a new project stamped with its creator
    pub async fn create(pool: &PgPool, name: &str, creator: Uuid) -> Result<ProjectRecord> {
        let record = sqlx::query_as::<_, ProjectRecord>(
            r#"
            INSERT INTO projects (name, creator)
            VALUES ($1, $2)
            RETURNING id, name, creator, created_at
            "#,
        )
        .bind(name)
        .bind(creator)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get all projects created by a user, in insertion order
    pub async fn list_by_creator(pool: &PgPool, creator: Uuid) -> Result<Vec<ProjectRecord>> {
        let records = sqlx::query_as::<_, ProjectRecord>(
            r#"
            SELECT id, name, creator, created_at
            FROM projects
            WHERE creator = $1
            ORDER BY created_at
            "#,
        )
        .bind(creator)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get a user's projects whose name exactly matches the filter
    pub async fn list_by_creator_and_name(
        pool: &PgPool,
        creator: Uuid,
        name: &str,
    ) -> Result<Vec<ProjectRecord>> {
        let records = sqlx::query_as::<_, ProjectRecord>(
            r#"
            SELECT id, name, creator, created_at
            FROM projects
            WHERE creator = $1 AND name = $2
            ORDER BY created_at
            "#,
        )
        .bind(creator)
        .bind(name)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Find a project by id
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<ProjectRecord>> {
        let record = sqlx::query_as::<_, ProjectRecord>(
            r#"
            SELECT id, name, creator, created_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Apply an update to a project, returning the updated row
    ///
    /// Single-statement UPDATE ... RETURNING: the read-modify-write is
    /// atomic at the row level, last write wins between concurrent callers.
    pub async fn update(pool: &PgPool, id: Uuid, updates: UpdateProject) -> Result<ProjectRecord> {
        let record = sqlx::query_as::<_, ProjectRecord>(
            r#"
            UPDATE projects SET
                name = COALESCE($2, name)
            WHERE id = $1
            RETURNING id, name, creator, created_at
            "#,
        )
        .bind(id)
        .bind(updates.name)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Delete a project by id
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
