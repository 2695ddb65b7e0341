use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Task, TaskUpdate};

/// Task store: owner-scoped listing plus single-row CRUD.
pub struct TaskStore;

impl TaskStore {
    pub async fn create(pool: &PgPool, task: &Task) -> Result<Task, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (id, title, description, status, user_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, title, description, status, created_at, updated_at, user_id",
        )
        .bind(task.id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status)
        .bind(task.user_id)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            "SELECT id, title, description, status, created_at, updated_at, user_id
             FROM tasks WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Lists tasks owned by `owner_id`, newest first, with a bounded page.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: i32,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            "SELECT id, title, description, status, created_at, updated_at, user_id
             FROM tasks WHERE user_id = $1
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3",
        )
        .bind(owner_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Applies a partial update; absent fields keep their stored values.
    /// `updated_at` is refreshed on every call.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        changes: &TaskUpdate,
    ) -> Result<Task, sqlx::Error> {
        let title = changes.title.as_ref().map(|t| t.trim().to_string());
        sqlx::query_as::<_, Task>(
            "UPDATE tasks
             SET title = COALESCE($1, title),
                 description = COALESCE($2, description),
                 status = COALESCE($3, status),
                 updated_at = now()
             WHERE id = $4
             RETURNING id, title, description, status, created_at, updated_at, user_id",
        )
        .bind(title)
        .bind(&changes.description)
        .bind(changes.status)
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// Deletes the task and reports how many rows went away (0 or 1).
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
