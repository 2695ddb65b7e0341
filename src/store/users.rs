use sqlx::PgPool;

use crate::models::User;

/// Account store: create and look up account records.
///
/// Emails are expected to arrive already normalized (trimmed + lowercased);
/// a unique index on the column backs up the pre-insert duplicate check.
pub struct UserStore;

impl UserStore {
    pub async fn create(
        pool: &PgPool,
        f_name: &str,
        l_name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (f_name, l_name, email, password_hash)
             VALUES ($1, $2, $3, $4)
             RETURNING id, f_name, l_name, email, password_hash, created_at, updated_at",
        )
        .bind(f_name)
        .bind(l_name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT id, f_name, l_name, email, password_hash, created_at, updated_at
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT id, f_name, l_name, email, password_hash, created_at, updated_at
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
