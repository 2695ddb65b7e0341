use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An account row as stored in the database.
///
/// Deliberately not `Serialize`: the password hash must never reach a
/// response body. API responses use `UserSummary` instead.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub f_name: String,
    pub l_name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The client-facing view of an account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSummary {
    pub id: i32,
    pub f_name: String,
    pub l_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            f_name: user.f_name,
            l_name: user.l_name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
