use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Default number of tasks per page when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;
/// Upper bound on caller-supplied page sizes to keep scans bounded.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Rejects values that are empty once surrounding whitespace is stripped.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

/// Input structure for creating a task.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    /// The title of the task.
    /// Required, at most 200 characters, and not blank.
    #[validate(length(min = 1, max = 200), custom = "not_blank")]
    pub title: String,

    /// An optional description for the task.
    /// Maximum length of 1000 characters if provided; defaults to empty.
    #[validate(length(max = 1000))]
    pub description: Option<String>,

    /// The completion status of the task. Defaults to false.
    pub status: Option<bool>,
}

/// Partial update for an existing task. Absent fields are left untouched.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskUpdate {
    #[validate(length(min = 1, max = 200), custom = "not_blank")]
    pub title: Option<String>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    pub status: Option<bool>,
}

/// Represents a task entity as stored in the database and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique identifier for the task (UUID v4).
    pub id: Uuid,
    /// The title of the task.
    pub title: String,
    /// Free-form description; empty string when none was supplied.
    pub description: String,
    /// Completion flag.
    pub status: bool,
    /// Timestamp of when the task was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last update to the task.
    pub updated_at: DateTime<Utc>,
    /// Identifier of the account that owns the task. Set at creation,
    /// immutable thereafter.
    pub user_id: i32,
}

/// Pagination parameters for listing tasks.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListQuery {
    /// 1-based page number. Defaults to 1; values below 1 are treated as 1.
    pub page: Option<i64>,
    /// Page size. Defaults to `DEFAULT_PAGE_SIZE`, capped at `MAX_PAGE_SIZE`.
    pub limit: Option<i64>,
}

impl ListQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }

    pub fn offset(&self) -> i64 {
        // Saturate so an absurd page number cannot overflow into a negative
        // OFFSET; the query just returns an empty page.
        (self.page() - 1).saturating_mul(self.limit())
    }
}

impl Task {
    /// Creates a new `Task` from `TaskInput` and the owner's account id.
    /// The title is trimmed, a missing description becomes the empty string,
    /// and a missing status defaults to false.
    pub fn new(input: TaskInput, owner_id: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: input.title.trim().to_string(),
            description: input.description.unwrap_or_default(),
            status: input.status.unwrap_or(false),
            created_at: now,
            updated_at: now,
            user_id: owner_id,
        }
    }
}
