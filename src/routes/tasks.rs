use crate::{
    auth::AuthenticatedUserId,
    error::AppError,
    models::{ListQuery, Task, TaskInput, TaskUpdate},
    store::TaskStore,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// The resource-scoped half of the authorization gate: a missing record is a
/// 404, a record owned by someone else is a 403. The two signals stay
/// distinct from the 401 the token gate produces.
fn authorize_owner(task: Option<Task>, user_id: i32) -> Result<Task, AppError> {
    match task {
        None => Err(AppError::NotFound("Task not found".into())),
        Some(task) if task.user_id != user_id => {
            Err(AppError::Forbidden("You do not own this task".into()))
        }
        Some(task) => Ok(task),
    }
}

/// Lists the authenticated user's tasks, newest first.
///
/// ## Query Parameters:
/// - `page` (optional): 1-based page number, default 1.
/// - `limit` (optional): page size, default 10, capped at 100.
///
/// ## Responses:
/// - `200 OK`: a JSON array of tasks owned by the caller.
/// - `401 Unauthorized`: missing or invalid token.
#[get("")]
pub async fn list_tasks(
    pool: web::Data<PgPool>,
    query: web::Query<ListQuery>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let tasks = TaskStore::list_by_owner(&pool, user.0, query.limit(), query.offset()).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a new task owned by the authenticated user.
///
/// ## Request Body:
/// - `title`: required, non-blank, at most 200 characters.
/// - `description` (optional): at most 1000 characters, defaults to empty.
/// - `status` (optional): completion flag, defaults to false.
///
/// ## Responses:
/// - `201 Created`: the created task.
/// - `400 Bad Request`: validation failure.
/// - `401 Unauthorized`: missing or invalid token.
#[post("")]
pub async fn create_task(
    pool: web::Data<PgPool>,
    task_data: web::Json<TaskInput>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = Task::new(task_data.into_inner(), user.0);
    let created = TaskStore::create(&pool, &task).await?;

    Ok(HttpResponse::Created().json(created))
}

/// Retrieves a single task by id.
///
/// ## Responses:
/// - `200 OK`: the task.
/// - `401 Unauthorized`: missing or invalid token.
/// - `403 Forbidden`: the task belongs to another account.
/// - `404 Not Found`: no such task.
#[get("/{id}")]
pub async fn get_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let task = TaskStore::find_by_id(&pool, task_id.into_inner()).await?;
    let task = authorize_owner(task, user.0)?;

    Ok(HttpResponse::Ok().json(task))
}

/// Applies a partial update to a task the caller owns.
///
/// Any subset of `title`, `description`, and `status` may be supplied;
/// absent fields keep their stored values. Ownership is checked before the
/// mutation runs.
///
/// ## Responses:
/// - `200 OK`: the post-update task.
/// - `400 Bad Request`: validation failure.
/// - `401 Unauthorized`: missing or invalid token.
/// - `403 Forbidden`: the task belongs to another account.
/// - `404 Not Found`: no such task.
#[put("/{id}")]
pub async fn update_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
    task_data: web::Json<TaskUpdate>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task_uuid = task_id.into_inner();
    let existing = TaskStore::find_by_id(&pool, task_uuid).await?;
    authorize_owner(existing, user.0)?;

    let updated = TaskStore::update(&pool, task_uuid, &task_data).await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// Permanently deletes a task the caller owns.
///
/// ## Responses:
/// - `200 OK`: `{"id": <deleted id>}`.
/// - `401 Unauthorized`: missing or invalid token.
/// - `403 Forbidden`: the task belongs to another account.
/// - `404 Not Found`: no such task.
#[delete("/{id}")]
pub async fn delete_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let task_uuid = task_id.into_inner();
    let existing = TaskStore::find_by_id(&pool, task_uuid).await?;
    authorize_owner(existing, user.0)?;

    TaskStore::delete(&pool, task_uuid).await?;

    Ok(HttpResponse::Ok().json(json!({ "id": task_uuid })))
}
