use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{MessageResponse, NewTask, TaskListResponse, TaskResponse, TaskUpdate},
    store::Store,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

/// Retrieves the authenticated user's tasks, newest first.
///
/// ## Responses:
/// - `200 OK`: `{"tasks": [Task]}`.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
#[get("")]
pub async fn get_tasks(
    store: web::Data<Store>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let tasks = store.list_tasks(user.user_id).await?;
    Ok(HttpResponse::Ok().json(TaskListResponse { tasks }))
}

/// Creates a new task for the authenticated user.
///
/// The owner is always the authenticated user; new tasks start with
/// `completed: false`.
///
/// ## Responses:
/// - `201 Created`: `{"task": Task}`.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `422 Unprocessable Entity`: If the title is empty or longer than 200 characters.
#[post("")]
pub async fn create_task(
    store: web::Data<Store>,
    user: AuthenticatedUser,
    task_data: web::Json<NewTask>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = store
        .create_task(user.user_id, task_data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(TaskResponse { task }))
}

/// Retrieves a specific task owned by the authenticated user.
///
/// ## Responses:
/// - `200 OK`: `{"task": Task}`.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If the task does not exist or belongs to another user.
#[get("/{id}")]
pub async fn get_task(
    store: web::Data<Store>,
    user: AuthenticatedUser,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let task = store.find_task(user.user_id, task_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(TaskResponse { task }))
}

/// Updates `completed` and/or `title` of a task owned by the authenticated user.
///
/// ## Responses:
/// - `200 OK`: `{"task": Task}` reflecting the change.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If the task does not exist or belongs to another user.
/// - `422 Unprocessable Entity`: If a supplied title is invalid.
#[put("/{id}")]
pub async fn update_task(
    store: web::Data<Store>,
    user: AuthenticatedUser,
    task_id: web::Path<Uuid>,
    task_data: web::Json<TaskUpdate>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = store
        .update_task(user.user_id, task_id.into_inner(), &task_data)
        .await?;

    Ok(HttpResponse::Ok().json(TaskResponse { task }))
}

/// Deletes a task owned by the authenticated user.
///
/// ## Responses:
/// - `200 OK`: `{"message": "Task deleted successfully"}`.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If the task does not exist or belongs to another user.
#[delete("/{id}")]
pub async fn delete_task(
    store: web::Data<Store>,
    user: AuthenticatedUser,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    store
        .delete_task(user.user_id, task_id.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Task deleted successfully")))
}
