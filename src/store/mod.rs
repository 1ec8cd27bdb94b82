//! Persistence for users and tasks.
//!
//! `Store` dispatches to PostgreSQL in production or to an in-memory backend
//! when no `DATABASE_URL` is configured (local development and tests). Every
//! task operation takes the owning user id as a mandatory filter.

pub mod memory;
pub mod postgres;

use std::sync::Arc;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{NewTask, Task, TaskUpdate, User};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Clone)]
pub enum Store {
    Postgres(PgStore),
    Memory(Arc<MemoryStore>),
}

impl Store {
    /// Connects to PostgreSQL and applies pending migrations.
    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        Ok(Self::Postgres(PgStore::connect(database_url).await?))
    }

    pub fn in_memory() -> Self {
        Self::Memory(Arc::new(MemoryStore::new()))
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }

    // Users

    /// Inserts a user, failing with `DuplicateEmail` if the email is taken.
    pub async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, AppError> {
        match self {
            Self::Postgres(db) => db.create_user(email, password_hash).await,
            Self::Memory(db) => db.create_user(email, password_hash).await,
        }
    }

    /// Looks up a user by exact email, failing with `NotFound`.
    pub async fn find_user_by_email(&self, email: &str) -> Result<User, AppError> {
        match self {
            Self::Postgres(db) => db.find_user_by_email(email).await,
            Self::Memory(db) => db.find_user_by_email(email).await,
        }
    }

    // Tasks

    pub async fn create_task(&self, user_id: Uuid, input: NewTask) -> Result<Task, AppError> {
        match self {
            Self::Postgres(db) => db.create_task(Task::new(input, user_id)).await,
            Self::Memory(db) => db.create_task(Task::new(input, user_id)).await,
        }
    }

    /// Tasks owned by `user_id`, newest first.
    pub async fn list_tasks(&self, user_id: Uuid) -> Result<Vec<Task>, AppError> {
        match self {
            Self::Postgres(db) => db.list_tasks(user_id).await,
            Self::Memory(db) => db.list_tasks(user_id).await,
        }
    }

    pub async fn find_task(&self, user_id: Uuid, task_id: Uuid) -> Result<Task, AppError> {
        match self {
            Self::Postgres(db) => db.find_task(user_id, task_id).await,
            Self::Memory(db) => db.find_task(user_id, task_id).await,
        }
    }

    pub async fn update_task(
        &self,
        user_id: Uuid,
        task_id: Uuid,
        update: &TaskUpdate,
    ) -> Result<Task, AppError> {
        match self {
            Self::Postgres(db) => db.update_task(user_id, task_id, update).await,
            Self::Memory(db) => db.update_task(user_id, task_id, update).await,
        }
    }

    pub async fn delete_task(&self, user_id: Uuid, task_id: Uuid) -> Result<(), AppError> {
        match self {
            Self::Postgres(db) => db.delete_task(user_id, task_id).await,
            Self::Memory(db) => db.delete_task(user_id, task_id).await,
        }
    }
}

pub(crate) fn task_not_found() -> AppError {
    AppError::NotFound("Task not found".into())
}

pub(crate) fn user_not_found() -> AppError {
    AppError::NotFound("User not found".into())
}
