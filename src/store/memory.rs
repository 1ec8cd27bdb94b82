use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

use super::{task_not_found, user_not_found};
use crate::error::AppError;
use crate::models::{Task, TaskUpdate, User};

/// In-memory backend. All data is lost on restart.
///
/// Users are keyed by email, so the uniqueness check and the insert happen under
/// one write lock.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, User>>,
    tasks: RwLock<HashMap<Uuid, Task>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, AppError> {
        let mut users = self.users.write();
        if users.contains_key(email) {
            return Err(AppError::DuplicateEmail);
        }
        let user = User::new(email, password_hash);
        users.insert(email.to_string(), user.clone());
        Ok(user)
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<User, AppError> {
        self.users
            .read()
            .get(email)
            .cloned()
            .ok_or_else(user_not_found)
    }

    pub async fn create_task(&self, task: Task) -> Result<Task, AppError> {
        self.tasks.write().insert(task.id, task.clone());
        Ok(task)
    }

    pub async fn list_tasks(&self, user_id: Uuid) -> Result<Vec<Task>, AppError> {
        let mut tasks: Vec<Task> = self
            .tasks
            .read()
            .values()
            .filter(|task| task.user_id == user_id)
            .cloned()
            .collect();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    pub async fn find_task(&self, user_id: Uuid, task_id: Uuid) -> Result<Task, AppError> {
        self.tasks
            .read()
            .get(&task_id)
            .filter(|task| task.user_id == user_id)
            .cloned()
            .ok_or_else(task_not_found)
    }

    pub async fn update_task(
        &self,
        user_id: Uuid,
        task_id: Uuid,
        update: &TaskUpdate,
    ) -> Result<Task, AppError> {
        let mut tasks = self.tasks.write();
        match tasks.get_mut(&task_id) {
            Some(task) if task.user_id == user_id => {
                task.apply(update);
                Ok(task.clone())
            }
            _ => Err(task_not_found()),
        }
    }

    pub async fn delete_task(&self, user_id: Uuid, task_id: Uuid) -> Result<(), AppError> {
        let mut tasks = self.tasks.write();
        let owned = tasks
            .get(&task_id)
            .map_or(false, |task| task.user_id == user_id);
        if !owned {
            return Err(task_not_found());
        }
        tasks.remove(&task_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewTask;
    use futures::executor::block_on;
    use std::sync::Arc;

    fn task_for(user_id: Uuid, title: &str) -> Task {
        Task::new(
            NewTask {
                title: title.to_string(),
            },
            user_id,
        )
    }

    #[actix_rt::test]
    async fn test_duplicate_email_rejected() {
        let store = MemoryStore::new();
        let first = store.create_user("alice@example.com", "hash-1").await.unwrap();

        assert!(matches!(
            store.create_user("alice@example.com", "hash-2").await,
            Err(AppError::DuplicateEmail)
        ));
        let found = store.find_user_by_email("alice@example.com").await.unwrap();
        assert_eq!(found.id, first.id);
        assert_eq!(found.password_hash, "hash-1");
    }

    #[actix_rt::test]
    async fn test_email_match_is_case_sensitive() {
        let store = MemoryStore::new();
        store.create_user("alice@example.com", "hash").await.unwrap();

        assert!(store.create_user("Alice@example.com", "hash").await.is_ok());
        assert!(matches!(
            store.find_user_by_email("ALICE@example.com").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_concurrent_registrations_single_winner() {
        let store = Arc::new(MemoryStore::new());

        let results: Vec<Result<User, AppError>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|i| {
                    let store = Arc::clone(&store);
                    scope.spawn(move || {
                        block_on(store.create_user("race@example.com", &format!("hash-{}", i)))
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, AppError::DuplicateEmail)));
    }

    #[actix_rt::test]
    async fn test_tasks_are_owner_scoped() {
        let store = MemoryStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let task = store.create_task(task_for(alice, "alice's task")).await.unwrap();

        assert!(store.list_tasks(bob).await.unwrap().is_empty());
        assert!(matches!(
            store.find_task(bob, task.id).await,
            Err(AppError::NotFound(_))
        ));
        let update = TaskUpdate {
            title: None,
            completed: Some(true),
        };
        assert!(matches!(
            store.update_task(bob, task.id, &update).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            store.delete_task(bob, task.id).await,
            Err(AppError::NotFound(_))
        ));

        let untouched = store.find_task(alice, task.id).await.unwrap();
        assert!(!untouched.completed);
    }

    #[actix_rt::test]
    async fn test_update_and_delete() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();
        let task = store.create_task(task_for(owner, "buy milk")).await.unwrap();

        let updated = store
            .update_task(
                owner,
                task.id,
                &TaskUpdate {
                    title: None,
                    completed: Some(true),
                },
            )
            .await
            .unwrap();
        assert!(updated.completed);
        assert_eq!(updated.title, "buy milk");

        store.delete_task(owner, task.id).await.unwrap();
        assert!(matches!(
            store.delete_task(owner, task.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(store.list_tasks(owner).await.unwrap().is_empty());
    }
}
