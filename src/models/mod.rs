pub mod task;
pub mod user;

use serde::{Deserialize, Serialize};

pub use task::{NewTask, Task, TaskListResponse, TaskResponse, TaskUpdate};
pub use user::User;

/// Plain acknowledgement body, e.g. after registration or deletion.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
