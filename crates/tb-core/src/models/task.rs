use crate::{DEFAULT_TASK_COLOR, TaskStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unit of work with a status, title, description, and due date.
///
/// A task id is referenced by at most one of {the backlog, a single
/// sprint} at a time. Membership lives in the stores, not on the task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,

    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub due_date: DateTime<Utc>,
    pub color: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(
        title: String,
        description: Option<String>,
        status: Option<TaskStatus>,
        due_date: DateTime<Utc>,
        color: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description: description.unwrap_or_default(),
            status: status.unwrap_or_default(),
            due_date,
            color: color.unwrap_or_else(|| DEFAULT_TASK_COLOR.to_string()),
            created_at: now,
            updated_at: now,
        }
    }
}
