use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Well-known primary key for the backlog singleton.
///
/// The "at most one backlog" rule is enforced by storing the record
/// under this fixed key rather than by find-then-create.
pub const BACKLOG_ID: Uuid = Uuid::nil();

/// The singleton collection of task ids not assigned to any sprint.
///
/// Insertion order of `task_ids` is irrelevant for correctness but
/// preserved for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backlog {
    pub id: Uuid,

    pub task_ids: Vec<Uuid>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Backlog {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: BACKLOG_ID,
            task_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for Backlog {
    fn default() -> Self {
        Self::new()
    }
}
