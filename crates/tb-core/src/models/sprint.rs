use crate::DEFAULT_SPRINT_COLOR;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, time-boxed collection of task references.
///
/// `task_ids` is an ordered set: insertion order is preserved and
/// duplicates are forbidden. Invariant: `end_date >= start_date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprint {
    pub id: Uuid,

    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub color: String,

    pub task_ids: Vec<Uuid>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sprint {
    pub fn new(
        name: String,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        color: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            start_date,
            end_date,
            color: color.unwrap_or_else(|| DEFAULT_SPRINT_COLOR.to_string()),
            task_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
