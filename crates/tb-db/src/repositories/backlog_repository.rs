use crate::{DbError, Result as DbErrorResult};
use crate::repositories::task_repository::task_from_row;

use tb_core::{BACKLOG_ID, Backlog, Task};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct BacklogRepository {
    pool: SqlitePool,
}

impl BacklogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find(&self) -> DbErrorResult<Option<Backlog>> {
        let row = sqlx::query("SELECT id, created_at, updated_at FROM backlogs WHERE id = ?")
            .bind(BACKLOG_ID.to_string())
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let created_at: i64 = row.try_get("created_at")?;
        let updated_at: i64 = row.try_get("updated_at")?;
        let task_ids = self.find_task_ids().await?;

        Ok(Some(Backlog {
            id: BACKLOG_ID,
            task_ids,
            created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in backlog.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in backlog.updated_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        }))
    }

    pub async fn create(&self, backlog: &Backlog) -> DbErrorResult<()> {
        sqlx::query("INSERT INTO backlogs (id, created_at, updated_at) VALUES (?, ?, ?)")
            .bind(backlog.id.to_string())
            .bind(backlog.created_at.timestamp())
            .bind(backlog.updated_at.timestamp())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Fetch the singleton, creating an empty one under the well-known
    /// id if it does not exist yet.
    pub async fn find_or_create(&self) -> DbErrorResult<Backlog> {
        if let Some(backlog) = self.find().await? {
            return Ok(backlog);
        }

        let backlog = Backlog::new();
        // INSERT OR IGNORE: a concurrent first access must not fail on
        // the fixed primary key.
        sqlx::query("INSERT OR IGNORE INTO backlogs (id, created_at, updated_at) VALUES (?, ?, ?)")
            .bind(backlog.id.to_string())
            .bind(backlog.created_at.timestamp())
            .bind(backlog.updated_at.timestamp())
            .execute(&self.pool)
            .await?;

        Ok(backlog)
    }

    /// Append a task id, a no-op when the id is already present.
    pub async fn add_task(&self, task_id: Uuid) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT OR IGNORE INTO backlog_tasks (backlog_id, task_id, position)
                SELECT ?, ?, COALESCE(MAX(position) + 1, 0)
                FROM backlog_tasks
                WHERE backlog_id = ?
            "#,
        )
        .bind(BACKLOG_ID.to_string())
        .bind(task_id.to_string())
        .bind(BACKLOG_ID.to_string())
        .execute(&self.pool)
        .await?;

        self.touch().await
    }

    pub async fn remove_task(&self, task_id: Uuid) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM backlog_tasks WHERE backlog_id = ? AND task_id = ?")
            .bind(BACKLOG_ID.to_string())
            .bind(task_id.to_string())
            .execute(&self.pool)
            .await?;

        self.touch().await
    }

    pub async fn contains_task(&self, task_id: Uuid) -> DbErrorResult<bool> {
        let row = sqlx::query("SELECT 1 FROM backlog_tasks WHERE backlog_id = ? AND task_id = ?")
            .bind(BACKLOG_ID.to_string())
            .bind(task_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    pub async fn find_task_ids(&self) -> DbErrorResult<Vec<Uuid>> {
        let rows = sqlx::query(
            r#"
                SELECT task_id
                FROM backlog_tasks
                WHERE backlog_id = ?
                ORDER BY position
            "#,
        )
        .bind(BACKLOG_ID.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                let task_id: String = row.try_get("task_id")?;
                Uuid::parse_str(&task_id).map_err(|e| DbError::Initialization {
                    message: format!("Invalid UUID in backlog_tasks.task_id: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })
            })
            .collect()
    }

    /// Resolve the backlog's task references to full task records.
    pub async fn find_tasks(&self) -> DbErrorResult<Vec<Task>> {
        let rows = sqlx::query(
            r#"
                SELECT t.id, t.title, t.description, t.status, t.due_date, t.color,
                       t.created_at, t.updated_at
                FROM tasks t
                JOIN backlog_tasks bt ON bt.task_id = t.id
                WHERE bt.backlog_id = ?
                ORDER BY bt.position
            "#,
        )
        .bind(BACKLOG_ID.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(task_from_row).collect()
    }

    async fn touch(&self) -> DbErrorResult<()> {
        sqlx::query("UPDATE backlogs SET updated_at = ? WHERE id = ?")
            .bind(Utc::now().timestamp())
            .bind(BACKLOG_ID.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
