use crate::{DbError, Result as DbErrorResult};

use tb_core::{Task, TaskStatus};

use std::panic::Location;
use std::str::FromStr;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct TaskRepository {
    pool: SqlitePool,
}

/// Map a `tasks` row (or a join against it) to a Task.
pub(crate) fn task_from_row(row: &SqliteRow) -> DbErrorResult<Task> {
    let id: String = row.try_get("id")?;
    let status: String = row.try_get("status")?;
    let due_date: i64 = row.try_get("due_date")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Task {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in task.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        status: TaskStatus::from_str(&status).map_err(|e| DbError::Initialization {
            message: format!("Invalid TaskStatus in task.status: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        due_date: DateTime::from_timestamp(due_date, 0).ok_or_else(|| DbError::Initialization {
            message: "Invalid timestamp in task.due_date".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
        color: row.try_get("color")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in task.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in task.updated_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}

impl TaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, task: &Task) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO tasks (id, title, description, status, due_date, color, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(task.id.to_string())
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status.as_str())
        .bind(task.due_date.timestamp())
        .bind(&task.color)
        .bind(task.created_at.timestamp())
        .bind(task.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Task>> {
        let row = sqlx::query(
            r#"
                SELECT id, title, description, status, due_date, color, created_at, updated_at
                FROM tasks
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| task_from_row(&r)).transpose()
    }

    /// List tasks, optionally filtered to one status and optionally
    /// sorted ascending by due date. Without a sort the store's
    /// natural order is returned.
    pub async fn find_all(
        &self,
        status: Option<TaskStatus>,
        sort_by_due_date: bool,
    ) -> DbErrorResult<Vec<Task>> {
        let order = if sort_by_due_date {
            "ORDER BY due_date ASC"
        } else {
            ""
        };

        let rows = match status {
            Some(status) => {
                sqlx::query(&format!(
                    r#"
                        SELECT id, title, description, status, due_date, color, created_at, updated_at
                        FROM tasks
                        WHERE status = ?
                        {order}
                    "#,
                ))
                .bind(status.as_str())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(&format!(
                    r#"
                        SELECT id, title, description, status, due_date, color, created_at, updated_at
                        FROM tasks
                        {order}
                    "#,
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.iter().map(task_from_row).collect()
    }

    pub async fn update(&self, task: &Task) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE tasks
                SET title = ?, description = ?, status = ?, due_date = ?, color = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status.as_str())
        .bind(task.due_date.timestamp())
        .bind(&task.color)
        .bind(task.updated_at.timestamp())
        .bind(task.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
