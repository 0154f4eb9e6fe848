use crate::Result as DbErrorResult;
use crate::repositories::task_repository::task_from_row;

use tb_core::{Sprint, Task};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::DbError;

pub struct SprintRepository {
    pool: SqlitePool,
}

fn sprint_from_row(row: &SqliteRow, task_ids: Vec<Uuid>) -> DbErrorResult<Sprint> {
    let id: String = row.try_get("id")?;
    let start_date: i64 = row.try_get("start_date")?;
    let end_date: i64 = row.try_get("end_date")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Sprint {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in sprint.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        name: row.try_get("name")?,
        start_date: DateTime::from_timestamp(start_date, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in sprint.start_date".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        end_date: DateTime::from_timestamp(end_date, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in sprint.end_date".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        color: row.try_get("color")?,
        task_ids,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in sprint.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in sprint.updated_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}

impl SprintRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, sprint: &Sprint) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO sprints (id, name, start_date, end_date, color, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(sprint.id.to_string())
        .bind(&sprint.name)
        .bind(sprint.start_date.timestamp())
        .bind(sprint.end_date.timestamp())
        .bind(&sprint.color)
        .bind(sprint.created_at.timestamp())
        .bind(sprint.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Sprint>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, start_date, end_date, color, created_at, updated_at
                FROM sprints
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => {
                let task_ids = self.find_task_ids(id).await?;
                Ok(Some(sprint_from_row(&r, task_ids)?))
            }
            None => Ok(None),
        }
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Sprint>> {
        let rows = sqlx::query(
            r#"
                SELECT id, name, start_date, end_date, color, created_at, updated_at
                FROM sprints
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut sprints = Vec::with_capacity(rows.len());
        for row in &rows {
            let id: String = row.try_get("id")?;
            let id = Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in sprint.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
            let task_ids = self.find_task_ids(id).await?;
            sprints.push(sprint_from_row(row, task_ids)?);
        }

        Ok(sprints)
    }

    /// Update sprint fields. Task membership is managed separately via
    /// add_task / the join table, never through this method.
    pub async fn update(&self, sprint: &Sprint) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE sprints
                SET name = ?, start_date = ?, end_date = ?, color = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&sprint.name)
        .bind(sprint.start_date.timestamp())
        .bind(sprint.end_date.timestamp())
        .bind(&sprint.color)
        .bind(sprint.updated_at.timestamp())
        .bind(sprint.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM sprint_tasks WHERE sprint_id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        sqlx::query("DELETE FROM sprints WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Append a task reference at the end of the sprint's ordering.
    pub async fn add_task(&self, sprint_id: Uuid, task_id: Uuid) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO sprint_tasks (sprint_id, task_id, position)
                SELECT ?, ?, COALESCE(MAX(position) + 1, 0)
                FROM sprint_tasks
                WHERE sprint_id = ?
            "#,
        )
        .bind(sprint_id.to_string())
        .bind(task_id.to_string())
        .bind(sprint_id.to_string())
        .execute(&self.pool)
        .await?;

        sqlx::query("UPDATE sprints SET updated_at = ? WHERE id = ?")
            .bind(Utc::now().timestamp())
            .bind(sprint_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn contains_task(&self, sprint_id: Uuid, task_id: Uuid) -> DbErrorResult<bool> {
        let row = sqlx::query("SELECT 1 FROM sprint_tasks WHERE sprint_id = ? AND task_id = ?")
            .bind(sprint_id.to_string())
            .bind(task_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    /// True when any sprint references the task. Guards task deletion.
    pub async fn references_task(&self, task_id: Uuid) -> DbErrorResult<bool> {
        let row = sqlx::query("SELECT 1 FROM sprint_tasks WHERE task_id = ? LIMIT 1")
            .bind(task_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    pub async fn find_task_ids(&self, sprint_id: Uuid) -> DbErrorResult<Vec<Uuid>> {
        let rows = sqlx::query(
            r#"
                SELECT task_id
                FROM sprint_tasks
                WHERE sprint_id = ?
                ORDER BY position
            "#,
        )
        .bind(sprint_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                let task_id: String = row.try_get("task_id")?;
                Uuid::parse_str(&task_id).map_err(|e| DbError::Initialization {
                    message: format!("Invalid UUID in sprint_tasks.task_id: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })
            })
            .collect()
    }

    /// Resolve the sprint's task references to full task records,
    /// preserving insertion order.
    pub async fn find_tasks(&self, sprint_id: Uuid) -> DbErrorResult<Vec<Task>> {
        let rows = sqlx::query(
            r#"
                SELECT t.id, t.title, t.description, t.status, t.due_date, t.color,
                       t.created_at, t.updated_at
                FROM tasks t
                JOIN sprint_tasks st ON st.task_id = t.id
                WHERE st.sprint_id = ?
                ORDER BY st.position
            "#,
        )
        .bind(sprint_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(task_from_row).collect()
    }
}
