#![allow(dead_code)]

//! Test infrastructure for tb-server API tests

use tb_server::AppState;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use uuid::Uuid;

/// Create a test pool with in-memory SQLite.
///
/// One connection only: every connection to `:memory:` is a separate
/// database, so a larger pool would scatter the schema.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/tb-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
    }
}

/// Insert a task directly, bypassing the API (not in the backlog)
pub async fn create_test_task(pool: &SqlitePool, title: &str, status: &str, due_date: i64) -> Uuid {
    let task_id = Uuid::new_v4();
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        r#"
            INSERT INTO tasks (id, title, description, status, due_date, color, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(task_id.to_string())
    .bind(title)
    .bind("A test task")
    .bind(status)
    .bind(due_date)
    .bind("#4A90E2")
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test task");

    task_id
}

/// Insert a sprint directly, bypassing the API (empty task set)
pub async fn create_test_sprint(
    pool: &SqlitePool,
    name: &str,
    start_date: i64,
    end_date: i64,
) -> Uuid {
    let sprint_id = Uuid::new_v4();
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        r#"
            INSERT INTO sprints (id, name, start_date, end_date, color, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(sprint_id.to_string())
    .bind(name)
    .bind(start_date)
    .bind(end_date)
    .bind("#F5A623")
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test sprint");

    sprint_id
}
