#![allow(dead_code)]

use tb_core::{Sprint, Task};

use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn create_test_task(title: &str) -> Task {
    Task::new(
        title.to_string(),
        Some("A test task".to_string()),
        None,
        Utc::now() + Duration::days(7),
        None,
    )
}

pub fn create_test_sprint(name: &str) -> Sprint {
    let start = Utc::now();
    Sprint::new(name.to_string(), start, start + Duration::days(14), None)
}
