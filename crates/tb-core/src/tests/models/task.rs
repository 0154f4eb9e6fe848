use crate::{DEFAULT_TASK_COLOR, Task, TaskStatus};

use chrono::Utc;

#[test]
fn test_task_new_applies_defaults() {
    let due = Utc::now();
    let task = Task::new("Write report".to_string(), None, None, due, None);

    assert_eq!(task.title, "Write report");
    assert_eq!(task.description, "");
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.due_date, due);
    assert_eq!(task.color, DEFAULT_TASK_COLOR);
    assert_eq!(task.created_at, task.updated_at);
}

#[test]
fn test_task_new_keeps_explicit_fields() {
    let due = Utc::now();
    let task = Task::new(
        "Write report".to_string(),
        Some("Quarterly numbers".to_string()),
        Some(TaskStatus::InProgress),
        due,
        Some("#FF5733".to_string()),
    );

    assert_eq!(task.description, "Quarterly numbers");
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.color, "#FF5733");
}

#[test]
fn test_task_new_unique_ids() {
    let due = Utc::now();
    let a = Task::new("A".to_string(), None, None, due, None);
    let b = Task::new("B".to_string(), None, None, due, None);
    assert_ne!(a.id, b.id);
}
