use crate::{DEFAULT_SPRINT_COLOR, Sprint};

use chrono::{Duration, Utc};

#[test]
fn test_sprint_new_starts_empty() {
    let start = Utc::now();
    let end = start + Duration::days(14);
    let sprint = Sprint::new("Sprint 1".to_string(), start, end, None);

    assert_eq!(sprint.name, "Sprint 1");
    assert_eq!(sprint.start_date, start);
    assert_eq!(sprint.end_date, end);
    assert_eq!(sprint.color, DEFAULT_SPRINT_COLOR);
    assert!(sprint.task_ids.is_empty());
}

#[test]
fn test_sprint_new_keeps_explicit_color() {
    let start = Utc::now();
    let sprint = Sprint::new(
        "Sprint 2".to_string(),
        start,
        start + Duration::days(7),
        Some("#4CAF50".to_string()),
    );
    assert_eq!(sprint.color, "#4CAF50");
}
