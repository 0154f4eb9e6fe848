use crate::TaskStatus;

use std::str::FromStr;

#[test]
fn test_task_status_as_str() {
    assert_eq!(TaskStatus::Pending.as_str(), "pending");
    assert_eq!(TaskStatus::InProgress.as_str(), "in-progress");
    assert_eq!(TaskStatus::Done.as_str(), "done");
}

#[test]
fn test_task_status_from_str() {
    assert_eq!(
        TaskStatus::from_str("pending").unwrap(),
        TaskStatus::Pending
    );
    assert_eq!(
        TaskStatus::from_str("in-progress").unwrap(),
        TaskStatus::InProgress
    );
    assert_eq!(TaskStatus::from_str("done").unwrap(), TaskStatus::Done);
    assert!(TaskStatus::from_str("completado").is_err());
    assert!(TaskStatus::from_str("").is_err());
}

#[test]
fn test_task_status_default() {
    assert_eq!(TaskStatus::default(), TaskStatus::Pending);
}
