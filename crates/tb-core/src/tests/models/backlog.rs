use crate::{BACKLOG_ID, Backlog};

#[test]
fn test_backlog_new_uses_well_known_id() {
    let a = Backlog::new();
    let b = Backlog::new();
    assert_eq!(a.id, BACKLOG_ID);
    assert_eq!(a.id, b.id);
    assert!(a.task_ids.is_empty());
}
