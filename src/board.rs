//! Board Bucketing
//!
//! Splits the flat task list into the three status columns and resolves
//! drop targets back into a status change plus an insertion point.

use board_dnd::DropTarget;

use crate::models::{Task, TaskStatus};

/// Tasks grouped per status column, in the order they arrived
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardColumns {
    columns: [Vec<Task>; 3],
}

impl BoardColumns {
    pub fn tasks(&self, status: TaskStatus) -> &[Task] {
        &self.columns[status.column_index()]
    }

    pub fn count(&self, status: TaskStatus) -> usize {
        self.columns[status.column_index()].len()
    }
}

/// Buckets tasks into columns without reordering them
pub fn bucket_tasks(tasks: &[Task]) -> BoardColumns {
    let mut board = BoardColumns::default();
    for task in tasks {
        board.columns[task.status.column_index()].push(task.clone());
    }
    board
}

/// Resolves a drop target against the current layout.
///
/// Returns the status the dragged card takes on and the id of the card it
/// lands in front of, `None` meaning the end of the column. Slot positions
/// past the column tail also append.
pub fn drop_destination(board: &BoardColumns, target: DropTarget) -> Option<(TaskStatus, Option<i32>)> {
    let status = TaskStatus::from_column_index(target.column())?;
    let before = match target {
        DropTarget::Column(_) => None,
        DropTarget::Slot { position, .. } => board.tasks(status).get(position).map(|t| t.id),
    };
    Some((status, before))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use chrono::{TimeZone, Utc};

    fn task(id: i32, status: TaskStatus) -> Task {
        let date = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        Task {
            id,
            title: format!("task {id}"),
            description: String::new(),
            priority: Priority::Medium,
            status,
            start_date: date,
            end_date: date + chrono::Duration::days(7),
            media: None,
            responsible: vec![],
            created_at: date,
            updated_at: date,
        }
    }

    #[test]
    fn test_bucket_preserves_arrival_order() {
        let tasks = vec![
            task(1, TaskStatus::Done),
            task(2, TaskStatus::Todo),
            task(3, TaskStatus::Todo),
            task(4, TaskStatus::InProgress),
            task(5, TaskStatus::Todo),
        ];
        let board = bucket_tasks(&tasks);
        let ids: Vec<i32> = board.tasks(TaskStatus::Todo).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 5]);
        assert_eq!(board.count(TaskStatus::InProgress), 1);
        assert_eq!(board.count(TaskStatus::Done), 1);
    }

    #[test]
    fn test_bucket_empty_input() {
        let board = bucket_tasks(&[]);
        for status in TaskStatus::ALL {
            assert_eq!(board.count(status), 0);
        }
    }

    #[test]
    fn test_drop_on_column_appends() {
        let board = bucket_tasks(&[task(1, TaskStatus::Todo)]);
        let dest = drop_destination(&board, DropTarget::Column(2));
        assert_eq!(dest, Some((TaskStatus::Done, None)));
    }

    #[test]
    fn test_drop_on_slot_lands_before_occupant() {
        let board = bucket_tasks(&[
            task(1, TaskStatus::Todo),
            task(2, TaskStatus::Todo),
            task(3, TaskStatus::Todo),
        ]);
        let dest = drop_destination(&board, DropTarget::Slot { column: 0, position: 1 });
        assert_eq!(dest, Some((TaskStatus::Todo, Some(2))));
    }

    #[test]
    fn test_drop_past_column_tail_appends() {
        let board = bucket_tasks(&[task(1, TaskStatus::InProgress)]);
        let dest = drop_destination(&board, DropTarget::Slot { column: 1, position: 9 });
        assert_eq!(dest, Some((TaskStatus::InProgress, None)));
    }

    #[test]
    fn test_drop_on_unknown_column_is_ignored() {
        let board = bucket_tasks(&[]);
        assert_eq!(drop_destination(&board, DropTarget::Column(7)), None);
    }
}
