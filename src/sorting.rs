//! Task List Sorting
//!
//! Column sort state for the table view. Reselecting the active column
//! flips the direction; picking a new one starts ascending again.

use std::cmp::Ordering;

use crate::models::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Title,
    Priority,
    Status,
    StartDate,
    EndDate,
}

impl SortColumn {
    pub const ALL: [SortColumn; 5] = [
        SortColumn::Title,
        SortColumn::Priority,
        SortColumn::Status,
        SortColumn::StartDate,
        SortColumn::EndDate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Title => "Title",
            SortColumn::Priority => "Priority",
            SortColumn::Status => "Status",
            SortColumn::StartDate => "Start",
            SortColumn::EndDate => "Due",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSort {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for TaskSort {
    fn default() -> Self {
        // Due-soonest first when nothing was picked yet
        TaskSort { column: SortColumn::EndDate, direction: SortDirection::Ascending }
    }
}

impl TaskSort {
    pub fn toggled(self, column: SortColumn) -> TaskSort {
        let direction = if self.column == column {
            match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            }
        } else {
            SortDirection::Ascending
        };
        TaskSort { column, direction }
    }

    pub fn indicator(self, column: SortColumn) -> &'static str {
        if self.column != column {
            return "";
        }
        match self.direction {
            SortDirection::Ascending => " \u{25b4}",
            SortDirection::Descending => " \u{25be}",
        }
    }
}

fn compare(a: &Task, b: &Task, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortColumn::Priority => a.priority.rank().cmp(&b.priority.rank()),
        SortColumn::Status => a.status.as_str().cmp(b.status.as_str()),
        SortColumn::StartDate => a.start_date.cmp(&b.start_date),
        SortColumn::EndDate => a.end_date.cmp(&b.end_date),
    }
}

/// Stable sort, so equal keys keep their backend order
pub fn sort_tasks(tasks: &mut [Task], sort: TaskSort) {
    tasks.sort_by(|a, b| {
        let ord = compare(a, b, sort.column);
        match sort.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, TaskStatus};
    use chrono::{Duration, TimeZone, Utc};

    fn task(id: i32, title: &str, priority: Priority, due_in_days: i64) -> Task {
        let date = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        Task {
            id,
            title: title.to_string(),
            description: String::new(),
            priority,
            status: TaskStatus::Todo,
            start_date: date,
            end_date: date + Duration::days(due_in_days),
            media: None,
            responsible: vec![],
            created_at: date,
            updated_at: date,
        }
    }

    fn ids(tasks: &[Task]) -> Vec<i32> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_priority_ascending_ranks_high_first() {
        let mut tasks = vec![
            task(1, "a", Priority::Low, 1),
            task(2, "b", Priority::High, 1),
            task(3, "c", Priority::Medium, 1),
        ];
        sort_tasks(&mut tasks, TaskSort { column: SortColumn::Priority, direction: SortDirection::Ascending });
        assert_eq!(ids(&tasks), vec![2, 3, 1]);
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let mut tasks = vec![
            task(1, "zebra", Priority::Medium, 1),
            task(2, "Apple", Priority::Medium, 1),
            task(3, "mango", Priority::Medium, 1),
        ];
        sort_tasks(&mut tasks, TaskSort { column: SortColumn::Title, direction: SortDirection::Ascending });
        assert_eq!(ids(&tasks), vec![2, 3, 1]);
    }

    #[test]
    fn test_status_sort_uses_wire_labels() {
        let mut todo = task(1, "a", Priority::Medium, 1);
        todo.status = TaskStatus::Todo;
        let mut done = task(2, "b", Priority::Medium, 1);
        done.status = TaskStatus::Done;
        let mut started = task(3, "c", Priority::Medium, 1);
        started.status = TaskStatus::InProgress;
        let mut tasks = vec![todo, done, started];
        sort_tasks(&mut tasks, TaskSort { column: SortColumn::Status, direction: SortDirection::Ascending });
        // "done" < "in progress" < "todo" on the wire
        assert_eq!(ids(&tasks), vec![2, 3, 1]);
    }

    #[test]
    fn test_descending_reverses_order() {
        let mut tasks = vec![
            task(1, "a", Priority::Medium, 3),
            task(2, "b", Priority::Medium, 1),
            task(3, "c", Priority::Medium, 2),
        ];
        sort_tasks(&mut tasks, TaskSort { column: SortColumn::EndDate, direction: SortDirection::Descending });
        assert_eq!(ids(&tasks), vec![1, 3, 2]);
    }

    #[test]
    fn test_equal_keys_keep_arrival_order() {
        let mut tasks = vec![
            task(4, "d", Priority::High, 1),
            task(1, "a", Priority::Low, 1),
            task(2, "b", Priority::High, 1),
            task(3, "c", Priority::High, 1),
        ];
        sort_tasks(&mut tasks, TaskSort { column: SortColumn::Priority, direction: SortDirection::Ascending });
        assert_eq!(ids(&tasks), vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_toggle_flips_only_on_same_column() {
        let sort = TaskSort::default();
        let same = sort.toggled(SortColumn::EndDate);
        assert_eq!(same.direction, SortDirection::Descending);
        let switched = same.toggled(SortColumn::Priority);
        assert_eq!(switched.column, SortColumn::Priority);
        assert_eq!(switched.direction, SortDirection::Ascending);
    }
}
