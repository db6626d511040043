//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Everything
//! in here mirrors the backend; writes are optimistic previews that a
//! re-fetch overwrites.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Task, TaskStatus, User};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All of the signed-in user's tasks
    pub tasks: Vec<Task>,
    /// Everyone tasks can be assigned to
    pub users: Vec<User>,
    /// The signed-in user's profile
    pub current_user: Option<User>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole task list after a fetch
pub fn store_set_tasks(store: &AppStore, tasks: Vec<Task>) {
    *store.tasks().write() = tasks;
}

/// Insert a task, or replace it if the id is already present
pub fn store_upsert_task(store: &AppStore, task: Task) {
    let field = store.tasks();
    let mut tasks = field.write();
    match tasks.iter_mut().find(|t| t.id == task.id) {
        Some(slot) => *slot = task,
        None => tasks.push(task),
    }
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &AppStore, task_id: i32) {
    store.tasks().write().retain(|task| task.id != task_id);
}

/// Optimistic drag-and-drop move: restatus the task and reposition it in
/// front of `before` (or at the back). The board derives its columns
/// from this list's order.
pub fn store_move_task(store: &AppStore, task_id: i32, status: TaskStatus, before: Option<i32>) {
    let field = store.tasks();
    let mut tasks = field.write();
    let Some(index) = tasks.iter().position(|task| task.id == task_id) else {
        return;
    };
    let mut task = tasks.remove(index);
    task.status = status;
    let insert_at = before
        .and_then(|id| tasks.iter().position(|task| task.id == id))
        .unwrap_or(tasks.len());
    tasks.insert(insert_at, task);
}

/// Replace the assignable-user list after a fetch
pub fn store_set_users(store: &AppStore, users: Vec<User>) {
    *store.users().write() = users;
}

/// Set or replace the signed-in user's profile
pub fn store_set_current_user(store: &AppStore, user: Option<User>) {
    *store.current_user().write() = user;
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
            end_date: date + chrono::Duration::days(3),
            media: None,
            responsible: vec![],
            created_at: date,
            updated_at: date,
        }
    }

    fn ids(store: &AppStore) -> Vec<i32> {
        store.tasks().read().iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_upsert_replaces_matching_id() {
        let store = AppStore::new(AppState::default());
        store_set_tasks(&store, vec![task(1, TaskStatus::Todo), task(2, TaskStatus::Todo)]);

        let mut renamed = task(2, TaskStatus::Todo);
        renamed.title = "renamed".to_string();
        store_upsert_task(&store, renamed);
        store_upsert_task(&store, task(3, TaskStatus::Done));

        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(store.tasks().read()[1].title, "renamed");
    }

    #[test]
    fn test_move_restatuses_and_repositions() {
        let store = AppStore::new(AppState::default());
        store_set_tasks(
            &store,
            vec![task(1, TaskStatus::Todo), task(2, TaskStatus::Todo), task(3, TaskStatus::Done)],
        );

        store_move_task(&store, 1, TaskStatus::Done, Some(3));
        assert_eq!(ids(&store), vec![2, 1, 3]);
        assert_eq!(store.tasks().read()[1].status, TaskStatus::Done);

        // No anchor appends
        store_move_task(&store, 2, TaskStatus::InProgress, None);
        assert_eq!(ids(&store), vec![1, 3, 2]);

        // Unknown task is a no-op
        store_move_task(&store, 99, TaskStatus::Todo, None);
        assert_eq!(ids(&store), vec![1, 3, 2]);
    }

    #[test]
    fn test_remove_task_by_id() {
        let store = AppStore::new(AppState::default());
        store_set_tasks(&store, vec![task(1, TaskStatus::Todo), task(2, TaskStatus::Todo)]);
        store_remove_task(&store, 1);
        assert_eq!(ids(&store), vec![2]);
    }
}
