//! Task Card Component
//!
//! Card body shown on the board. Drag and click handling lives on the
//! wrapper in the column, this only renders the task.

use leptos::prelude::*;

use crate::components::ProgressBar;
use crate::models::{fmt_date, Task};
use crate::progress::task_progress;

/// Board card for one task
#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let percent = task_progress(&task);
    let priority = task.priority;
    let due = fmt_date(task.end_date);
    let has_description = !task.description.is_empty();
    let has_media = task.media.is_some();
    let assignee_count = task.responsible.len();

    view! {
        <div class="task-card-top">
            <span class=format!("priority-badge {}", priority.as_str())>{priority.label()}</span>
            <span class="task-card-due">{due}</span>
        </div>
        <div class="task-card-title">{task.title}</div>
        {has_description.then(|| view! {
            <div class="task-card-description">{task.description}</div>
        })}
        <ProgressBar percent=percent />
        <div class="task-card-meta">
            {has_media.then(|| view! { <span class="task-card-attachment">"Attachment"</span> })}
            {(assignee_count > 0).then(|| view! {
                <span class="task-card-assignees">
                    {if assignee_count == 1 {
                        "1 assignee".to_string()
                    } else {
                        format!("{assignee_count} assignees")
                    }}
                </span>
            })}
        </div>
    }
}
