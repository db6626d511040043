//! Priority Selector Component
//!
//! Reusable priority selector buttons.

use leptos::prelude::*;

use crate::models::Priority;

/// Priority selector buttons for task forms
#[component]
pub fn PrioritySelect(
    current: ReadSignal<Priority>,
    on_change: impl Fn(Priority) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="priority-select">
            {Priority::ALL.iter().map(|priority| {
                let priority = *priority;
                let is_selected = move || current.get() == priority;
                view! {
                    <button
                        type="button"
                        class=move || {
                            if is_selected() {
                                format!("priority-btn {} active", priority.as_str())
                            } else {
                                format!("priority-btn {}", priority.as_str())
                            }
                        }
                        on:click=move |_| on_change(priority)
                    >
                        {priority.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
