//! Board Column Component
//!
//! One status column: header with count, drop slots between cards, and
//! the column body as an append target.

use leptos::prelude::*;

use board_dnd::{make_on_column_mouseenter, make_on_mousedown, make_on_mouseleave, DndSignals, DropTarget};

use crate::components::{DropSlot, TaskCard};
use crate::models::{Task, TaskStatus};

/// Status column with drag-and-drop wiring
#[component]
pub fn BoardColumn(
    status: TaskStatus,
    #[prop(into)] tasks: Signal<Vec<Task>>,
    dnd: DndSignals,
    on_open: Callback<Task>,
) -> impl IntoView {
    let column = status.column_index();
    let on_body_mouseenter = make_on_column_mouseenter(dnd, column);
    let on_body_mouseleave = make_on_mouseleave(dnd);

    let is_append_target = move || dnd.target_read.get() == Some(DropTarget::Column(column));
    let body_class = move || {
        if is_append_target() { "board-column-body drop-append" } else { "board-column-body" }
    };

    view! {
        <div class="board-column">
            <div class="board-column-header">
                <span class="board-column-title">{status.label()}</span>
                <span class="board-column-count">{move || tasks.get().len()}</span>
            </div>

            <div
                class=body_class
                on:mouseenter=on_body_mouseenter
                on:mouseleave=on_body_mouseleave
            >
                <DropSlot dnd=dnd column=column position=0 />

                <For
                    each=move || { tasks.get().into_iter().enumerate().collect::<Vec<_>>() }
                    key=|(index, task)| {
                        // Position and mutable fields both key the row so an
                        // optimistic move re-renders it
                        (*index, task.id, task.title.clone(), task.priority, task.status, task.updated_at)
                    }
                    children=move |(index, task)| {
                        let id = task.id;
                        let on_mousedown = make_on_mousedown(dnd, id);
                        let card_class = move || {
                            if dnd.is_dragging(id) { "task-card dragging" } else { "task-card" }
                        };
                        let opened = task.clone();

                        view! {
                            <div
                                class=card_class
                                on:mousedown=on_mousedown
                                on:click=move |_| {
                                    // A drop also fires click on the card under
                                    // the cursor; swallow it
                                    if dnd.drag_just_ended_read.get_untracked() {
                                        return;
                                    }
                                    on_open.run(opened.clone());
                                }
                            >
                                <TaskCard task=task />
                            </div>
                            <DropSlot dnd=dnd column=column position={index + 1} />
                        }
                    }
                />

                <Show when=move || tasks.get().is_empty()>
                    <div class="board-column-empty">"Nothing here"</div>
                </Show>
            </div>
        </div>
    }
}
