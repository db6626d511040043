//! Drop Slot Component
//!
//! A horizontal line between cards marking where a dragged card lands.

use leptos::prelude::*;

use board_dnd::{make_on_mouseleave, make_on_slot_mouseenter, DndSignals, DropTarget};

/// Drop slot shown between cards while a drag is in progress
#[component]
pub fn DropSlot(dnd: DndSignals, column: usize, position: usize) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, column, position);
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_active = move || {
        matches!(
            dnd.target_read.get(),
            Some(DropTarget::Slot { column: c, position: p }) if c == column && p == position
        )
    };

    let slot_class = move || {
        let mut c = String::from("drop-slot");
        if !dnd.drag_active() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=slot_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
