//! Board DragDrop Utilities
//!
//! Mouse-event drag-and-drop for Leptos column boards.
//! Uses a movement threshold to distinguish click from drag, so cards
//! stay clickable without accidental drags.

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Identifier of a draggable card (backend task id).
pub type CardId = i32;

/// Drop target types on a column board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Drop on a column body (append at the end of that column)
    Column(usize),
    /// Drop on a slot between cards (column index, insert position)
    Slot { column: usize, position: usize },
}

impl DropTarget {
    /// Column index this target belongs to
    pub fn column(&self) -> usize {
        match self {
            DropTarget::Column(col) => *col,
            DropTarget::Slot { column, .. } => *column,
        }
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<CardId>>,
    pub dragging_write: WriteSignal<Option<CardId>>,
    pub target_read: ReadSignal<Option<DropTarget>>,
    pub target_write: WriteSignal<Option<DropTarget>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending card id (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<CardId>>,
    pub pending_write: WriteSignal<Option<CardId>>,
    /// Mousedown position for movement detection
    pub origin_x_read: ReadSignal<i32>,
    pub origin_x_write: WriteSignal<i32>,
    pub origin_y_read: ReadSignal<i32>,
    pub origin_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<CardId>);
    let (target_read, target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<CardId>);
    let (origin_x_read, origin_x_write) = signal(0i32);
    let (origin_y_read, origin_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        target_read,
        target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        origin_x_read,
        origin_x_write,
        origin_y_read,
        origin_y_write,
    }
}

impl DndSignals {
    /// Whether the given card is currently being dragged
    pub fn is_dragging(&self, card: CardId) -> bool {
        self.dragging_read.get() == Some(card)
    }

    /// Whether any drag is in progress
    pub fn drag_active(&self) -> bool {
        self.dragging_read.get().is_some()
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.target_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    // Clear the just-ended flag shortly after, so the click suppressed by
    // the drag does not leak into the card underneath the cursor.
    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// True when the event target is a form control that should keep the click
fn is_interactive_target(ev: &web_sys::MouseEvent) -> bool {
    if let Some(target) = ev.target() {
        if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return true; }
        if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return true; }
        if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return true; }
        if target.dyn_ref::<web_sys::HtmlSelectElement>().is_some() { return true; }
    }
    false
}

/// Create mousedown handler for draggable cards.
/// Records a pending drag with the press position; the drag itself starts
/// only after the cursor moves past the threshold.
pub fn make_on_mousedown(dnd: DndSignals, card: CardId) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            if is_interactive_target(&ev) { return; }
            dnd.pending_write.set(Some(card));
            dnd.origin_x_write.set(ev.client_x());
            dnd.origin_y_write.set(ev.client_y());
        }
    }
}

/// Document-level mousemove listener that promotes a pending press to a
/// drag once it moves past the threshold. Unbinds when the calling
/// component is cleaned up, so a board can mount repeatedly.
pub fn bind_global_mousemove(dnd: DndSignals) {
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let dx = (ev.client_x() - dnd.origin_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.origin_y_read.get_untracked()).abs();

            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_write.set(pending);
            }
        }
    });

    bind_document_listener("mousemove", on_mousemove);
}

/// Create mouseenter handler for a column body (append target)
pub fn make_on_column_mouseenter(dnd: DndSignals, column: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.target_write.set(Some(DropTarget::Column(column)));
        }
    }
}

/// Create mouseenter handler for a slot between cards
pub fn make_on_slot_mouseenter(dnd: DndSignals, column: usize, position: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.target_write.set(Some(DropTarget::Slot { column, position }));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.target_write.set(None);
        }
    }
}

/// Bind the document mouseup handler for drop detection.
/// Also binds the global mousemove that promotes a pending press to a
/// drag. Both listeners unbind when the calling component is cleaned up.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(CardId, DropTarget) + Clone + 'static,
{
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let target = dnd.target_read.get_untracked();

        dnd.pending_write.set(None);

        // A press that never crossed the threshold is a plain click and
        // must keep its click event, so end_drag only runs for real drags.
        if let Some(card) = dragging {
            end_drag(&dnd);
            if let Some(target) = target {
                on_drop(card, target);
            }
        }
    });

    bind_document_listener("mouseup", on_mouseup);

    bind_global_mousemove(dnd);
}

/// Attaches a listener to the document and detaches it again when the
/// current reactive owner is cleaned up.
fn bind_document_listener(event: &'static str, handler: Closure<dyn FnMut(web_sys::MouseEvent)>) {
    let Some(document) = web_sys::window().and_then(|win| win.document()) else {
        return;
    };
    let _ = document.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref());

    let bound = SendWrapper::new((document, handler));
    on_cleanup(move || {
        let (document, handler) = bound.take();
        let _ = document.remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
    });
}
