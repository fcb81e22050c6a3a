//! Leptos DragDrop Utilities
//!
//! Drag-to-reorder for flat Leptos lists using native HTML5 drag events.
//! The reorder computation and drag state machine are plain Rust so they
//! can be tested without a browser; the `make_on_*` factories bind them to
//! `web_sys::DragEvent` handlers.

use leptos::prelude::*;

/// MIME type used for the drag payload
pub const DRAG_MIME: &str = "text/plain";

/// Move the element keyed `dragged` to the index `target` occupied in `items`.
///
/// The dragged element is removed first and then inserted at the target's
/// original index, so dragging forward lands it after the target and
/// dragging backward lands it before. Returns `None` for a self-drop or
/// when either key is missing. Duplicate keys resolve to the first match.
pub fn reorder_by_key<T, K, F>(items: &[T], dragged: &K, target: &K, key: F) -> Option<Vec<T>>
where
    T: Clone,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    if dragged == target {
        return None;
    }
    let from = items.iter().position(|item| key(item) == *dragged)?;
    let to = items.iter().position(|item| key(item) == *target)?;

    let mut reordered = items.to_vec();
    let moved = reordered.remove(from);
    reordered.insert(to, moved);
    Some(reordered)
}

/// Transient drag state: Idle when `dragging` is `None`
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct DragState {
    /// Item being dragged
    pub dragging: Option<u32>,
    /// Item currently hovered as a drop target (cosmetic only)
    pub drag_over: Option<u32>,
}

/// Outcome of a drop event
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DropOutcome {
    /// Valid drop: move `dragged` to the position of `target`
    Move { dragged: u32, target: u32 },
    /// Nothing was being dragged
    NotDragging,
    /// Dropped onto itself
    SelfDrop,
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        self.dragging.is_none()
    }

    /// Idle -> Dragging
    pub fn start(&mut self, id: u32) {
        self.dragging = Some(id);
        self.drag_over = None;
    }

    /// Record hover target; ignored while idle or when hovering the dragged item
    pub fn over(&mut self, id: u32) {
        match self.dragging {
            Some(dragged) if dragged != id => self.drag_over = Some(id),
            _ => {}
        }
    }

    /// Resolve a drop on `target`. Always returns to Idle.
    pub fn drop_on(&mut self, target: u32) -> DropOutcome {
        let outcome = match self.dragging {
            None => DropOutcome::NotDragging,
            Some(dragged) if dragged == target => DropOutcome::SelfDrop,
            Some(dragged) => DropOutcome::Move { dragged, target },
        };
        self.end();
        outcome
    }

    /// Dragging -> Idle, unconditionally
    pub fn end(&mut self) {
        *self = Self::default();
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub state_read: ReadSignal<DragState>,
    pub state_write: WriteSignal<DragState>,
}

impl DndSignals {
    /// Dragged item id (tracked)
    pub fn dragging_id(&self) -> Option<u32> {
        self.state_read.get().dragging
    }

    /// Hover target id (tracked)
    pub fn drag_over_id(&self) -> Option<u32> {
        self.state_read.get().drag_over
    }
}

pub fn create_dnd_signals() -> DndSignals {
    let (state_read, state_write) = signal(DragState::default());
    DndSignals {
        state_read,
        state_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.state_write.update(DragState::end);
}

/// Create dragstart handler for a draggable row
pub fn make_on_dragstart(dnd: DndSignals, item_id: u32) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed("move");
            // Firefox won't start a drag without a payload
            let _ = dt.set_data(DRAG_MIME, &item_id.to_string());
        }
        web_sys::console::log_1(&format!("[DND] Drag start: id={}", item_id).into());
        dnd.state_write.update(|s| s.start(item_id));
    }
}

/// Create dragover handler for a row (permits dropping and tracks hover)
pub fn make_on_dragover(dnd: DndSignals, item_id: u32) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let state = dnd.state_read.get_untracked();
        if state.dragging.is_some() && state.dragging != Some(item_id) && state.drag_over != Some(item_id) {
            dnd.state_write.update(|s| s.over(item_id));
        }
    }
}

/// Create drop handler for a row.
///
/// `on_drop(dragged_id, target_id)` runs only for a valid move; self-drops
/// and drops without a drag are absorbed. State is reset either way.
pub fn make_on_drop<F>(dnd: DndSignals, target_id: u32, on_drop: F) -> impl Fn(web_sys::DragEvent) + Clone + 'static
where
    F: Fn(u32, u32) + Clone + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let mut state = dnd.state_read.get_untracked();
        let outcome = state.drop_on(target_id);
        dnd.state_write.set(state);

        match outcome {
            DropOutcome::Move { dragged, target } => {
                web_sys::console::log_1(&format!("[DND] Drop: dragged={}, target={}", dragged, target).into());
                on_drop(dragged, target);
            }
            ignored => {
                web_sys::console::log_1(&format!("[DND] Drop ignored: {:?}", ignored).into());
            }
        }
    }
}

/// Create dragend handler (fires after drop or cancel)
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        end_drag(&dnd);
    }
}
