//! Supplement Row Component
//!
//! A single draggable table row.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::models::Supplement;

/// One supplement row with drag handlers and action icons
#[component]
pub fn SupplementRow(
    supplement: Supplement,
    dnd: DndSignals,
    /// Fired with (dragged_id, target_id) for a valid drop on this row
    on_drop: Callback<(u32, u32)>,
    on_toggle_favorite: Callback<u32>,
    on_edit: Callback<Supplement>,
    on_delete: Callback<u32>,
) -> impl IntoView {
    let id = supplement.id;
    let name = supplement.name.clone();
    let summary = supplement.ingredient_summary();
    let unit = supplement.unit_label().unwrap_or_default().to_string();
    let favorite = supplement.favorite;
    let edit_from_name = supplement.clone();
    let edit_from_icon = supplement;

    let on_dragstart = make_on_dragstart(dnd, id);
    let on_dragover = make_on_dragover(dnd, id);
    let on_drop_handler = make_on_drop(dnd, id, move |dragged, target| on_drop.run((dragged, target)));
    let on_dragend = make_on_dragend(dnd);

    // Visual state
    let is_dragging = move || dnd.dragging_id() == Some(id);
    let is_drag_over = move || dnd.drag_over_id() == Some(id);

    let row_class = move || {
        let mut c = String::from("supplement-row");
        if is_dragging() { c.push_str(" dragging"); }
        if is_drag_over() { c.push_str(" drag-over"); }
        c
    };

    view! {
        <tr
            class=row_class
            draggable="true"
            on:dragstart=on_dragstart
            on:dragover=on_dragover
            on:drop=on_drop_handler
            on:dragend=on_dragend
        >
            <td class="drag-handle-cell">
                <span class="drag-handle">"⠿"</span>
            </td>
            <td>
                <span class="supplement-name" on:click=move |_| on_edit.run(edit_from_name.clone())>
                    {name}
                </span>
            </td>
            <td>{summary}</td>
            <td>{unit}</td>
            <td class="actions-cell">
                <span
                    class=move || if favorite { "action-icon favorite active" } else { "action-icon favorite" }
                    title="Toggle favorite"
                    on:click=move |_| on_toggle_favorite.run(id)
                >
                    "★"
                </span>
                <span class="action-icon edit" title="Edit" on:click=move |_| on_edit.run(edit_from_icon.clone())>
                    "✎"
                </span>
                <span class="action-icon delete" title="Delete" on:click=move |_| on_delete.run(id)>
                    "🗑"
                </span>
            </td>
        </tr>
    }
}
