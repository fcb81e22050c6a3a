//! Favorite Supplements Table
//!
//! Renders the owner's supplement list with drag-and-drop reordering.
//! Holds only transient drag state; every change is requested through
//! the callbacks.

use leptos::prelude::*;

use crate::models::Supplement;
use crate::components::SupplementRow;

use leptos_dragdrop::*;

/// Table header labels (first column is the drag handle)
pub const COLUMNS: &[&str] = &["", "Name", "Ingredients", "Unit", "Actions"];

/// Supplement table with DnD reordering
#[component]
pub fn FavoriteSupplementsTable(
    /// Display order is taken from this list as-is
    #[prop(into)] items: Signal<Vec<Supplement>>,
    #[prop(into)] on_create_new: Callback<()>,
    #[prop(into)] on_toggle_favorite: Callback<u32>,
    #[prop(into)] on_edit: Callback<Supplement>,
    #[prop(into)] on_delete: Callback<u32>,
    /// Receives the full list in its new order
    #[prop(into)] on_reorder: Callback<Vec<Supplement>>,
) -> impl IntoView {
    let dnd = create_dnd_signals();

    let on_drop = Callback::new(move |(dragged_id, target_id): (u32, u32)| {
        let current = items.get_untracked();
        if let Some(reordered) = reorder_by_key(&current, &dragged_id, &target_id, |s| s.id) {
            on_reorder.run(reordered);
        }
    });

    view! {
        <h2 class="supplements-title">
            "Favorite Supplements"
            <button class="create-btn" on:click=move |_| on_create_new.run(())>"+ Create New"</button>
        </h2>
        <table class="supplements-table">
            <thead>
                <tr>
                    {COLUMNS.iter().map(|label| view! { <th>{*label}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || items.get()
                    key=|s| {
                        // Every displayed field, so edits made by the owner re-render the row
                        (
                            s.id,
                            s.name.clone(),
                            s.favorite,
                            s.ingredient_summary(),
                            s.unit_label().map(str::to_string),
                        )
                    }
                    children=move |supplement| {
                        view! {
                            <SupplementRow
                                supplement=supplement
                                dnd=dnd
                                on_drop=on_drop
                                on_toggle_favorite=on_toggle_favorite
                                on_edit=on_edit
                                on_delete=on_delete
                            />
                        }
                    }
                />
            </tbody>
        </table>
        <Show when=move || items.get().is_empty()>
            <div class="empty-message">"No favorite supplements yet"</div>
        </Show>
    }
}
