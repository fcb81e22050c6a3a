//! Supplement Shelf App
//!
//! Owns the supplement list and answers the table's requests in memory.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::FavoriteSupplementsTable;
use crate::models::Supplement;
use crate::store::{self, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::seeded());

    web_sys::console::log_1(
        &format!("[APP] Loaded {} supplements", store.supplements().read_untracked().len()).into(),
    );

    let items = Signal::derive(move || store.supplements().get());

    let on_create_new = move |_: ()| {
        let created = store::store_create_supplement(&store);
        web_sys::console::log_1(&format!("[APP] Created supplement {}", created.id).into());
    };

    let on_toggle_favorite = move |id: u32| {
        let favorite = store::store_toggle_favorite(&store, id);
        web_sys::console::log_1(&format!("[APP] Toggle favorite: id={}, now={:?}", id, favorite).into());
    };

    let on_edit = move |supplement: Supplement| {
        web_sys::console::log_1(&format!("[APP] Edit requested: id={}", supplement.id).into());
        store::store_set_editing(&store, supplement);
    };

    let on_delete = move |id: u32| {
        let removed = store::store_remove_supplement(&store, id);
        web_sys::console::log_1(&format!("[APP] Delete: id={}, removed={}", id, removed).into());
    };

    let on_reorder = move |reordered: Vec<Supplement>| {
        let order: Vec<u32> = reordered.iter().map(|s| s.id).collect();
        web_sys::console::log_1(&format!("[APP] Reorder: {:?}", order).into());
        store::store_set_order(&store, reordered);
    };

    view! {
        <main class="main-content">
            <FavoriteSupplementsTable
                items=items
                on_create_new=on_create_new
                on_toggle_favorite=on_toggle_favorite
                on_edit=on_edit
                on_delete=on_delete
                on_reorder=on_reorder
            />

            {move || store.editing().get().map(|s| view! {
                <p class="editing-status">"Editing: " {s.name}</p>
            })}

            <p class="item-count">{move || format!("{} supplements", store.supplements().read().len())}</p>
        </main>
    }
}
