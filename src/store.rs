//! Global Application State Store
//!
//! Owns the supplement list the table renders. Uses Leptos reactive_stores
//! for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::Supplement;

/// Seed data embedded at build time
pub const SEED_JSON: &str = include_str!("../public/supplements.json");

/// Name given to records created from the table header button
pub const NEW_SUPPLEMENT_NAME: &str = "New Supplement";

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Favorite supplements in display order
    pub supplements: Vec<Supplement>,
    /// Supplement most recently opened for editing
    pub editing: Option<Supplement>,
}

impl AppState {
    /// State seeded from `SEED_JSON`; falls back to empty on a bad seed
    pub fn seeded() -> Self {
        let supplements = match parse_seed(SEED_JSON) {
            Ok(list) => list,
            Err(e) => {
                web_sys::console::error_1(&format!("[STORE] Bad seed data: {}", e).into());
                Vec::new()
            }
        };
        Self {
            supplements,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

pub fn parse_seed(json: &str) -> Result<Vec<Supplement>, String> {
    serde_json::from_str(json).map_err(|e| e.to_string())
}

// ========================
// List Operations
// ========================

fn next_id(list: &[Supplement]) -> u32 {
    list.iter().map(|s| s.id).max().map_or(1, |max| max + 1)
}

/// Append a fresh record and return it
pub fn push_new(list: &mut Vec<Supplement>) -> Supplement {
    let created = Supplement::new(next_id(list), NEW_SUPPLEMENT_NAME);
    list.push(created.clone());
    created
}

/// Flip the favorite flag; returns the new value if the id exists
pub fn toggle_favorite(list: &mut [Supplement], id: u32) -> Option<bool> {
    list.iter_mut().find(|s| s.id == id).map(|s| {
        s.favorite = !s.favorite;
        s.favorite
    })
}

/// Remove by id; returns whether anything was removed
pub fn remove(list: &mut Vec<Supplement>, id: u32) -> bool {
    let before = list.len();
    list.retain(|s| s.id != id);
    list.len() != before
}

// ========================
// Store Helper Functions
// ========================

pub fn store_create_supplement(store: &AppStore) -> Supplement {
    push_new(&mut store.supplements().write())
}

pub fn store_toggle_favorite(store: &AppStore, id: u32) -> Option<bool> {
    toggle_favorite(&mut store.supplements().write(), id)
}

/// Remove a supplement by ID, closing the editor if it was open on it
pub fn store_remove_supplement(store: &AppStore, id: u32) -> bool {
    let removed = remove(&mut store.supplements().write(), id);
    if store.editing().get_untracked().is_some_and(|s| s.id == id) {
        *store.editing().write() = None;
    }
    removed
}

/// Replace the whole list with a reordered sequence
pub fn store_set_order(store: &AppStore, reordered: Vec<Supplement>) {
    *store.supplements().write() = reordered;
}

pub fn store_set_editing(store: &AppStore, supplement: Supplement) {
    *store.editing().write() = Some(supplement);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_list(ids: &[u32]) -> Vec<Supplement> {
        ids.iter().map(|&id| Supplement::new(id, format!("Supplement {}", id))).collect()
    }

    #[test]
    fn test_seed_parses() {
        let seed = parse_seed(SEED_JSON).expect("seed should parse");
        assert!(!seed.is_empty());
        let mut ids: Vec<_> = seed.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), seed.len(), "seed ids must be unique");
    }

    #[test]
    fn test_parse_seed_error() {
        assert!(parse_seed("{not json").is_err());
        assert!(parse_seed(r#"[{"name": "missing id"}]"#).is_err());
    }

    #[test]
    fn test_push_new_uses_next_id() {
        let mut list = Vec::new();
        assert_eq!(push_new(&mut list).id, 1);

        let mut list = make_list(&[3, 9, 4]);
        let created = push_new(&mut list);
        assert_eq!(created.id, 10);
        assert_eq!(created.name, NEW_SUPPLEMENT_NAME);
        assert!(created.favorite);
        assert_eq!(list.last(), Some(&created));
    }

    #[test]
    fn test_toggle_favorite() {
        let mut list = make_list(&[1, 2]);
        assert_eq!(toggle_favorite(&mut list, 2), Some(false));
        assert_eq!(toggle_favorite(&mut list, 2), Some(true));
        assert_eq!(toggle_favorite(&mut list, 5), None);
        assert!(list[0].favorite);
    }

    #[test]
    fn test_remove() {
        let mut list = make_list(&[1, 2, 3]);
        assert!(remove(&mut list, 2));
        assert!(!remove(&mut list, 2));
        assert_eq!(list.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 3]);
    }
}
