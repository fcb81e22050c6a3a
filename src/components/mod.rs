//! UI Components
//!
//! Reusable Leptos components.

mod supplement_row;
mod favorite_supplements_table;

pub use supplement_row::SupplementRow;
pub use favorite_supplements_table::FavoriteSupplementsTable;
