//! Local Persistence
//!
//! SQLite-backed key-value cache for the favorites list, the only
//! process-wide shared state the application keeps.

mod favorites;

pub use favorites::FavoritesStore;
