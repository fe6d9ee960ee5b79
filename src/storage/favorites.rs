//! Favorites Store
//!
//! Persistent local cache of places the user saved, backed by a pooled
//! SQLite key-value table. The whole list lives as one JSON document under a
//! fixed key: it is read once at startup and overwritten wholesale on every
//! toggle. Last writer wins; there is no per-entry transactionality.

use std::path::Path;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;
use tracing::debug;

use crate::constants::favorites::STORE_KEY;
use crate::types::{Place, Result, TravelError};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS kv_cache (
    key        TEXT PRIMARY KEY,
    value      TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
";

/// Pooled handle to the favorites cache
pub struct FavoritesStore {
    pool: Pool<SqliteConnectionManager>,
}

impl FavoritesStore {
    /// Open (creating if needed) the store at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let manager = SqliteConnectionManager::file(path.as_ref());
        let pool = Pool::builder()
            .max_size(4)
            .build(manager)
            .map_err(|e| TravelError::Storage(format!("connection pool: {}", e)))?;

        let store = Self { pool };
        store.connection()?.execute_batch(SCHEMA)?;

        Ok(store)
    }

    fn connection(&self) -> Result<PooledConnection<SqliteConnectionManager>> {
        self.pool
            .get()
            .map_err(|e| TravelError::Storage(format!("connection checkout: {}", e)))
    }

    /// Load the saved list; an absent key is an empty list
    pub fn load(&self) -> Result<Vec<Place>> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare("SELECT value FROM kv_cache WHERE key = ?1")?;
        let mut rows = stmt.query(params![STORE_KEY])?;

        match rows.next()? {
            Some(row) => {
                let raw: String = row.get(0)?;
                Ok(serde_json::from_str(&raw)?)
            }
            None => Ok(Vec::new()),
        }
    }

    /// Overwrite the whole list
    pub fn save(&self, favorites: &[Place]) -> Result<()> {
        let raw = serde_json::to_string(favorites)?;
        let conn = self.connection()?;
        conn.execute(
            "INSERT OR REPLACE INTO kv_cache (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![STORE_KEY, raw, chrono::Utc::now().to_rfc3339()],
        )?;

        debug!(count = favorites.len(), "Favorites saved");
        Ok(())
    }

    /// Add or remove a place (keyed by name) and persist; returns the new list
    pub fn toggle(&self, place: &Place) -> Result<Vec<Place>> {
        let mut favorites = self.load()?;

        if let Some(index) = favorites.iter().position(|f| f.name == place.name) {
            favorites.remove(index);
        } else {
            favorites.push(place.clone());
        }

        self.save(&favorites)?;
        Ok(favorites)
    }

    /// Whether a place name is currently saved
    pub fn is_favorite(&self, name: &str) -> Result<bool> {
        Ok(self.load()?.iter().any(|f| f.name == name))
    }
}

// =============================================================================
// Tests
// =============================================================================
