//! Preference store for toppdawg.
//!
//! This module provides `SQLite`-backed persistence for dashboard settings
//! that must survive across runs. Today that is the dark-mode flag; the
//! store itself is a plain key-value table so new settings don't need
//! schema changes.

pub mod migrations;
pub mod schema;

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

/// Preference key for the dashboard theme flag.
pub const DARK_MODE_KEY: &str = "dark_mode";

/// Persistent store for dashboard preferences.
///
/// Values are stored as text. Boolean flags are written as `true`/`false`;
/// a value that doesn't parse back is treated as unset rather than failing
/// the whole dashboard at startup.
#[derive(Debug)]
pub struct PrefStore {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl PrefStore {
    /// Open or create a preference store at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist.
    /// Initializes the schema if this is a new database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening preference store at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        // Enable WAL mode for better concurrent read performance
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        migrations::initialize_schema(&conn)?;

        info!("Preference store opened at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory preference store for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        migrations::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a raw preference value.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM prefs WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Set a raw preference value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO prefs (key, value, updated_at) VALUES (?1, ?2, datetime('now'))",
            (key, value),
        )?;
        debug!("Saved preference {} = {}", key, value);
        Ok(())
    }

    /// Get a boolean preference flag.
    ///
    /// Returns `None` if the key is absent. A stored value that is not
    /// `true`/`false` also reads as `None`, with a warning, so one corrupt
    /// row can't brick the dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn get_flag(&self, key: &str) -> Result<Option<bool>> {
        match self.get(key)? {
            Some(value) => match value.parse::<bool>() {
                Ok(flag) => Ok(Some(flag)),
                Err(_) => {
                    warn!("Ignoring unparseable preference {} = {:?}", key, value);
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    /// Set a boolean preference flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn set_flag(&self, key: &str, value: bool) -> Result<()> {
        self.set(key, if value { "true" } else { "false" })
    }

    /// Read the persisted dark-mode flag.
    ///
    /// An absent or unparseable flag reads as `false` (light mode).
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn dark_mode(&self) -> Result<bool> {
        Ok(self.get_flag(DARK_MODE_KEY)?.unwrap_or(false))
    }

    /// Persist the dark-mode flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn set_dark_mode(&self, on: bool) -> Result<()> {
        self.set_flag(DARK_MODE_KEY, on)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_store() -> PrefStore {
        PrefStore::open_in_memory().expect("failed to create test store")
    }

    #[test]
    fn test_open_in_memory() {
        let store = PrefStore::open_in_memory();
        assert!(store.is_ok());
    }

    #[test]
    fn test_get_absent_key() {
        let store = create_test_store();
        assert_eq!(store.get("missing").unwrap(), None);
        assert_eq!(store.get_flag("missing").unwrap(), None);
    }

    #[test]
    fn test_set_and_get() {
        let store = create_test_store();

        store.set("greeting", "hello").unwrap();
        assert_eq!(store.get("greeting").unwrap(), Some("hello".to_string()));
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let store = create_test_store();

        store.set("greeting", "hello").unwrap();
        store.set("greeting", "goodbye").unwrap();

        assert_eq!(store.get("greeting").unwrap(), Some("goodbye".to_string()));
    }

    #[test]
    fn test_set_and_get_flag() {
        let store = create_test_store();

        store.set_flag("notifications", true).unwrap();
        assert_eq!(store.get_flag("notifications").unwrap(), Some(true));

        store.set_flag("notifications", false).unwrap();
        assert_eq!(store.get_flag("notifications").unwrap(), Some(false));
    }

    #[test]
    fn test_unparseable_flag_reads_as_unset() {
        let store = create_test_store();

        store.set(DARK_MODE_KEY, "maybe").unwrap();

        assert_eq!(store.get_flag(DARK_MODE_KEY).unwrap(), None);
        assert!(!store.dark_mode().unwrap());
    }

    #[test]
    fn test_dark_mode_defaults_to_light() {
        let store = create_test_store();
        assert!(!store.dark_mode().unwrap());
    }

    #[test]
    fn test_dark_mode_roundtrip() {
        let store = create_test_store();

        store.set_dark_mode(true).unwrap();
        assert!(store.dark_mode().unwrap());

        store.set_dark_mode(false).unwrap();
        assert!(!store.dark_mode().unwrap());
    }

    #[test]
    fn test_path() {
        let store = create_test_store();
        assert_eq!(store.path().to_string_lossy(), ":memory:");
    }

    #[test]
    fn test_updated_at_recorded() {
        let store = create_test_store();
        store.set_dark_mode(true).unwrap();

        let updated_at: String = store
            .conn
            .query_row(
                "SELECT updated_at FROM prefs WHERE key = ?1",
                [DARK_MODE_KEY],
                |row| row.get(0),
            )
            .unwrap();
        assert!(!updated_at.is_empty());
    }

    #[test]
    fn test_open_file_based_persists_across_reopen() {
        let temp_dir = std::env::temp_dir();
        let db_path = temp_dir.join(format!("toppdawg_test_{}.db", std::process::id()));

        {
            let store = PrefStore::open(&db_path).unwrap();
            store.set_dark_mode(true).unwrap();
            assert_eq!(store.path(), db_path);
        }

        {
            let store = PrefStore::open(&db_path).unwrap();
            assert!(store.dark_mode().unwrap());
        }

        let _ = std::fs::remove_file(&db_path);
        let _ = std::fs::remove_file(db_path.with_extension("db-wal"));
        let _ = std::fs::remove_file(db_path.with_extension("db-shm"));
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let temp_dir = std::env::temp_dir();
        let nested_path = temp_dir.join(format!(
            "toppdawg_test_{}/nested/prefs.db",
            std::process::id()
        ));

        if let Some(parent) = nested_path.parent() {
            let _ = std::fs::remove_dir_all(parent);
        }

        let store = PrefStore::open(&nested_path).unwrap();
        assert!(nested_path.exists());

        drop(store);
        if let Some(parent) = nested_path.parent() {
            let _ = std::fs::remove_dir_all(parent.parent().unwrap());
        }
    }
}
