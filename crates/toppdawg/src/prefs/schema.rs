//! `SQLite` schema definitions for the preference store.
//!
//! This module contains the SQL statements for creating and managing
//! the preference database schema.

/// SQL statement to create the prefs table.
pub const CREATE_PREFS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS prefs (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
)
";

/// SQL statement to create the metadata table for storing key-value pairs.
pub const CREATE_METADATA_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[CREATE_PREFS_TABLE, CREATE_METADATA_TABLE];
