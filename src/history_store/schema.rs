//! SQLite schema for the play-history database.
//!
//! Append-only: rows are inserted by the logging endpoint and read back
//! only by the HTML report, newest-first.

use crate::sqlite_column;
use crate::sqlite_persistence::{Column, SqlType, Table, VersionedSchema};

const PLAY_HISTORY_TABLE: Table = Table {
    name: "play_history",
    columns: &[
        sqlite_column!("id", SqlType::Integer, is_primary_key = true),
        sqlite_column!("video_name", SqlType::Text, non_null = true),
        sqlite_column!("played_at", SqlType::Text, non_null = true), // 'YYYY-MM-DD HH:MM:00'
    ],
    indices: &[],
};

pub const HISTORY_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 0,
    tables: &[PLAY_HISTORY_TABLE],
    migration: None,
}];
