//! SQLite schema for the video catalog database.
//!
//! A single flat table: one row per playable entry, grouped by the
//! free-form `collection` column. Rows are never deleted.

use crate::sqlite_column;
use crate::sqlite_persistence::{Column, SqlType, Table, VersionedSchema};

const VIDEOS_TABLE: Table = Table {
    name: "videos",
    columns: &[
        sqlite_column!("id", SqlType::Integer, is_primary_key = true),
        sqlite_column!("url", SqlType::Text, non_null = true),
        sqlite_column!("cover", SqlType::Text, non_null = true),
        sqlite_column!("collection", SqlType::Text, non_null = true),
        sqlite_column!("language", SqlType::Text, non_null = true), // 'ES' | 'EN'
        sqlite_column!("title", SqlType::Text),
        sqlite_column!(
            "description",
            SqlType::Text,
            non_null = true,
            default_value = Some("''")
        ),
        sqlite_column!(
            "tags",
            SqlType::Text,
            non_null = true,
            default_value = Some("''")
        ),
        sqlite_column!(
            "music",
            SqlType::Integer,
            non_null = true,
            default_value = Some("0")
        ), // strict 0/1
        sqlite_column!(
            "album",
            SqlType::Text,
            non_null = true,
            default_value = Some("''")
        ),
        sqlite_column!(
            "audience",
            SqlType::Text,
            non_null = true,
            default_value = Some("''")
        ),
    ],
    indices: &[
        ("idx_videos_collection", "collection"),
        ("idx_videos_language", "language"),
    ],
};

pub const CATALOG_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 0,
    tables: &[VIDEOS_TABLE],
    migration: None,
}];
