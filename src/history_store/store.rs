//! SQLite-backed play-history store.
//!
//! Low write volume and a single full-table read path, so a single
//! mutex-guarded connection is enough; no read pool.

use super::models::HistoryRecord;
use super::schema::HISTORY_VERSIONED_SCHEMAS;
use super::trait_def::HistoryStore;
use crate::sqlite_persistence::BASE_DB_VERSION;
use anyhow::{bail, Context, Result};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub struct SqliteHistoryStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteHistoryStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path.as_ref()).context("Failed to open history database")?;

        let table_count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
                [],
                |r| r.get(0),
            )
            .unwrap_or(0);

        let schema = &HISTORY_VERSIONED_SCHEMAS[HISTORY_VERSIONED_SCHEMAS.len() - 1];
        if table_count == 0 {
            info!("Creating history db schema at version {}", schema.version);
            schema.create(&conn)?;
        } else {
            let db_version: i64 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;
            if db_version < BASE_DB_VERSION as i64 {
                bail!("History database carries no schema version: {:?}", db_path.as_ref());
            }
            schema.validate(&conn)?;
        }
        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(SqliteHistoryStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

impl HistoryStore for SqliteHistoryStore {
    fn append(&self, video_name: &str, played_at: &str) -> Result<HistoryRecord> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare_cached("INSERT INTO play_history (video_name, played_at) VALUES (?1, ?2)")?;
        stmt.execute(params![video_name, played_at])?;
        Ok(HistoryRecord {
            id: conn.last_insert_rowid(),
            video_name: video_name.to_string(),
            played_at: played_at.to_string(),
        })
    }

    fn list_newest_first(&self) -> Result<Vec<HistoryRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare_cached("SELECT id, video_name, played_at FROM play_history ORDER BY id DESC")?;
        let records = stmt
            .query_map([], |row| {
                Ok(HistoryRecord {
                    id: row.get(0)?,
                    video_name: row.get(1)?,
                    played_at: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    fn records_count(&self) -> usize {
        let conn = self.conn.lock().unwrap();
        conn.query_row("SELECT COUNT(*) FROM play_history", [], |r| r.get::<_, i64>(0))
            .unwrap_or(0) as usize
    }
}
