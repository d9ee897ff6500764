//! SQLite-backed catalog store implementation.

use super::models::*;
use super::schema::CATALOG_VERSIONED_SCHEMAS;
use super::trait_def::CatalogStore;
use crate::sqlite_persistence::BASE_DB_VERSION;
use anyhow::{Context, Result};
use rusqlite::{params, params_from_iter, types::Value, Connection};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::info;

const READ_POOL_SIZE: usize = 4;

#[derive(Clone)]
pub struct SqliteCatalogStore {
    read_pool: Vec<Arc<Mutex<Connection>>>,
    write_conn: Arc<Mutex<Connection>>,
    read_index: Arc<AtomicUsize>,
}

fn migrate_if_needed(conn: &mut Connection) -> Result<()> {
    let db_version: i64 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;

    let latest_version = CATALOG_VERSIONED_SCHEMAS.len() - 1;
    let latest_schema = &CATALOG_VERSIONED_SCHEMAS[latest_version];

    let table_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
            [],
            |r| r.get(0),
        )
        .unwrap_or(0);

    if table_count == 0 {
        info!("Creating catalog db schema at version {}", latest_version);
        latest_schema.create(conn)?;
        return Ok(());
    }

    let mut current_version = if db_version < BASE_DB_VERSION as i64 {
        0
    } else {
        (db_version - BASE_DB_VERSION as i64) as usize
    };

    if current_version >= latest_version {
        latest_schema.validate(conn)?;
        return Ok(());
    }

    let tx = conn.transaction()?;
    for schema in CATALOG_VERSIONED_SCHEMAS.iter().skip(current_version + 1) {
        if let Some(migration_fn) = schema.migration {
            info!(
                "Migrating catalog db from version {} to {}",
                current_version, schema.version
            );
            migration_fn(&tx)?;
            current_version = schema.version;
        }
    }
    tx.pragma_update(None, "user_version", BASE_DB_VERSION + current_version)?;
    tx.commit()?;
    Ok(())
}

/// Append the language/music predicates to a query, collecting the bound
/// values. `sql` must already end in a WHERE clause.
fn push_filters(
    sql: &mut String,
    bound: &mut Vec<Value>,
    language: LanguageFilter,
    music: Option<bool>,
) {
    if let LanguageFilter::Only(language) = language {
        sql.push_str(&format!(" AND language = ?{}", bound.len() + 1));
        bound.push(Value::from(language.to_db_str().to_string()));
    }
    if let Some(music) = music {
        sql.push_str(&format!(" AND music = ?{}", bound.len() + 1));
        bound.push(Value::from(music as i64));
    }
}

impl SqliteCatalogStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path_ref = db_path.as_ref();

        let mut write_conn = Connection::open_with_flags(
            db_path_ref,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI
                | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .context("Failed to open catalog database")?;

        migrate_if_needed(&mut write_conn)?;
        write_conn.pragma_update(None, "journal_mode", "WAL")?;

        let entry_count: i64 = write_conn
            .query_row("SELECT COUNT(*) FROM videos", [], |r| r.get(0))
            .unwrap_or(0);
        info!("Opened video catalog: {} entries", entry_count);

        let mut read_pool = Vec::with_capacity(READ_POOL_SIZE);
        for _ in 0..READ_POOL_SIZE {
            let read_conn = Connection::open_with_flags(
                db_path_ref,
                rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY
                    | rusqlite::OpenFlags::SQLITE_OPEN_URI
                    | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )?;
            read_conn.pragma_update(None, "journal_mode", "WAL")?;
            read_pool.push(Arc::new(Mutex::new(read_conn)));
        }

        Ok(SqliteCatalogStore {
            write_conn: Arc::new(Mutex::new(write_conn)),
            read_pool,
            read_index: Arc::new(AtomicUsize::new(0)),
        })
    }

    fn get_read_conn(&self) -> Arc<Mutex<Connection>> {
        let index = self.read_index.fetch_add(1, Ordering::SeqCst) % self.read_pool.len();
        self.read_pool[index].clone()
    }

    fn parse_entry_row(row: &rusqlite::Row) -> rusqlite::Result<CatalogEntry> {
        let language: String = row.get(4)?;
        Ok(CatalogEntry {
            id: row.get(0)?,
            url: row.get(1)?,
            cover: row.get(2)?,
            collection: row.get(3)?,
            // unexpected values can only come from manual edits; surface them
            language: Language::from_db_str(&language).ok_or_else(|| {
                rusqlite::Error::InvalidColumnType(
                    4,
                    "language".to_string(),
                    rusqlite::types::Type::Text,
                )
            })?,
            title: row.get(5)?,
            description: row.get(6)?,
            tags: row.get(7)?,
            music: row.get::<_, i64>(8)? != 0,
            album: row.get(9)?,
            audience: row.get(10)?,
        })
    }

    fn get_entry_with_conn(conn: &Connection, id: i64) -> Result<Option<CatalogEntry>> {
        let mut stmt = conn.prepare_cached(
            "SELECT id, url, cover, collection, language, title, description, tags, music, album, audience
             FROM videos WHERE id = ?1",
        )?;
        match stmt.query_row(params![id], Self::parse_entry_row) {
            Ok(entry) => Ok(Some(entry)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Whether a stored row already holds exactly the submitted values.
fn row_matches(stored: &CatalogEntry, submitted: &ValidatedEntry) -> bool {
    stored.url == submitted.url
        && stored.cover == submitted.cover
        && stored.collection == submitted.collection
        && stored.language == submitted.language
        && stored.title == submitted.title
        && stored.description == submitted.description
        && stored.tags == submitted.tags
        && stored.music == submitted.music
        && stored.album == submitted.album
        && stored.audience == submitted.audience
}

impl CatalogStore for SqliteCatalogStore {
    fn list_entries(
        &self,
        language: LanguageFilter,
        music: Option<bool>,
    ) -> Result<Vec<CatalogEntry>> {
        let read_conn = self.get_read_conn();
        let conn = read_conn.lock().unwrap();

        let mut sql = String::from(
            "SELECT id, url, cover, collection, language, title, description, tags, music, album, audience
             FROM videos WHERE 1=1",
        );
        let mut bound: Vec<Value> = Vec::new();
        push_filters(&mut sql, &mut bound, language, music);
        sql.push_str(" ORDER BY collection, id");

        let mut stmt = conn.prepare_cached(&sql)?;
        let entries = stmt
            .query_map(params_from_iter(bound), Self::parse_entry_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    fn list_collections(
        &self,
        language: LanguageFilter,
        music: Option<bool>,
    ) -> Result<Vec<String>> {
        let read_conn = self.get_read_conn();
        let conn = read_conn.lock().unwrap();

        let mut sql = String::from("SELECT DISTINCT collection FROM videos WHERE collection != ''");
        let mut bound: Vec<Value> = Vec::new();
        push_filters(&mut sql, &mut bound, language, music);
        sql.push_str(" ORDER BY collection ASC");

        let mut stmt = conn.prepare_cached(&sql)?;
        let collections = stmt
            .query_map(params_from_iter(bound), |r| r.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(collections)
    }

    fn get_entry(&self, id: i64) -> Result<Option<CatalogEntry>> {
        let read_conn = self.get_read_conn();
        let conn = read_conn.lock().unwrap();
        Self::get_entry_with_conn(&conn, id)
    }

    fn insert_entry(&self, entry: &ValidatedEntry) -> Result<CatalogEntry> {
        let conn = self.write_conn.lock().unwrap();
        let mut stmt = conn.prepare_cached(
            "INSERT INTO videos (url, cover, collection, language, title, description, tags, music, album, audience)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        )?;
        stmt.execute(params![
            entry.url,
            entry.cover,
            entry.collection,
            entry.language.to_db_str(),
            entry.title,
            entry.description,
            entry.tags,
            entry.music as i64,
            entry.album,
            entry.audience,
        ])?;
        let id = conn.last_insert_rowid();
        Ok(entry.clone().into_entry(id))
    }

    fn update_entry(&self, id: i64, entry: &ValidatedEntry) -> Result<UpdateOutcome> {
        let conn = self.write_conn.lock().unwrap();

        let stored = match Self::get_entry_with_conn(&conn, id)? {
            Some(stored) => stored,
            None => return Ok(UpdateOutcome::NotFound),
        };
        if row_matches(&stored, entry) {
            return Ok(UpdateOutcome::Unchanged);
        }

        let mut stmt = conn.prepare_cached(
            "UPDATE videos SET url = ?1, cover = ?2, collection = ?3, language = ?4, title = ?5,
                    description = ?6, tags = ?7, music = ?8, album = ?9, audience = ?10
             WHERE id = ?11",
        )?;
        stmt.execute(params![
            entry.url,
            entry.cover,
            entry.collection,
            entry.language.to_db_str(),
            entry.title,
            entry.description,
            entry.tags,
            entry.music as i64,
            entry.album,
            entry.audience,
            id,
        ])?;
        Ok(UpdateOutcome::Updated(entry.clone().into_entry(id)))
    }

    fn entries_count(&self) -> usize {
        let conn = self.write_conn.lock().unwrap();
        conn.query_row("SELECT COUNT(*) FROM videos", [], |r| r.get::<_, i64>(0))
            .unwrap_or(0) as usize
    }
}
