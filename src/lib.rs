//! VideoKids Catalog Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod catalog_store;
pub mod config;
pub mod history_store;
pub mod playback;
pub mod server;
pub mod shelves;
pub mod sqlite_persistence;

// Re-export commonly used types for convenience
pub use catalog_store::{CatalogStore, SqliteCatalogStore};
pub use history_store::{HistoryStore, SqliteHistoryStore};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
