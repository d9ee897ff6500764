mod models;
mod schema;
mod store;
mod trait_def;

pub use models::{minute_timestamp, HistoryRecord};
pub use schema::HISTORY_VERSIONED_SCHEMAS;
pub use store::SqliteHistoryStore;
pub use trait_def::HistoryStore;
