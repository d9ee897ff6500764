//! HistoryStore trait definition.

use super::models::HistoryRecord;
use anyhow::Result;

pub trait HistoryStore: Send + Sync {
    /// Append a playback event. `played_at` is the already-formatted
    /// minute-granularity timestamp; callers validate the name first.
    fn append(&self, video_name: &str, played_at: &str) -> Result<HistoryRecord>;

    /// All records, newest first. The report view has no pagination.
    fn list_newest_first(&self) -> Result<Vec<HistoryRecord>>;

    /// Number of logged events (startup logging).
    fn records_count(&self) -> usize;
}
