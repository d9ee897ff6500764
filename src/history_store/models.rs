//! Play-history models.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// A logged playback event. `played_at` is already formatted at minute
/// granularity (`YYYY-MM-DD HH:MM:00`) in the server's configured offset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: i64,
    pub video_name: String,
    pub played_at: String,
}

/// Format an instant at minute granularity in the given fixed offset.
/// Seconds are pinned to `:00` rather than rounded.
pub fn minute_timestamp(instant: DateTime<Utc>, offset: FixedOffset) -> String {
    instant
        .with_timezone(&offset)
        .format("%Y-%m-%d %H:%M:00")
        .to_string()
}
