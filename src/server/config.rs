use super::RequestsLoggingLevel;
use chrono::FixedOffset;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub requests_logging_level: RequestsLoggingLevel,
    /// When set, the directory is served statically with index fallback.
    pub frontend_dir_path: Option<String>,
    /// Fixed UTC offset, in hours, used to timestamp play-history rows.
    /// Range-checked at config resolution.
    pub history_utc_offset_hours: i32,
}

impl ServerConfig {
    pub fn history_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.history_utc_offset_hours * 3600)
            .expect("offset hours validated at config resolution")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: 3001,
            requests_logging_level: RequestsLoggingLevel::default(),
            frontend_dir_path: None,
            history_utc_offset_hours: -6,
        }
    }
}
