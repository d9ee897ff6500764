mod file_config;

pub use file_config::FileConfig;

use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub catalog_db: Option<PathBuf>,
    pub history_db: Option<PathBuf>,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub history_utc_offset_hours: i32,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog_db: PathBuf,
    pub history_db: PathBuf,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub history_utc_offset_hours: i32,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file
    /// config. TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let catalog_db = file
            .catalog_db
            .map(PathBuf::from)
            .or_else(|| cli.catalog_db.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("catalog_db must be specified on the CLI or in the config file")
            })?;

        let history_db = file
            .history_db
            .map(PathBuf::from)
            .or_else(|| cli.history_db.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("history_db must be specified on the CLI or in the config file")
            })?;

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());

        let history_utc_offset_hours = file
            .history_utc_offset_hours
            .unwrap_or(cli.history_utc_offset_hours);
        if !(-23..=23).contains(&history_utc_offset_hours) {
            bail!(
                "history_utc_offset_hours must be between -23 and 23, got {}",
                history_utc_offset_hours
            );
        }

        Ok(AppConfig {
            catalog_db,
            history_db,
            port,
            logging_level,
            frontend_dir_path,
            history_utc_offset_hours,
        })
    }
}

fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
