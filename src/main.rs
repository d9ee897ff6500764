use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use videokids_server::config::{AppConfig, CliConfig, FileConfig};
use videokids_server::{
    run_server, CatalogStore, HistoryStore, RequestsLoggingLevel, ServerConfig,
    SqliteCatalogStore, SqliteHistoryStore,
};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the SQLite catalog database file.
    #[clap(value_parser = parse_path)]
    pub catalog_db: Option<PathBuf>,

    /// Path to the SQLite play-history database file.
    #[clap(value_parser = parse_path)]
    pub history_db: Option<PathBuf>,

    /// Path to a TOML config file. Values there override the CLI.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// Fixed UTC offset, in hours, used to timestamp play-history rows.
    #[clap(long, default_value_t = -6, allow_hyphen_values = true)]
    pub history_utc_offset_hours: i32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };

    let cli_config = CliConfig {
        catalog_db: cli_args.catalog_db,
        history_db: cli_args.history_db,
        port: cli_args.port,
        logging_level: cli_args.logging_level,
        frontend_dir_path: cli_args.frontend_dir_path,
        history_utc_offset_hours: cli_args.history_utc_offset_hours,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    info!("Opening SQLite catalog database at {:?}...", config.catalog_db);
    let catalog_store = Arc::new(SqliteCatalogStore::new(&config.catalog_db)?);

    info!("Opening SQLite history database at {:?}...", config.history_db);
    let history_store = Arc::new(SqliteHistoryStore::new(&config.history_db)?);

    info!(
        "Catalog holds {} entries, history holds {} plays",
        catalog_store.entries_count(),
        history_store.records_count(),
    );

    let server_config = ServerConfig {
        port: config.port,
        requests_logging_level: config.logging_level,
        frontend_dir_path: config.frontend_dir_path,
        history_utc_offset_hours: config.history_utc_offset_hours,
    };

    info!("Ready to serve at port {}!", server_config.port);
    run_server(server_config, catalog_store, history_store).await
}
