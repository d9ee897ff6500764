mod catalog_routes;
pub mod config;
mod error;
mod history_routes;
mod http_layers;
mod report;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use http_layers::*;
pub use server::{make_app, run_server};
