use anyhow::Result;
use std::time::{Duration, Instant};

use axum::{
    extract::State,
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use super::catalog_routes::{get_collections, get_videos, post_video, put_video};
use super::history_routes::{get_history_report, post_history};
use super::state::*;
use super::{log_requests, ServerConfig};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> Json<ServerStats> {
    Json(ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
    })
}

pub fn make_app(
    config: ServerConfig,
    catalog_store: GuardedCatalogStore,
    history_store: GuardedHistoryStore,
) -> Router {
    let state = ServerState {
        config: config.clone(),
        start_time: Instant::now(),
        catalog_store,
        history_store,
        hash: env!("GIT_HASH").to_string(),
    };

    let catalog_routes: Router = Router::new()
        .route("/videos", get(get_videos))
        .route("/videos", post(post_video))
        .route("/videos/{id}", put(put_video))
        .route("/collections", get(get_collections))
        .with_state(state.clone());

    let history_routes: Router = Router::new()
        .route("/v1/history", post(post_history))
        .route("/v1/history/report", get(get_history_report))
        .with_state(state.clone());

    let home_router: Router = match &config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(home))
            .with_state(state.clone()),
    };

    // every endpoint is reachable from the embedded SPA regardless of origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    home_router
        .nest("/v1/catalog", catalog_routes)
        .merge(history_routes)
        .layer(cors)
        .layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(
    config: ServerConfig,
    catalog_store: GuardedCatalogStore,
    history_store: GuardedHistoryStore,
) -> Result<()> {
    let port = config.port;
    let app = make_app(config, catalog_store, history_store);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    info!("Listening on 127.0.0.1:{}", port);

    Ok(axum::serve(listener, app).await?)
}
