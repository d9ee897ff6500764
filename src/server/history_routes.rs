//! Play-history endpoints: the JSON logging endpoint and the HTML report.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use super::error::ApiError;
use super::report::render_history_report;
use super::state::{GuardedHistoryStore, ServerState};
use crate::history_store::minute_timestamp;

#[derive(Debug, Deserialize)]
pub struct LogPlayBody {
    pub video_name: Option<String>,
}

/// POST /v1/history
pub async fn post_history(
    State(state): State<ServerState>,
    body: Result<Json<LogPlayBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            return Err(ApiError::bad_request(format!(
                "Invalid JSON: {}",
                rejection.body_text()
            )))
        }
    };

    let video_name = body.video_name.as_deref().map(str::trim).unwrap_or("");
    if video_name.is_empty() {
        return Err(ApiError::new("video_name is required and cannot be blank"));
    }

    let played_at = minute_timestamp(Utc::now(), state.config.history_offset());
    let record = state.history_store.append(video_name, &played_at)?;
    Ok(Json(json!({
        "success": true,
        "message": "Play event recorded",
        "data": record,
    })))
}

/// GET /v1/history/report
pub async fn get_history_report(
    State(history): State<GuardedHistoryStore>,
) -> Result<Html<String>, ApiError> {
    let records = history.list_newest_first()?;
    Ok(Html(render_history_report(&records)))
}
