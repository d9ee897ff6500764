//! Catalog endpoints: listing, collections, insert, update.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use super::error::ApiError;
use super::state::GuardedCatalogStore;
use crate::catalog_store::{
    parse_music_filter, validate_draft, CatalogEntryDraft, LanguageFilter, UpdateOutcome,
};

#[derive(Debug, Default, Deserialize)]
pub struct CatalogFilterQuery {
    pub language: Option<String>,
    pub music: Option<String>,
}

/// Decode the optional language/music query parameters. Unknown values
/// are rejections, never silently ignored.
fn parse_filters(query: &CatalogFilterQuery) -> Result<(LanguageFilter, Option<bool>), ApiError> {
    let language = match query.language.as_deref() {
        None => LanguageFilter::All,
        Some(value) => LanguageFilter::parse(value)
            .ok_or_else(|| ApiError::new("Invalid language parameter. Use ES, EN or all"))?,
    };
    let music = match query.music.as_deref() {
        None => None,
        Some(value) => Some(
            parse_music_filter(value)
                .ok_or_else(|| ApiError::new("Invalid music parameter. Use true, false, 1 or 0"))?,
        ),
    };
    Ok((language, music))
}

fn filters_echo(language: LanguageFilter, music: Option<bool>) -> Value {
    json!({
        "language": language.as_wire_str(),
        "music": match music {
            Some(music) => json!(music),
            None => json!("all"),
        },
    })
}

fn decode_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match body {
        Ok(Json(decoded)) => Ok(decoded),
        Err(rejection) => Err(ApiError::bad_request(format!(
            "Invalid JSON: {}",
            rejection.body_text()
        ))),
    }
}

/// GET /v1/catalog/videos
pub async fn get_videos(
    State(catalog): State<GuardedCatalogStore>,
    Query(query): Query<CatalogFilterQuery>,
) -> Result<Json<Value>, ApiError> {
    let (language, music) = parse_filters(&query)?;
    let videos = catalog.list_entries(language, music)?;
    Ok(Json(json!({
        "success": true,
        "count": videos.len(),
        "filters": filters_echo(language, music),
        "videos": videos,
    })))
}

/// GET /v1/catalog/collections
pub async fn get_collections(
    State(catalog): State<GuardedCatalogStore>,
    Query(query): Query<CatalogFilterQuery>,
) -> Result<Json<Value>, ApiError> {
    let (language, music) = parse_filters(&query)?;
    let collections = catalog.list_collections(language, music)?;

    let mut body = json!({
        "success": true,
        "count": collections.len(),
        // clients cache the list and invalidate on age
        "timestamp": chrono::Utc::now().timestamp(),
        "collections": collections,
    });
    if query.language.is_some() || query.music.is_some() {
        body["filters"] = filters_echo(language, music);
    }
    Ok(Json(body))
}

/// POST /v1/catalog/videos
pub async fn post_video(
    State(catalog): State<GuardedCatalogStore>,
    body: Result<Json<CatalogEntryDraft>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let draft = decode_body(body)?;
    let entry = validate_draft(&draft)?;
    let persisted = catalog.insert_entry(&entry)?;
    Ok(Json(json!({
        "success": true,
        "message": "Video created successfully",
        "id": persisted.id,
        "data": persisted,
    })))
}

/// PUT /v1/catalog/videos/{id}
pub async fn put_video(
    State(catalog): State<GuardedCatalogStore>,
    Path(id): Path<i64>,
    body: Result<Json<CatalogEntryDraft>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let draft = decode_body(body)?;
    let entry = validate_draft(&draft)?;
    match catalog.update_entry(id, &entry)? {
        UpdateOutcome::NotFound => Err(ApiError::new(format!(
            "The video with ID {} does not exist",
            id
        ))),
        UpdateOutcome::Unchanged => Ok(Json(json!({
            "success": true,
            "message": "Video found but no changes were needed",
            "id": id,
            "affected_rows": 0,
            "note": "The submitted values are identical to the stored ones",
        }))),
        UpdateOutcome::Updated(updated) => Ok(Json(json!({
            "success": true,
            "message": "Video updated successfully",
            "id": id,
            "affected_rows": 1,
            "data": updated,
        }))),
    }
}
