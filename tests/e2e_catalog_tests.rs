//! End-to-end tests for the catalog endpoints
//!
//! Covers listing with filters, insert validation, and the three-way
//! update outcome (missing id / unchanged / updated).

mod common;

use common::{sample_video, TestClient, TestServer};
use reqwest::StatusCode;
use serde_json::{json, Value};

// =============================================================================
// GET /v1/catalog/videos
// =============================================================================

#[tokio::test]
async fn listing_an_empty_catalog_succeeds() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_videos(None, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 0);
    assert_eq!(body["filters"]["language"], "all");
    assert_eq!(body["filters"]["music"], "all");
    assert_eq!(body["videos"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn listing_orders_by_collection_then_id_and_coerces_music() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    client.insert_video(&sample_video("Pocoyo")).await;
    let mut musical = sample_video("Cantajuegos");
    musical["music"] = json!(1);
    client.insert_video(&musical).await;
    client.insert_video(&sample_video("Bluey")).await;

    let body: Value = client.get_videos(None, None).await.json().await.unwrap();
    assert_eq!(body["count"], 3);

    let videos = body["videos"].as_array().unwrap();
    let collections: Vec<&str> = videos
        .iter()
        .map(|v| v["collection"].as_str().unwrap())
        .collect();
    assert_eq!(collections, vec!["Bluey", "Cantajuegos", "Pocoyo"]);

    // the music flag is a JSON boolean on the way out
    assert_eq!(videos[1]["music"], json!(true));
    assert_eq!(videos[0]["music"], json!(false));
}

#[tokio::test]
async fn language_and_music_filters_compose() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let mut english = sample_video("Bluey");
    english["language"] = json!("EN");
    client.insert_video(&english).await;

    let mut spanish_music = sample_video("Cantajuegos");
    spanish_music["music"] = json!(1);
    client.insert_video(&spanish_music).await;

    client.insert_video(&sample_video("Pocoyo")).await;

    let body: Value = client
        .get_videos(Some("ES"), None)
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["count"], 2);
    assert_eq!(body["filters"]["language"], "ES");

    let body: Value = client
        .get_videos(Some("ES"), Some("true"))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["count"], 1);
    assert_eq!(body["filters"]["music"], json!(true));
    assert_eq!(body["videos"][0]["collection"], "Cantajuegos");

    // numeric music values are accepted too
    let body: Value = client
        .get_videos(None, Some("0"))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn unknown_filter_values_are_errors_not_empty_lists() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());
    client.insert_video(&sample_video("Bluey")).await;

    let body: Value = client
        .get_videos(Some("FR"), None)
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("language"));
    assert!(body.get("videos").is_none());

    let body: Value = client
        .get_videos(None, Some("maybe"))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("music"));
}

// =============================================================================
// POST /v1/catalog/videos
// =============================================================================

#[tokio::test]
async fn insert_echoes_the_persisted_record() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let mut body = sample_video("Bluey");
    body["title"] = json!("Keepy Uppy");
    body["tags"] = json!("dogs, games");

    let response = client.post_video(&body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["id"], 1);
    assert_eq!(body["data"]["collection"], "Bluey");
    assert_eq!(body["data"]["title"], "Keepy Uppy");
    assert_eq!(body["data"]["music"], json!(false));
}

#[tokio::test]
async fn insert_requires_url_cover_and_collection() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    for field in ["url", "cover", "collection"] {
        let mut body = sample_video("Bluey");
        body[field] = json!("   ");
        let response: Value = client.post_video(&body).await.json().await.unwrap();
        assert_eq!(response["success"], false, "field {}", field);
        assert!(response["error"].as_str().unwrap().contains(field));
    }

    // nothing was stored
    let body: Value = client.get_videos(None, None).await.json().await.unwrap();
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn insert_rejects_bad_language_and_music_values() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let mut body = sample_video("Bluey");
    body["language"] = json!("IT");
    let response: Value = client.post_video(&body).await.json().await.unwrap();
    assert_eq!(response["success"], false);
    assert!(response["error"].as_str().unwrap().contains("ES or EN"));

    let mut body = sample_video("Bluey");
    body["music"] = json!(2);
    let response: Value = client.post_video(&body).await.json().await.unwrap();
    assert_eq!(response["success"], false);
    assert!(response["error"].as_str().unwrap().contains("0 or 1"));
}

#[tokio::test]
async fn malformed_json_bodies_are_bad_requests() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client
        .client
        .post(format!("{}/v1/catalog/videos", client.base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("Invalid JSON"));
}

// =============================================================================
// PUT /v1/catalog/videos/{id}
// =============================================================================

#[tokio::test]
async fn update_with_unknown_id_is_an_error_and_writes_nothing() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response: Value = client
        .put_video(42, &sample_video("Bluey"))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(response["success"], false);
    assert!(response["error"].as_str().unwrap().contains("42"));
    assert!(response["error"].as_str().unwrap().contains("does not exist"));

    let body: Value = client.get_videos(None, None).await.json().await.unwrap();
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn update_with_identical_values_reports_zero_affected_rows() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let body = sample_video("Bluey");
    let id = client.insert_video(&body).await;

    let response: Value = client.put_video(id, &body).await.json().await.unwrap();
    assert_eq!(response["success"], true);
    assert_eq!(response["affected_rows"], 0);
    assert!(response["note"].as_str().unwrap().contains("identical"));
}

#[tokio::test]
async fn update_rewrites_the_row_and_echoes_it() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let id = client.insert_video(&sample_video("Bluey")).await;

    let mut changed = sample_video("Bluey");
    changed["language"] = json!("EN");
    changed["music"] = json!(1);
    changed["album"] = json!("bluey-10001-a");

    let response: Value = client.put_video(id, &changed).await.json().await.unwrap();
    assert_eq!(response["success"], true);
    assert_eq!(response["affected_rows"], 1);
    assert_eq!(response["data"]["language"], "EN");
    assert_eq!(response["data"]["music"], json!(true));
    assert_eq!(response["data"]["album"], "bluey-10001-a");

    let body: Value = client.get_videos(None, None).await.json().await.unwrap();
    assert_eq!(body["videos"][0]["language"], "EN");
}

#[tokio::test]
async fn update_validates_like_insert() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let id = client.insert_video(&sample_video("Bluey")).await;

    let mut bad = sample_video("Bluey");
    bad["language"] = json!("DE");
    let response: Value = client.put_video(id, &bad).await.json().await.unwrap();
    assert_eq!(response["success"], false);

    // the stored row is untouched
    let body: Value = client.get_videos(None, None).await.json().await.unwrap();
    assert_eq!(body["videos"][0]["language"], "ES");
}
