//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest and
//! provides methods for all videokids-server endpoints.
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::{json, Value};
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

/// A well-formed insert body for the given collection.
pub fn sample_video(collection: &str) -> Value {
    json!({
        "url": format!("https://videos.example/embed/{}", collection.to_lowercase()),
        "cover": format!("{}-10001", collection.to_lowercase()),
        "collection": collection,
        "language": "ES",
        "description": "",
        "tags": "",
        "music": 0,
        "album": "",
        "audience": ""
    })
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    // ========================================================================
    // Catalog Endpoints
    // ========================================================================

    /// GET /v1/catalog/videos with raw query values
    pub async fn get_videos(&self, language: Option<&str>, music: Option<&str>) -> Response {
        let mut request = self
            .client
            .get(format!("{}/v1/catalog/videos", self.base_url));
        if let Some(language) = language {
            request = request.query(&[("language", language)]);
        }
        if let Some(music) = music {
            request = request.query(&[("music", music)]);
        }
        request.send().await.expect("Get videos request failed")
    }

    /// GET /v1/catalog/collections with raw query values
    pub async fn get_collections(&self, language: Option<&str>, music: Option<&str>) -> Response {
        let mut request = self
            .client
            .get(format!("{}/v1/catalog/collections", self.base_url));
        if let Some(language) = language {
            request = request.query(&[("language", language)]);
        }
        if let Some(music) = music {
            request = request.query(&[("music", music)]);
        }
        request
            .send()
            .await
            .expect("Get collections request failed")
    }

    /// POST /v1/catalog/videos
    pub async fn post_video(&self, body: &Value) -> Response {
        self.client
            .post(format!("{}/v1/catalog/videos", self.base_url))
            .json(body)
            .send()
            .await
            .expect("Post video request failed")
    }

    /// PUT /v1/catalog/videos/{id}
    pub async fn put_video(&self, id: i64, body: &Value) -> Response {
        self.client
            .put(format!("{}/v1/catalog/videos/{}", self.base_url, id))
            .json(body)
            .send()
            .await
            .expect("Put video request failed")
    }

    /// Insert a video and return its assigned id.
    pub async fn insert_video(&self, body: &Value) -> i64 {
        let response = self.post_video(body).await;
        let body: Value = response.json().await.expect("Insert response not JSON");
        assert_eq!(body["success"], true, "insert failed: {}", body);
        body["id"].as_i64().expect("Insert response missing id")
    }

    // ========================================================================
    // History Endpoints
    // ========================================================================

    /// POST /v1/history
    pub async fn post_history(&self, body: &Value) -> Response {
        self.client
            .post(format!("{}/v1/history", self.base_url))
            .json(body)
            .send()
            .await
            .expect("Post history request failed")
    }

    /// GET /v1/history/report
    pub async fn get_history_report(&self) -> Response {
        self.client
            .get(format!("{}/v1/history/report", self.base_url))
            .send()
            .await
            .expect("Get history report request failed")
    }
}
