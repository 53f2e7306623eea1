// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP project source

use super::{ProjectSource, SourceError};
use async_trait::async_trait;
use quill_core::Project;

/// Fetches project records from an HTTP endpoint returning a JSON array
pub struct HttpProjectSource {
    url: String,
}

impl HttpProjectSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ProjectSource for HttpProjectSource {
    async fn fetch_projects(&self) -> Result<Vec<Project>, SourceError> {
        let url = self.url.clone();

        // ureq is blocking; keep it off the event loop
        let body = tokio::task::spawn_blocking(move || fetch_body(&url))
            .await
            .map_err(|e| SourceError::Transport(format!("fetch task failed: {}", e)))??;

        decode_projects(&body)
    }
}

fn fetch_body(url: &str) -> Result<String, SourceError> {
    let mut response = ureq::get(url)
        .call()
        .map_err(|e| SourceError::Transport(format!("HTTP request failed: {}", e)))?;

    response
        .body_mut()
        .read_to_string()
        .map_err(|e| SourceError::Transport(format!("failed to read response: {}", e)))
}

fn decode_projects(body: &str) -> Result<Vec<Project>, SourceError> {
    serde_json::from_str(body).map_err(|e| SourceError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
