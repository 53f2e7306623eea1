// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced source wrapper for consistent observability

use crate::source::{ProjectSource, SourceError};
use async_trait::async_trait;
use quill_core::Project;
use tracing::Instrument;

/// Wrapper that adds tracing to any ProjectSource
#[derive(Clone)]
pub struct TracedProjectSource<S> {
    inner: S,
}

impl<S> TracedProjectSource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: ProjectSource> ProjectSource for TracedProjectSource<S> {
    async fn fetch_projects(&self) -> Result<Vec<Project>, SourceError> {
        let span = tracing::debug_span!("source.fetch");

        let start = std::time::Instant::now();
        let result = self.inner.fetch_projects().instrument(span).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(projects) => tracing::debug!(
                count = projects.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "projects fetched"
            ),
            Err(e) => tracing::warn!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "fetch failed"
            ),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
