// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project data source trait and implementations.
//!
//! The polled endpoint is opaque to the view layer: a source yields the
//! latest ordered list of project records, and a failed fetch means "no
//! update this cycle," never a terminal condition.

mod http;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use http::HttpProjectSource;

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeProjectSource;

use async_trait::async_trait;
use quill_core::Project;
use thiserror::Error;

/// Errors from fetching the project list
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid project payload: {0}")]
    Decode(String),
}

/// A periodically-polled read endpoint yielding project records in fetch order
#[async_trait]
pub trait ProjectSource: Send + Sync {
    async fn fetch_projects(&self) -> Result<Vec<Project>, SourceError>;
}
