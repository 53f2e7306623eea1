// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake project source for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ProjectSource, SourceError};
use async_trait::async_trait;
use quill_core::Project;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Script {
    queue: VecDeque<Result<Vec<Project>, SourceError>>,
    last: Option<Vec<Project>>,
    fetches: usize,
}

/// Fake project source driven by a script of snapshots and errors.
///
/// Each fetch pops the next scripted result; once the script runs out, the
/// last successful snapshot is replayed (a steady backend). A fetch before
/// any snapshot was scripted fails with a transport error.
#[derive(Clone, Default)]
pub struct FakeProjectSource {
    script: Arc<Mutex<Script>>,
}

impl FakeProjectSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful snapshot
    pub fn push_snapshot(&self, projects: Vec<Project>) {
        self.script().queue.push_back(Ok(projects));
    }

    /// Queue a failed poll
    pub fn push_error(&self, error: SourceError) {
        self.script().queue.push_back(Err(error));
    }

    /// Number of fetches performed so far
    pub fn fetch_count(&self) -> usize {
        self.script().fetches
    }

    fn script(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl ProjectSource for FakeProjectSource {
    async fn fetch_projects(&self) -> Result<Vec<Project>, SourceError> {
        let mut script = self.script();
        script.fetches += 1;

        match script.queue.pop_front() {
            Some(Ok(projects)) => {
                script.last = Some(projects.clone());
                Ok(projects)
            }
            Some(Err(error)) => Err(error),
            None => script
                .last
                .clone()
                .ok_or_else(|| SourceError::Transport("no snapshot scripted".to_string())),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
