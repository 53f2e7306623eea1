// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Polling loop that feeds the selection synchronizer.
//!
//! The watcher owns the poll cadence; the [`SelectionHandle`] it hands out is
//! the only way to reach selection state, so there is no provider/global
//! lookup to misuse. A failed poll keeps the last-known snapshot in place.

use crate::selection::{ProjectSelection, SelectionChange};
use quill_adapters::{ProjectSource, SourceError};
use quill_core::{Project, ProjectId};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};

/// Reference poll cadence
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Poll interval, overridable via `QUILL_POLL_INTERVAL_MS`
pub fn poll_interval() -> Duration {
    parse_duration_ms("QUILL_POLL_INTERVAL_MS").unwrap_or(DEFAULT_POLL_INTERVAL)
}

/// Cloneable accessor for the shared selection state.
///
/// Every method takes the lock internally; all transitions remain
/// single-writer synchronous passes inside the lock.
#[derive(Clone)]
pub struct SelectionHandle {
    inner: Arc<Mutex<ProjectSelection>>,
}

impl SelectionHandle {
    /// Explicit user selection; returns the transitions it caused
    pub fn select(&self, id: Option<ProjectId>) -> Vec<SelectionChange> {
        self.lock().select(id)
    }

    pub fn selected_id(&self) -> Option<ProjectId> {
        self.lock().selected_id()
    }

    pub fn current_project(&self) -> Option<Project> {
        self.lock().current_project().cloned()
    }

    pub fn projects(&self) -> Vec<Project> {
        self.lock().projects().to_vec()
    }

    /// True until the first successful poll; a failed poll never resets this
    pub fn is_loading(&self) -> bool {
        self.lock().is_loading()
    }

    fn lock(&self) -> MutexGuard<'_, ProjectSelection> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Interval-driven poller that reconciles each snapshot into the selection
pub struct ProjectWatcher<S> {
    source: S,
    interval: Duration,
    state: Arc<Mutex<ProjectSelection>>,
}

impl<S: ProjectSource> ProjectWatcher<S> {
    /// Create a watcher and the handle through which its state is read
    pub fn new(source: S, interval: Duration) -> (Self, SelectionHandle) {
        let state = Arc::new(Mutex::new(ProjectSelection::new()));
        let handle = SelectionHandle {
            inner: Arc::clone(&state),
        };
        (
            Self {
                source,
                interval,
                state,
            },
            handle,
        )
    }

    /// One poll: fetch, apply, reconcile.
    ///
    /// Transport errors bubble up to the caller; the prior snapshot and the
    /// loading flag are left untouched.
    pub async fn poll_once(&self) -> Result<Vec<SelectionChange>, SourceError> {
        let projects = self.source.fetch_projects().await?;
        let changes = self
            .state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .apply_snapshot(projects);

        for change in &changes {
            match change {
                SelectionChange::AdoptedDefault { id } => {
                    tracing::info!(project_id = %id, "adopted default selection");
                }
                SelectionChange::FollowedGenerating { id } => {
                    tracing::info!(project_id = %id, "following generating project");
                }
                SelectionChange::Selected { id } => {
                    tracing::debug!(project_id = ?id, "selection set");
                }
            }
        }

        Ok(changes)
    }

    /// Poll on the configured interval until the shutdown flag flips.
    ///
    /// A failed poll is "no update this cycle": logged at warn, never fatal.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = self.poll_once().await {
                        tracing::warn!(error = %e, "poll failed; keeping last snapshot");
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::info!("project watcher stopping");
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "watcher_tests.rs"]
mod tests;
