// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project records as polled from the generation backend.
//!
//! Records are read-only to the view layer: the backend assigns ids
//! monotonically, so the largest id is always the newest project.

use crate::stage::{stage_state, Stage, StageState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub i64);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProjectId {
    fn from(id: i64) -> Self {
        ProjectId(id)
    }
}

/// Project status as reported by the backend.
///
/// The set of statuses is open-ended; the view layer only distinguishes
/// `archived` (never eligible for default selection) and `generating`
/// (an active pipeline run). Everything else is carried opaquely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectStatus(String);

impl ProjectStatus {
    pub const ARCHIVED: &'static str = "archived";
    pub const GENERATING: &'static str = "generating";

    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    pub fn archived() -> Self {
        Self(Self::ARCHIVED.to_string())
    }

    pub fn generating() -> Self {
        Self(Self::GENERATING.to_string())
    }

    pub fn draft() -> Self {
        Self("draft".to_string())
    }

    pub fn done() -> Self {
        Self("done".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_archived(&self) -> bool {
        self.0 == Self::ARCHIVED
    }

    pub fn is_generating(&self) -> bool {
        self.0 == Self::GENERATING
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProjectStatus {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One in-flight project as reported by the polled endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub status: ProjectStatus,
    /// Stage currently running, absent when no run is in progress
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_stage: Option<Stage>,
    /// Stages that have finished for the current run
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub completed_stages: Vec<Stage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Archived projects are never picked as a default or override selection
    pub fn is_eligible(&self) -> bool {
        !self.status.is_archived()
    }

    /// Display state for one stage of this project's pipeline
    pub fn stage_state(&self, stage: Stage) -> StageState {
        stage_state(stage, self.active_stage, &self.completed_stages)
    }
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
