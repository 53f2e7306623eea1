// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline stages and their display-state derivation

use serde::{Deserialize, Serialize};
use std::fmt;

/// One stage of the content-generation pipeline, in run order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Architect,
    Ghostwriter,
    Editor,
    Copyeditor,
}

impl Stage {
    /// All stages in pipeline order
    pub const ALL: [Stage; 4] = [
        Stage::Architect,
        Stage::Ghostwriter,
        Stage::Editor,
        Stage::Copyeditor,
    ];

    /// Wire name as used by the backend
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Architect => "architect",
            Stage::Ghostwriter => "ghostwriter",
            Stage::Editor => "editor",
            Stage::Copyeditor => "copyeditor",
        }
    }

    /// Human-readable heading for display
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Architect => "Architect",
            Stage::Ghostwriter => "Ghostwriter",
            Stage::Editor => "Editor",
            Stage::Copyeditor => "Copyeditor",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Display state of a stage within a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageState {
    Completed,
    Active,
    Pending,
}

impl StageState {
    pub fn name(&self) -> &'static str {
        match self {
            StageState::Completed => "completed",
            StageState::Active => "active",
            StageState::Pending => "pending",
        }
    }
}

impl fmt::Display for StageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Derive the display state for one stage.
///
/// Completion wins over activity: a stage that is both completed and
/// nominally active renders as completed.
pub fn stage_state(stage: Stage, active: Option<Stage>, completed: &[Stage]) -> StageState {
    if completed.contains(&stage) {
        StageState::Completed
    } else if active == Some(stage) {
        StageState::Active
    } else {
        StageState::Pending
    }
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;
