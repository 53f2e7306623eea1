// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal rendering for the viewed project and its stage table

use quill_core::{Project, Stage, StageState};
use quill_view::SelectionHandle;

fn stage_marker(state: StageState) -> &'static str {
    match state {
        StageState::Completed => "[x]",
        StageState::Active => "[>]",
        StageState::Pending => "[ ]",
    }
}

/// Render one project with its pipeline stage table
pub fn project_view(project: &Project) -> String {
    let mut out = format!("{} (#{}) [{}]\n", project.title, project.id, project.status);
    for stage in Stage::ALL {
        let state = project.stage_state(stage);
        out.push_str(&format!(
            "  {} {:<12} {}\n",
            stage_marker(state),
            stage.label(),
            state
        ));
    }
    out
}

/// Render the current view state behind a selection handle
pub fn view(handle: &SelectionHandle) -> String {
    match handle.current_project() {
        Some(project) => project_view(&project),
        None => format!(
            "No project selected ({} in flight)\n",
            handle.projects().len()
        ),
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
