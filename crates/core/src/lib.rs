// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Quill domain model: projects and pipeline stages

mod project;
mod stage;

pub use project::{Project, ProjectId, ProjectStatus};
pub use stage::{stage_state, Stage, StageState};
