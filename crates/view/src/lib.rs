// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! View-layer state for the generation pipeline UI.
//!
//! Two independent components with no shared state: the project selection
//! synchronizer (which project is being viewed, reconciled against polled
//! snapshots) and the confirmation bridge (imperative confirm calls turned
//! into renderable dialog state).

mod confirm;
mod selection;
mod watcher;

pub use confirm::{
    ConfirmBridge, ConfirmError, ConfirmOptions, ConfirmSurface, ConfirmVariant, Decision,
};
pub use selection::{ProjectSelection, SelectionChange};
pub use watcher::{poll_interval, ProjectWatcher, SelectionHandle, DEFAULT_POLL_INTERVAL};
