// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Confirmation bridge.
//!
//! Turns an imperative `confirm(options)` call into dialog state a renderer
//! can draw, and settles the caller's pending decision when the user commits.
//! Single-flight by overwrite: at most one request is pending, and a new
//! `confirm` call replaces an open one. The superseded (or dismissed)
//! decision settles with [`ConfirmError::Abandoned`] rather than hanging
//! forever; dropping the resolver is the explicit cancellation signal.

use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tokio::sync::oneshot;

const DEFAULT_CONFIRM_TEXT: &str = "Confirm";
const DEFAULT_CANCEL_TEXT: &str = "Cancel";

/// Visual intent of the confirm action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmVariant {
    #[default]
    Default,
    Destructive,
}

/// Options for one confirmation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmOptions {
    pub title: String,
    pub description: String,
    pub confirm_text: Option<String>,
    pub cancel_text: Option<String>,
    pub variant: ConfirmVariant,
}

impl ConfirmOptions {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            confirm_text: None,
            cancel_text: None,
            variant: ConfirmVariant::Default,
        }
    }

    pub fn with_confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    pub fn with_cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    pub fn destructive(mut self) -> Self {
        self.variant = ConfirmVariant::Destructive;
        self
    }
}

/// Snapshot of the open dialog for a renderer; `None` from
/// [`ConfirmBridge::surface`] means no dialog is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmSurface {
    pub title: String,
    pub description: String,
    pub confirm_text: String,
    pub cancel_text: String,
    pub variant: ConfirmVariant,
}

/// Why a decision settled without an affirmative answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfirmError {
    /// The request was dismissed by the user or superseded by a newer call
    #[error("confirmation request was dismissed or superseded")]
    Abandoned,
}

/// The caller's half of one confirmation request
#[derive(Debug)]
pub struct Decision {
    rx: oneshot::Receiver<bool>,
}

impl Decision {
    /// Wait for the user's decision.
    ///
    /// Settles `Ok(true)` exactly once per committed request. There is no
    /// negative answer: dismissal and supersession both settle with
    /// [`ConfirmError::Abandoned`].
    pub async fn outcome(self) -> Result<bool, ConfirmError> {
        self.rx.await.map_err(|_| ConfirmError::Abandoned)
    }
}

struct PendingRequest {
    options: ConfirmOptions,
    resolver: oneshot::Sender<bool>,
}

/// Imperative-to-declarative confirmation bridge.
///
/// Cloneable handle over a single pending-request slot; clone it into
/// whichever component mounts the dialog renderer.
#[derive(Clone, Default)]
pub struct ConfirmBridge {
    pending: Arc<Mutex<Option<PendingRequest>>>,
}

impl ConfirmBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request user confirmation; returns immediately.
    ///
    /// If a request is already open, its options and resolver are replaced
    /// and the prior decision settles as abandoned.
    pub fn confirm(&self, options: ConfirmOptions) -> Decision {
        let (tx, rx) = oneshot::channel();
        let mut slot = self.slot();
        if let Some(superseded) = slot.replace(PendingRequest {
            options,
            resolver: tx,
        }) {
            tracing::debug!(title = %superseded.options.title, "superseding open confirmation");
        }
        Decision { rx }
    }

    /// Whether a dialog should currently be shown
    pub fn is_open(&self) -> bool {
        self.slot().is_some()
    }

    /// Dialog state for the renderer, with defaulted button labels
    pub fn surface(&self) -> Option<ConfirmSurface> {
        self.slot().as_ref().map(|pending| ConfirmSurface {
            title: pending.options.title.clone(),
            description: pending.options.description.clone(),
            confirm_text: pending
                .options
                .confirm_text
                .clone()
                .unwrap_or_else(|| DEFAULT_CONFIRM_TEXT.to_string()),
            cancel_text: pending
                .options
                .cancel_text
                .clone()
                .unwrap_or_else(|| DEFAULT_CANCEL_TEXT.to_string()),
            variant: pending.options.variant,
        })
    }

    /// The user committed the affirmative action: settle `true` and close.
    /// No-op when nothing is pending.
    pub fn commit(&self) {
        if let Some(pending) = self.slot().take() {
            // Send fails only when the caller dropped the decision; the
            // dialog closes either way.
            let _ = pending.resolver.send(true);
        }
    }

    /// The user closed the dialog by any non-affirmative means.
    /// The pending decision settles as abandoned; no-op when nothing is open.
    pub fn dismiss(&self) {
        if let Some(pending) = self.slot().take() {
            tracing::debug!(title = %pending.options.title, "confirmation dismissed");
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<PendingRequest>> {
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "confirm_tests.rs"]
mod tests;
