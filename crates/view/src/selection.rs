// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project selection synchronizer.
//!
//! Holds the authoritative "currently viewed project" and reconciles it
//! against the latest polled snapshot. Priority rules: a generating project
//! wins the default pick, otherwise the newest (largest id) eligible project;
//! a project entering the generating state pulls the selection to it unless
//! the user is already watching a generating run. Archived projects are never
//! picked automatically but stay viewable once explicitly selected.

use quill_core::{Project, ProjectId};

/// Observable selection transitions, returned from each reconciliation.
///
/// An empty list is the observable form of "no state change": re-applying an
/// identical snapshot yields nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    /// No selection was set and the default rule resolved one
    AdoptedDefault { id: ProjectId },
    /// Selection jumped to a project whose run just started
    FollowedGenerating { id: ProjectId },
    /// Explicit user selection took effect
    Selected { id: Option<ProjectId> },
}

/// Selection state container.
///
/// Single-writer: all transitions are synchronous and run through one
/// reconcile pass, invoked after every snapshot and every explicit selection.
#[derive(Debug, Default)]
pub struct ProjectSelection {
    projects: Vec<Project>,
    selected: Option<ProjectId>,
    loaded: bool,
}

impl ProjectSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// True until the first successful poll has been applied
    pub fn is_loading(&self) -> bool {
        !self.loaded
    }

    /// Latest polled snapshot, in fetch order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Raw selection value; `None` means no explicit or derived selection yet
    pub fn selected_id(&self) -> Option<ProjectId> {
        self.selected
    }

    /// The record the selection resolves to.
    ///
    /// Resolved against the full list, so an archived project remains
    /// viewable once explicitly selected. A selected id that is missing from
    /// the snapshot (deleted upstream) resolves to `None`; that is a
    /// legitimate state, not an error.
    pub fn current_project(&self) -> Option<&Project> {
        let id = self.selected?;
        self.projects.iter().find(|p| p.id == id)
    }

    /// Install a freshly polled snapshot and reconcile
    pub fn apply_snapshot(&mut self, projects: Vec<Project>) -> Vec<SelectionChange> {
        self.projects = projects;
        self.loaded = true;
        self.reconcile()
    }

    /// Explicit user selection, then reconcile.
    ///
    /// The user's choice is honored unless an eligible project is generating
    /// and the chosen project is not: the generating run still takes over.
    pub fn select(&mut self, id: Option<ProjectId>) -> Vec<SelectionChange> {
        let mut changes = Vec::new();
        if self.selected != id {
            self.selected = id;
            changes.push(SelectionChange::Selected { id });
        }
        changes.extend(self.reconcile());
        changes
    }

    /// One unified reconciliation pass.
    ///
    /// Order matters: default adoption first (it already prefers a generating
    /// project), then the generating auto-follow, which never fires while the
    /// currently viewed project is itself generating.
    fn reconcile(&mut self) -> Vec<SelectionChange> {
        let mut changes = Vec::new();

        if self.selected.is_none() {
            if let Some(id) = self.default_candidate() {
                self.selected = Some(id);
                changes.push(SelectionChange::AdoptedDefault { id });
            }
        }

        if let Some(id) = self.generating_candidate() {
            if self.selected != Some(id) && !self.watching_generating() {
                self.selected = Some(id);
                changes.push(SelectionChange::FollowedGenerating { id });
            }
        }

        changes
    }

    /// Default rule: an eligible generating project, else the eligible
    /// project with the maximum id, else none.
    fn default_candidate(&self) -> Option<ProjectId> {
        if let Some(id) = self.generating_candidate() {
            return Some(id);
        }
        self.projects
            .iter()
            .filter(|p| p.is_eligible())
            .map(|p| p.id)
            .max()
    }

    fn generating_candidate(&self) -> Option<ProjectId> {
        self.projects
            .iter()
            .find(|p| p.is_eligible() && p.status.is_generating())
            .map(|p| p.id)
    }

    fn watching_generating(&self) -> bool {
        self.current_project()
            .map(|p| p.status.is_generating())
            .unwrap_or(false)
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
