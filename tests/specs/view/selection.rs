//! Specs: selection synchronization through the public watcher handles.

use crate::prelude::project;
use quill_adapters::{FakeProjectSource, SourceError};
use quill_core::ProjectId;
use quill_view::{ProjectWatcher, SelectionChange, DEFAULT_POLL_INTERVAL};

#[tokio::test]
async fn selection_follows_a_run_starting_elsewhere() {
    let source = FakeProjectSource::new();
    source.push_snapshot(vec![project(1, "idle"), project(2, "idle")]);
    source.push_snapshot(vec![project(1, "generating"), project(2, "idle")]);

    let (watcher, handle) = ProjectWatcher::new(source, DEFAULT_POLL_INTERVAL);

    watcher.poll_once().await.unwrap();
    assert_eq!(handle.selected_id(), Some(ProjectId(2)));

    let changes = watcher.poll_once().await.unwrap();
    assert_eq!(
        changes,
        vec![SelectionChange::FollowedGenerating { id: ProjectId(1) }]
    );
    assert_eq!(handle.current_project().map(|p| p.id), Some(ProjectId(1)));
}

#[tokio::test]
async fn user_choice_survives_polls_without_generating_runs() {
    let source = FakeProjectSource::new();
    source.push_snapshot(vec![project(1, "idle"), project(2, "idle"), project(3, "idle")]);

    let (watcher, handle) = ProjectWatcher::new(source, DEFAULT_POLL_INTERVAL);
    watcher.poll_once().await.unwrap();
    assert_eq!(handle.selected_id(), Some(ProjectId(3)));

    handle.select(Some(ProjectId(1)));

    // Steady polls keep replaying the same list; the choice sticks
    watcher.poll_once().await.unwrap();
    watcher.poll_once().await.unwrap();
    assert_eq!(handle.selected_id(), Some(ProjectId(1)));
}

#[tokio::test]
async fn watched_generating_project_is_never_yanked() {
    let source = FakeProjectSource::new();
    source.push_snapshot(vec![project(1, "generating"), project(2, "idle")]);
    source.push_snapshot(vec![project(1, "generating"), project(2, "generating")]);

    let (watcher, handle) = ProjectWatcher::new(source, DEFAULT_POLL_INTERVAL);
    watcher.poll_once().await.unwrap();
    assert_eq!(handle.selected_id(), Some(ProjectId(1)));

    let changes = watcher.poll_once().await.unwrap();
    assert!(changes.is_empty());
    assert_eq!(handle.selected_id(), Some(ProjectId(1)));
}

#[tokio::test]
async fn deleted_selection_degrades_to_no_current_project() {
    let source = FakeProjectSource::new();
    source.push_snapshot(vec![project(1, "idle"), project(2, "idle")]);
    source.push_snapshot(vec![project(1, "idle")]);

    let (watcher, handle) = ProjectWatcher::new(source, DEFAULT_POLL_INTERVAL);
    watcher.poll_once().await.unwrap();
    watcher.poll_once().await.unwrap();

    assert_eq!(handle.selected_id(), Some(ProjectId(2)));
    assert!(handle.current_project().is_none());
}

#[tokio::test]
async fn transport_errors_do_not_disturb_the_view() {
    let source = FakeProjectSource::new();
    source.push_snapshot(vec![project(7, "idle")]);
    source.push_error(SourceError::Transport("gateway timeout".to_string()));

    let (watcher, handle) = ProjectWatcher::new(source, DEFAULT_POLL_INTERVAL);
    watcher.poll_once().await.unwrap();
    let before = handle.projects();

    assert!(watcher.poll_once().await.is_err());
    assert_eq!(handle.projects(), before);
    assert!(!handle.is_loading());
}
