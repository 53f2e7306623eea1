//! Specs: one-shot project listing against a stub feed.

use crate::prelude::{project, serve_json};
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn lists_projects_and_marks_the_selection() {
    let body = serde_json::to_string(&vec![
        project(1, "idle"),
        project(2, "generating"),
        project(3, "idle"),
    ])
    .unwrap();
    let url = serve_json(body);

    Command::cargo_bin("quill")
        .unwrap()
        .args(["projects", "--url", &url])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("project-2")
                // The generating project wins the default selection
                .and(predicate::str::contains("* 2")),
        );
}

#[test]
fn empty_feed_prints_placeholder() {
    let url = serve_json("[]".to_string());

    Command::cargo_bin("quill")
        .unwrap()
        .args(["projects", "--url", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found."));
}

#[test]
fn json_format_emits_selection_flags() {
    let body = serde_json::to_string(&vec![project(1, "idle"), project(5, "done")]).unwrap();
    let url = serve_json(body);

    let output = Command::cargo_bin("quill")
        .unwrap()
        .args(["projects", "--url", &url, "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    // Max eligible id wins when nothing is generating
    assert_eq!(rows[0]["selected"], serde_json::json!(false));
    assert_eq!(rows[1]["selected"], serde_json::json!(true));
    assert_eq!(rows[1]["id"], serde_json::json!(5));
}

#[test]
fn unreachable_feed_reports_transport_error() {
    Command::cargo_bin("quill")
        .unwrap()
        .args(["projects", "--url", "http://127.0.0.1:1/projects"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("transport error"));
}

#[test]
fn malformed_feed_reports_decode_error() {
    let url = serve_json("{\"not\": \"an array\"}".to_string());

    Command::cargo_bin("quill")
        .unwrap()
        .args(["projects", "--url", &url])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid project payload"));
}
