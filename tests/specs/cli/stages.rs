//! Specs: stage reference table.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn stage_table_lists_pipeline_order() {
    let output = Command::cargo_bin("quill")
        .unwrap()
        .arg("stages")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let positions: Vec<usize> = ["architect", "ghostwriter", "editor", "copyeditor"]
        .iter()
        .map(|name| stdout.find(name).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn stage_table_json_has_four_rows() {
    Command::cargo_bin("quill")
        .unwrap()
        .args(["stages", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ghostwriter"));
}
