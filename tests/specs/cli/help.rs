//! Specs: CLI help and argument errors.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("quill")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("projects")
                .and(predicate::str::contains("watch"))
                .and(predicate::str::contains("stages")),
        );
}

#[test]
fn unknown_subcommand_fails() {
    Command::cargo_bin("quill")
        .unwrap()
        .arg("bogus")
        .assert()
        .failure();
}

#[test]
fn projects_requires_url() {
    Command::cargo_bin("quill")
        .unwrap()
        .arg("projects")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--url"));
}

#[test]
fn watch_rejects_malformed_interval() {
    Command::cargo_bin("quill")
        .unwrap()
        .args(["watch", "--url", "http://127.0.0.1:1/", "--interval", "soon"])
        .assert()
        .failure();
}
