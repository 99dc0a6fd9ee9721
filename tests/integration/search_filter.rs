//! Integration tests for `--search`.

use predicates::prelude::*;

use crate::logsift;

const INPUT: &str = "ERROR Timeout talking to db\nINFO all good\n{\"user\":\"alice\"}\nat Foo.bar(Foo.java:1)";

#[test]
fn search_is_case_insensitive() {
    logsift()
        .arg("--color=never")
        .arg("--search=TIMEOUT")
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout("ERROR Timeout talking to db\n");
}

#[test]
fn search_matches_raw_text_only() {
    // Pretty-printed form has a space after the colon; the raw line does not.
    logsift()
        .arg("--color=never")
        .arg("-s")
        .arg("\"user\": \"alice\"")
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("no formatted logs to export"));
}

#[test]
fn search_raw_json_matches() {
    logsift()
        .arg("--color=never")
        .arg("-s")
        .arg("\"user\":\"alice\"")
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout("{\n  \"user\": \"alice\"\n}\n");
}

#[test]
fn empty_search_shows_everything() {
    let output = logsift()
        .arg("--color=never")
        .arg("--search=")
        .write_stdin(INPUT)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ERROR Timeout"));
    assert!(stdout.contains("INFO all good"));
    assert!(stdout.contains("    at Foo.bar"));
}

#[test]
fn search_does_not_match_annotation_text() {
    logsift()
        .arg("--color=never")
        .arg("--search=Nov 2023")
        .write_stdin("INFO at 1700000000")
        .assert()
        .success()
        .stdout("");
}
