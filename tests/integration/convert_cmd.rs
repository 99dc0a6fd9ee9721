//! Integration tests for the `convert` subcommand.

use predicates::prelude::*;

use crate::logsift;

#[test]
fn convert_epoch_seconds() {
    logsift()
        .env("TZ", "UTC")
        .args(["convert", "1700000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UTC: Tue, 14 Nov 2023 22:13:20 GMT"))
        .stdout(predicate::str::contains("Local: "));
}

#[test]
fn convert_epoch_milliseconds() {
    logsift()
        .args(["convert", "1700000000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UTC: Tue, 14 Nov 2023 22:13:20 GMT"));
}

#[test]
fn convert_rfc3339() {
    logsift()
        .args(["convert", "2023-11-14T22:13:20Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UTC: Tue, 14 Nov 2023 22:13:20 GMT"));
}

#[test]
fn convert_joins_words() {
    logsift()
        .args(["convert", "Tue,", "14", "Nov", "2023", "22:13:20", "GMT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UTC: Tue, 14 Nov 2023 22:13:20 GMT"));
}

#[test]
fn convert_invalid_input() {
    logsift()
        .args(["convert", "yesterday-ish"])
        .assert()
        .code(1)
        .stdout("Invalid date\n");
}

#[test]
fn convert_out_of_range_millis() {
    logsift()
        .args(["convert", "999999999999999"])
        .assert()
        .code(1)
        .stdout("Invalid date\n");
}
