//! Integration tests for basic stdin/file -> stdout piping.

use predicates::prelude::*;
use std::io::Write;

use crate::logsift;

#[test]
fn empty_stdin_exits_zero() {
    logsift().write_stdin("").assert().success().stdout("");
}

#[test]
fn blank_lines_dropped_and_trimmed() {
    logsift()
        .arg("--color=never")
        .write_stdin("\n   INFO ready   \n\n\t\nWARN slow\n")
        .assert()
        .success()
        .stdout("INFO ready\nWARN slow\n");
}

#[test]
fn crlf_line_endings() {
    logsift()
        .arg("--color=never")
        .write_stdin("ERROR a\r\nDEBUG b\r\n")
        .assert()
        .success()
        .stdout("ERROR a\nDEBUG b\n");
}

#[test]
fn epoch_annotated_inline() {
    logsift()
        .arg("--color=never")
        .write_stdin("INFO started 1700000000")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1700000000 [UTC: Tue, 14 Nov 2023 22:13:20 GMT | IST: 15/11/2023, 3:43:20 am]",
        ));
}

#[test]
fn millisecond_epoch_annotated() {
    logsift()
        .arg("--color=never")
        .write_stdin("done at 1700000000000")
        .assert()
        .success()
        .stdout(predicate::str::contains("1700000000000 [UTC: Tue, 14 Nov 2023 22:13:20 GMT"));
}

#[test]
fn non_epoch_lengths_not_annotated() {
    logsift()
        .arg("--color=never")
        .write_stdin("pid 123456789 trace 12345678901234")
        .assert()
        .success()
        .stdout("pid 123456789 trace 12345678901234\n");
}

#[test]
fn no_annotations_flag() {
    logsift()
        .arg("--color=never")
        .arg("--no-annotations")
        .write_stdin("INFO started 1700000000")
        .assert()
        .success()
        .stdout("INFO started 1700000000\n");
}

#[test]
fn custom_local_zone_flags() {
    logsift()
        .arg("--color=never")
        .arg("--local-label=BRT")
        .arg("--local-offset=-03:00")
        .write_stdin("1700000000")
        .assert()
        .success()
        .stdout(predicate::str::contains("BRT: 14/11/2023, 7:13:20 pm"));
}

#[test]
fn invalid_local_offset_is_config_error() {
    logsift()
        .arg("--local-offset=noon")
        .write_stdin("x")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid UTC offset"));
}

#[test]
fn reads_file_argument() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ERROR from file").unwrap();
    logsift()
        .arg("--color=never")
        .arg(file.path())
        .assert()
        .success()
        .stdout("ERROR from file\n");
}

#[test]
fn byte_order_mark_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"\xEF\xBB\xBFERROR boom\nINFO ok\n").unwrap();
    logsift()
        .args(["--color=never", "--output=json"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            r#"{"rawText":"ERROR boom","category":"error""#,
        ));
}

#[test]
fn missing_file_is_io_error() {
    logsift()
        .arg("/nonexistent/logsift/input.log")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn invalid_utf8_is_replaced() {
    logsift()
        .arg("--color=never")
        .write_stdin(b"INFO caf\xff\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("INFO caf"));
}

#[test]
fn completions_generated() {
    logsift()
        .arg("--completions=bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("logsift"));
}
