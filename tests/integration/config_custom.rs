//! Integration tests for the TOML config file and its interaction with flags.

use predicates::prelude::*;
use std::io::Write;

use crate::logsift;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn config_local_zone() {
    let file = config_file(
        r#"
color = "never"

[local]
label = "CET"
offset = "+01:00"
"#,
    );
    logsift()
        .arg("--config")
        .arg(file.path())
        .write_stdin("1700000000")
        .assert()
        .success()
        .stdout(predicate::str::contains("CET: 14/11/2023, 11:13:20 pm"));
}

#[test]
fn cli_overrides_config() {
    let file = config_file(
        r#"
color = "never"
annotate_timestamps = false
output = "html"
"#,
    );
    logsift()
        .arg("--config")
        .arg(file.path())
        .arg("--output=text")
        .write_stdin("INFO 1700000000")
        .assert()
        .success()
        .stdout("INFO 1700000000\n");
}

#[test]
fn config_category_colors() {
    let file = config_file(
        r#"
color = "always"

[colors]
info = "blue"
"#,
    );
    let output = logsift()
        .arg("--config")
        .arg(file.path())
        .write_stdin("INFO hi")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\x1b[34m"), "info should be blue: {stdout:?}");
}

#[test]
fn invalid_toml_exits_one() {
    let file = config_file("color = [unterminated");
    logsift()
        .arg("--config")
        .arg(file.path())
        .write_stdin("INFO hi")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config file error"));
}

#[test]
fn missing_explicit_config_exits_one() {
    logsift()
        .arg("--config=/nonexistent/logsift.toml")
        .write_stdin("INFO hi")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn xdg_config_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("logsift")).unwrap();
    std::fs::write(
        dir.path().join("logsift").join("config.toml"),
        "color = \"never\"\nannotate_timestamps = false\n",
    )
    .unwrap();
    logsift()
        .env("XDG_CONFIG_HOME", dir.path())
        .write_stdin("WARN 1700000000")
        .assert()
        .success()
        .stdout("WARN 1700000000\n");
}
