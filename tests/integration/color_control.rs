//! Integration tests for color control: `NO_COLOR`, `FORCE_COLOR`, --color flag, `TERM`.

use crate::logsift;

#[test]
fn color_never_disables_ansi() {
    let output = logsift()
        .arg("--color=never")
        .write_stdin("ERROR boom")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        !stdout.contains("\x1b["),
        "Should not contain ANSI escapes with --color=never"
    );
}

#[test]
fn color_always_enables_ansi() {
    let output = logsift()
        .arg("--color=always")
        .write_stdin("ERROR boom")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("\x1b["),
        "Should contain ANSI escapes with --color=always"
    );
}

#[test]
fn auto_mode_without_tty_is_plain() {
    // stdout is a pipe under assert_cmd
    let output = logsift()
        .env_remove("FORCE_COLOR")
        .env_remove("NO_COLOR")
        .write_stdin("ERROR boom")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "ERROR boom\n");
}

#[test]
fn force_color_colors_piped_output() {
    let output = logsift()
        .env("FORCE_COLOR", "1")
        .env_remove("NO_COLOR")
        .write_stdin("ERROR boom")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("\x1b["),
        "FORCE_COLOR should color non-TTY output: {stdout:?}"
    );
}

#[test]
fn no_color_beats_force_color() {
    let output = logsift()
        .env("FORCE_COLOR", "1")
        .env("NO_COLOR", "1")
        .write_stdin("ERROR boom")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("\x1b["));
}

#[test]
fn force_color_ignored_with_color_never() {
    let output = logsift()
        .arg("--color=never")
        .env("FORCE_COLOR", "1")
        .write_stdin("ERROR boom")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("\x1b["));
}

#[test]
fn no_color_env_disables_colors() {
    let output = logsift()
        .env("NO_COLOR", "1")
        .write_stdin("ERROR boom")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("\x1b["));
}

#[test]
fn annotation_dimmed_when_colored() {
    let output = logsift()
        .arg("--color=always")
        .write_stdin("1700000000")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    // dim attribute on the inline description
    assert!(stdout.contains("\x1b[2m [UTC: "), "got {stdout:?}");
}
