//! CLI integration tests for `logsift`.

mod basic_pipe;
mod color_control;
mod config_custom;
mod convert_cmd;
mod search_filter;

use assert_cmd::Command;

/// `logsift` binary isolated from any user config file.
#[allow(deprecated)]
pub fn logsift() -> Command {
    let mut cmd = Command::cargo_bin("logsift").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/logsift-test-no-config");
    cmd.env_remove("LOGSIFT_LOG");
    cmd.env_remove("FORCE_COLOR");
    cmd.env_remove("NO_COLOR");
    cmd
}
