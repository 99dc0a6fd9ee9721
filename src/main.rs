use std::io::{self, IsTerminal, Read, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use logsift::cli::{Cli, ColorMode, Command, OutputFormat};
use logsift::config::Config;
use logsift::error::SiftError;
use logsift::{classify, convert, filter, render};

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so upstream writers get a clean
    // SIGPIPE signal instead of a BrokenPipeError when logsift exits early.
    reset_sigpipe();
    init_tracing();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "logsift", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    if let Some(Command::Convert { ref value }) = cli.command {
        return run_convert(&value.join(" "));
    }

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("logsift: {e}");
            return ExitCode::from(e.exit_code());
        }
    };

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(SiftError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("logsift: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Read the whole input, classify it once, filter, and write the rendering.
fn run(cli: &Cli, config: &Config) -> Result<(), SiftError> {
    let input = match cli.file {
        Some(ref path) => std::fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
    };
    let input = String::from_utf8_lossy(&input);

    let mut lines = classify(&input, config);
    let visible = filter(&mut lines, &config.query);
    tracing::debug!(total = lines.len(), visible, "classified input");

    if visible == 0 && config.output != OutputFormat::Json {
        eprintln!("logsift: no formatted logs to export");
        return Ok(());
    }

    let use_color = config.output == OutputFormat::Text && resolve_color_mode(config.color_mode);
    let rendered = render(&lines, config, use_color)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn run_convert(value: &str) -> ExitCode {
    let tz = jiff::tz::TimeZone::system();
    match convert(value, &tz) {
        Ok(conversion) => {
            println!("{conversion}");
            ExitCode::SUCCESS
        }
        Err(invalid) => {
            println!("{invalid}");
            ExitCode::from(1)
        }
    }
}

/// Diagnostics go to stderr, filtered by `LOGSIFT_LOG` (default `warn`).
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_env("LOGSIFT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// `auto`: `NO_COLOR` wins, then `FORCE_COLOR` (even when piped), then
/// `TERM=dumb`, then TTY detection.
fn resolve_color_mode(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some_and(|v| !v.is_empty()) {
                return true;
            }
            if std::env::var("TERM").is_ok_and(|v| v == "dumb") {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// For a CLI filter like `logsift`, this causes the *upstream* writer to
/// receive a `BrokenPipeError` when `logsift` exits. Restoring `SIG_DFL`
/// lets the OS handle the signal normally.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
