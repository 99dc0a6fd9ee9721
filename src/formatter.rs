//! Output renderers for classified lines.
//!
//! Three surfaces consume the same `Vec<LogLine>`:
//! - text: one entry per visible line, colored by category, with epoch
//!   descriptions inlined after the token (`[UTC: … | IST: …]`)
//! - html: a standalone page where descriptions become hover titles
//! - json: one object per line, hidden lines included with `visible: false`
//!
//! None of them touch classification fields.

use std::borrow::Cow;
use std::fmt::Write;

use owo_colors::{OwoColorize, Style};

use crate::annotate::Segment;
use crate::category::Category;
use crate::classify::LogLine;
use crate::cli::{OutputFormat, Theme};
use crate::config::Config;
use crate::error::SiftError;

/// Render all lines in the configured output format.
pub fn render(lines: &[LogLine], config: &Config, use_color: bool) -> Result<String, SiftError> {
    let mut out = String::new();
    match config.output {
        OutputFormat::Text => {
            let mut buf = String::new();
            for line in lines {
                buf.clear();
                format_line(line, config, use_color, &mut buf);
                // Hidden lines produce an empty buffer.
                if buf.is_empty() {
                    continue;
                }
                out.push_str(&buf);
                out.push('\n');
            }
        }
        OutputFormat::Html => render_html(lines, config.theme, &mut out),
        OutputFormat::Json => render_json(lines, &mut out)?,
    }
    Ok(out)
}

/// Format a single line as terminal text into `out`.
///
/// Hidden lines leave `out` empty.
pub fn format_line(line: &LogLine, config: &Config, use_color: bool, out: &mut String) {
    if !line.visible {
        out.clear();
        return;
    }

    let style = line
        .category
        .style_with_color(config.color_for(line.category));

    for segment in line.content.segments() {
        match segment {
            Segment::Text(text) => push_styled(out, text, style, use_color),
            Segment::Epoch(digits, annotation) => {
                push_styled(out, digits, style, use_color);
                if config.annotate_timestamps {
                    let note = format!(" [{}]", annotation.title());
                    push_styled(out, &note, Style::new().dimmed(), use_color);
                }
            }
        }
    }

    if config.verbose
        && let Some(ref err) = line.json_error
    {
        let note = format!("\n    ↳ parse error: {err}");
        push_styled(out, &note, Style::new().red().dimmed(), use_color);
    }
}

fn push_styled(out: &mut String, text: &str, style: Style, use_color: bool) {
    if use_color {
        let _ = write!(out, "{}", text.style(style));
    } else {
        out.push_str(text);
    }
}

/// Write one JSON object per line, hidden lines included.
pub fn render_json(lines: &[LogLine], out: &mut String) -> Result<(), serde_json::Error> {
    for line in lines {
        out.push_str(&serde_json::to_string(line)?);
        out.push('\n');
    }
    Ok(())
}

/// Theme colors: background, foreground, then json, error, warn, info, debug, stack.
struct Palette {
    background: &'static str,
    foreground: &'static str,
    json: &'static str,
    error: &'static str,
    warn: &'static str,
    info: &'static str,
    debug: &'static str,
    stack: &'static str,
}

const DARK: Palette = Palette {
    background: "#1e1e1e",
    foreground: "#d4d4d4",
    json: "#4fc1ff",
    error: "#f14c4c",
    warn: "#cca700",
    info: "#3fb950",
    debug: "#8b949e",
    stack: "#c586c0",
};

const LIGHT: Palette = Palette {
    background: "#ffffff",
    foreground: "#1f2328",
    json: "#0969da",
    error: "#cf222e",
    warn: "#9a6700",
    info: "#1a7f37",
    debug: "#6e7781",
    stack: "#8250df",
};

/// Write a self-contained HTML page with the visible lines.
pub fn render_html(lines: &[LogLine], theme: Theme, out: &mut String) {
    let palette = match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    };

    let _ = write!(
        out,
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Formatted logs</title>
<style>
body {{ background: {bg}; color: {fg}; margin: 0; }}
.log-output {{ font-family: monospace; font-size: 14px; line-height: 20px; padding: 20px; white-space: pre-wrap; }}
.log-output pre {{ display: inline; margin: 0; font: inherit; }}
.log-json {{ color: {json}; }}
.log-error {{ color: {error}; font-weight: bold; }}
.log-warn {{ color: {warn}; }}
.log-info {{ color: {info}; }}
.log-debug {{ color: {debug}; }}
.log-stack {{ color: {stack}; }}
.ts {{ text-decoration: underline dotted; cursor: help; }}
</style>
</head>
<body>
<div class="log-output">"#,
        bg = palette.background,
        fg = palette.foreground,
        json = palette.json,
        error = palette.error,
        warn = palette.warn,
        info = palette.info,
        debug = palette.debug,
        stack = palette.stack,
    );

    for line in lines.iter().filter(|l| l.visible) {
        let _ = write!(out, r#"<span class="{}">"#, line.category.css_class());
        let wrap_pre = line.category == Category::Json && line.json_error.is_none();
        if wrap_pre {
            out.push_str("<pre>");
        }
        for segment in line.content.segments() {
            match segment {
                Segment::Text(text) => out.push_str(&escape_html(text)),
                Segment::Epoch(digits, annotation) => {
                    let _ = write!(
                        out,
                        r#"<span class="ts" title="{}">{}</span>"#,
                        escape_html(&annotation.title()),
                        escape_html(digits)
                    );
                }
            }
        }
        if wrap_pre {
            out.push_str("</pre>");
        }
        out.push_str("</span>\n");
    }

    out.push_str("</div>\n</body>\n</html>\n");
}

/// Escape text for HTML element content and double-quoted attributes.
fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut escaped = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
