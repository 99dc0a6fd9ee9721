//! Log line categories with parsing, display, and colorization.
//!
//! Every non-empty input line lands in exactly one [`Category`]. The
//! category drives terminal colors, HTML classes, and the `category` field
//! of JSON output.

use std::fmt;

use owo_colors::Style;
use serde::{Deserialize, Serialize};

/// Closed set of line categories, in classification precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Json,
    Error,
    Warn,
    Info,
    Debug,
    StackTrace,
    Plain,
}

impl Category {
    /// All categories in precedence order.
    pub const ALL: [Self; 7] = [
        Self::Json,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::StackTrace,
        Self::Plain,
    ];

    /// Wire name used in JSON output and config files.
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::StackTrace => "stackTrace",
            Self::Plain => "plain",
        }
    }

    /// CSS class used by the HTML renderer.
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Json => "log-json",
            Self::Error => "log-error",
            Self::Warn => "log-warn",
            Self::Info => "log-info",
            Self::Debug => "log-debug",
            Self::StackTrace => "log-stack",
            Self::Plain => "log-plain",
        }
    }

    /// Returns the default terminal [`Style`] for this category.
    ///
    /// - Json: cyan
    /// - Error: red bold
    /// - Warn: yellow bold
    /// - Info: green
    /// - Debug: bright black
    /// - StackTrace: magenta
    /// - Plain: unstyled
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub const fn style(&self) -> Style {
        match self {
            Self::Json => Style::new().cyan(),
            Self::Error => Style::new().red().bold(),
            Self::Warn => Style::new().yellow().bold(),
            Self::Info => Style::new().green(),
            Self::Debug => Style::new().bright_black(),
            Self::StackTrace => Style::new().magenta(),
            Self::Plain => Style::new(),
        }
    }

    /// Returns the [`Style`] for this category, using a custom color if provided.
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn style_with_color(&self, custom_color: Option<&str>) -> Style {
        match custom_color {
            Some(color) => color_name_to_style(color),
            None => self.style(),
        }
    }

    /// Parse a category name, case-insensitive.
    ///
    /// Returns `None` for unrecognized strings.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "error" | "err" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" | "trace" => Some(Self::Debug),
            "stacktrace" | "stack_trace" | "stack" => Some(Self::StackTrace),
            "plain" | "text" => Some(Self::Plain),
            _ => None,
        }
    }
}

/// Convert a color name string to an [`owo_colors::Style`].
///
/// Supports standard ANSI colors and bright variants. Unknown colors fall
/// back to white bold.
fn color_name_to_style(color: &str) -> Style {
    match color.to_lowercase().as_str() {
        "black" => Style::new().black(),
        "red" => Style::new().red(),
        "green" => Style::new().green(),
        "yellow" => Style::new().yellow(),
        "blue" => Style::new().blue(),
        "magenta" | "purple" => Style::new().magenta(),
        "cyan" => Style::new().cyan(),
        "bright_black" | "gray" | "grey" => Style::new().bright_black(),
        "bright_red" => Style::new().bright_red(),
        "bright_green" => Style::new().bright_green(),
        "bright_yellow" => Style::new().bright_yellow(),
        "bright_blue" => Style::new().bright_blue(),
        "bright_magenta" => Style::new().bright_magenta(),
        "bright_cyan" => Style::new().bright_cyan(),
        "bright_white" => Style::new().bright_white(),
        // "white" and unknown colors
        _ => Style::new().white().bold(),
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
