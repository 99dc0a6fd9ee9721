//! Configuration management with TOML file support.
//!
//! Merges settings from three sources (highest precedence first):
//! 1. CLI flags
//! 2. Config file (`~/.config/logsift/config.toml` or `$XDG_CONFIG_HOME/logsift/config.toml`)
//! 3. Built-in defaults

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::category::Category;
use crate::cli::{Cli, ColorMode, OutputFormat, Theme};
use crate::epoch::{self, LocalZone};
use crate::error::SiftError;

/// Runtime configuration merged from defaults, config file, and CLI arguments.
///
/// Use [`Config::from_cli`] to build from parsed CLI arguments, or
/// [`Config::default`] for built-in defaults (useful in tests and benchmarks).
#[derive(Debug, Clone)]
pub struct Config {
    /// Color output mode (auto/always/never).
    pub color_mode: ColorMode,
    /// Output format (text/html/json).
    pub output: OutputFormat,
    /// Theme for HTML output.
    pub theme: Theme,
    /// Print UTC/local descriptions next to epoch tokens in text output.
    pub annotate_timestamps: bool,
    /// Fixed zone used for the local representation of annotated timestamps.
    pub local_zone: LocalZone,
    /// Case-insensitive search query; empty shows every line.
    pub query: String,
    /// Show JSON parse errors under malformed JSON-looking lines.
    pub verbose: bool,
    /// Per-category color overrides from the config file.
    pub category_colors: Option<HashMap<Category, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Auto,
            output: OutputFormat::Text,
            theme: Theme::Dark,
            annotate_timestamps: true,
            local_zone: LocalZone::default(),
            query: String::new(),
            verbose: false,
            category_colors: None,
        }
    }
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if present.
    ///
    /// Merge precedence: CLI flags > config file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, SiftError> {
        let mut config = Self::default();

        let config_path = cli.config.clone().unwrap_or_else(Self::default_config_path);

        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "loading config file");
            let file_config = FileConfig::load(&config_path)?;
            config.apply_file_config(file_config)?;
        } else if cli.config.is_some() {
            return Err(SiftError::Config(format!(
                "config file {} does not exist",
                config_path.display()
            )));
        }

        // CLI overrides
        if let Some(color) = cli.color {
            config.color_mode = color;
        }
        if let Some(output) = cli.output {
            config.output = output;
        }
        if let Some(theme) = cli.theme {
            config.theme = theme;
        }
        if cli.no_annotations {
            config.annotate_timestamps = false;
        }
        if let Some(ref label) = cli.local_label {
            config.local_zone.label.clone_from(label);
        }
        if let Some(ref offset) = cli.local_offset {
            config.local_zone.offset = epoch::parse_offset(offset)?;
        }
        if let Some(ref query) = cli.search {
            config.query.clone_from(query);
        }
        config.verbose = cli.verbose;

        Ok(config)
    }

    /// Default config file path: `$XDG_CONFIG_HOME/logsift/config.toml` or `~/.config/logsift/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("logsift").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("logsift")
                .join("config.toml")
        } else {
            PathBuf::from(".config/logsift/config.toml")
        }
    }

    /// Custom color name configured for `category`, if any.
    pub fn color_for(&self, category: Category) -> Option<&str> {
        self.category_colors
            .as_ref()
            .and_then(|colors| colors.get(&category))
            .map(String::as_str)
    }

    /// Apply settings from a parsed config file.
    fn apply_file_config(&mut self, file: FileConfig) -> Result<(), SiftError> {
        if let Some(color) = file.color {
            self.color_mode = match color.as_str() {
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => ColorMode::Auto,
            };
        }

        if let Some(output) = file.output {
            self.output = match output.as_str() {
                "html" => OutputFormat::Html,
                "json" => OutputFormat::Json,
                _ => OutputFormat::Text,
            };
        }

        if let Some(theme) = file.theme {
            self.theme = match theme.as_str() {
                "light" => Theme::Light,
                _ => Theme::Dark,
            };
        }

        if let Some(annotate) = file.annotate_timestamps {
            self.annotate_timestamps = annotate;
        }

        if let Some(local) = file.local {
            if let Some(label) = local.label {
                self.local_zone.label = label;
            }
            if let Some(offset) = local.offset {
                self.local_zone.offset = epoch::parse_offset(&offset)?;
            }
        }

        if let Some(colors) = file.colors {
            let mut overrides = HashMap::new();
            for (key, value) in colors {
                match Category::from_str_loose(&key) {
                    Some(category) => {
                        overrides.insert(category, value);
                    }
                    None => tracing::warn!(key = %key, "ignoring color for unknown category"),
                }
            }
            if !overrides.is_empty() {
                self.category_colors = Some(overrides);
            }
        }

        Ok(())
    }
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Deserialize)]
struct FileConfig {
    color: Option<String>,
    output: Option<String>,
    theme: Option<String>,
    annotate_timestamps: Option<bool>,
    local: Option<LocalConfig>,
    colors: Option<HashMap<String, String>>,
}

#[derive(Debug, Deserialize)]
struct LocalConfig {
    label: Option<String>,
    offset: Option<String>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, SiftError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SiftError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
