//! Error types for the `logsift` application.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Nothing in the
//! classification core returns these: malformed lines and timestamps degrade
//! to plain rendering instead. Only the outer surfaces (config loading,
//! reading input, writing output) can fail.

use thiserror::Error;

/// Errors that can occur in `logsift`.
///
/// Maps to exit codes: [`Config`](Self::Config) and [`Toml`](Self::Toml) → exit 1,
/// [`Io`](Self::Io) and [`Json`](Self::Json) → exit 2.
#[derive(Debug, Error)]
pub enum SiftError {
    /// Configuration error (bad offset, unreadable config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Serializing a classified line for `--output json` failed.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SiftError {
    /// Process exit code for this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Toml(_) => 1,
            Self::Io(_) | Self::Json(_) => 2,
        }
    }
}
