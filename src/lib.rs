//! `logsift`: classify pasted log text, annotate epoch timestamps, and search the result.
//!
//! This library provides the core of the `logsift` CLI tool. It splits a
//! block of log text into lines, assigns each line a category (json, error,
//! warn, info, debug, stackTrace, plain), attaches UTC and local
//! descriptions to epoch-like numbers, and filters the result by a
//! case-insensitive query. A standalone converter turns a single epoch or
//! date string into UTC and local time.
//!
//! # Example
//!
//! ```
//! use logsift::{Category, Config, classify, filter};
//!
//! let config = Config::default();
//! let mut lines = classify("ERROR disk full at 1700000000\n{\"a\":1}", &config);
//! assert_eq!(lines[0].category, Category::Error);
//! assert_eq!(lines[1].content.text, "{\n  \"a\": 1\n}");
//!
//! assert_eq!(filter(&mut lines, "disk"), 1);
//! assert!(!lines[1].visible);
//! ```

pub mod annotate;
pub mod category;
pub mod classify;
pub mod cli;
pub mod config;
pub mod convert;
pub mod epoch;
pub mod error;
pub mod formatter;
pub mod scanner;
pub mod search;

// Re-export primary API types for convenience.
pub use annotate::{Annotated, Annotation, annotate};
pub use category::Category;
pub use classify::{LogLine, classify, classify_line};
pub use config::Config;
pub use convert::{Conversion, InvalidInput, convert};
pub use epoch::{EpochUnit, LocalZone};
pub use error::SiftError;
pub use formatter::{format_line, render};
pub use scanner::{EpochToken, scan};
pub use search::{SearchQuery, filter};
