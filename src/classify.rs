//! Line classifier.
//!
//! Splits a pasted block into trimmed, non-empty lines and assigns each a
//! [`Category`] together with its rendered content. Categories are decided
//! by an ordered rule table; the first rule whose predicate matches wins
//! and later rules are never consulted for that line.

use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::annotate::{self, Annotated};
use crate::category::Category;
use crate::config::Config;

/// Indentation applied to stack-trace continuation lines.
pub const STACK_INDENT: usize = 4;

/// Deepest `{`/`[` nesting pretty-printed; deeper lines count as malformed.
pub const MAX_JSON_DEPTH: usize = 512;

/// Integral floats below this magnitude print without a fraction.
const MAX_INTEGRAL_FLOAT: f64 = 9.2e18;

/// One classified line.
///
/// `category`, `content` and `json_error` are produced together by
/// [`classify_line`] and never updated on their own. Only `visible` changes
/// afterwards, through [`crate::search::filter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// The trimmed original line; search matches against this.
    pub raw_text: String,
    pub category: Category,
    /// Pretty JSON, or the annotated line (indented for stack traces).
    pub content: Annotated,
    /// serde_json error for a `{…}` line that failed to parse.
    pub json_error: Option<String>,
    pub visible: bool,
}

impl Serialize for LogLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LogLine", 6)?;
        state.serialize_field("rawText", &self.raw_text)?;
        state.serialize_field("category", &self.category)?;
        state.serialize_field("renderedContent", &self.content.text)?;
        state.serialize_field("annotations", &self.content.annotations)?;
        state.serialize_field("jsonError", &self.json_error)?;
        state.serialize_field("visible", &self.visible)?;
        state.end()
    }
}

type Render = fn(&str, Annotated) -> (Annotated, Option<String>);

/// A classification rule: predicate, resulting category, and renderer.
struct Rule {
    category: Category,
    matches: fn(&str) -> bool,
    render: Render,
}

/// Rules in precedence order. The last rule always matches.
const RULES: &[Rule] = &[
    Rule {
        category: Category::Json,
        matches: |s| s.starts_with('{') && s.ends_with('}'),
        render: render_json,
    },
    Rule {
        category: Category::Error,
        matches: |s| s.starts_with("ERROR"),
        render: keep_annotated,
    },
    Rule {
        category: Category::Warn,
        matches: |s| s.starts_with("WARN"),
        render: keep_annotated,
    },
    Rule {
        category: Category::Info,
        matches: |s| s.starts_with("INFO"),
        render: keep_annotated,
    },
    Rule {
        category: Category::Debug,
        matches: |s| s.starts_with("DEBUG") || s.starts_with("TRACE"),
        render: keep_annotated,
    },
    Rule {
        category: Category::StackTrace,
        matches: |s| s.starts_with("at ") || s.starts_with("Caused by"),
        render: |_, annotated| (annotated.indented(STACK_INDENT), None),
    },
    Rule {
        category: Category::Plain,
        matches: |_| true,
        render: keep_annotated,
    },
];

fn keep_annotated(_: &str, annotated: Annotated) -> (Annotated, Option<String>) {
    (annotated, None)
}

/// Pretty-print a JSON-looking line.
///
/// A line that fails to parse keeps its annotated text and reports the
/// parse error; it is still categorized as JSON.
fn render_json(line: &str, annotated: Annotated) -> (Annotated, Option<String>) {
    let pretty = parse_json(line).and_then(|mut value| {
        normalize_numbers(&mut value);
        serde_json::to_string_pretty(&value).map_err(|e| e.to_string())
    });
    match pretty {
        Ok(pretty) => (Annotated::plain(pretty), None),
        Err(e) => {
            tracing::debug!(error = %e, "JSON-looking line failed to parse");
            (annotated, Some(e))
        }
    }
}

/// Parse a whole line as one JSON value, allowing up to [`MAX_JSON_DEPTH`] levels.
fn parse_json(line: &str) -> Result<Value, String> {
    let depth = nesting_depth(line);
    if depth > MAX_JSON_DEPTH {
        return Err(format!("nesting depth {depth} exceeds {MAX_JSON_DEPTH} levels"));
    }
    let mut de = serde_json::Deserializer::from_str(line);
    de.disable_recursion_limit();
    let value = Value::deserialize(&mut de).map_err(|e| e.to_string())?;
    de.end().map_err(|e| e.to_string())?;
    Ok(value)
}

/// Maximum bracket nesting outside string literals.
fn nesting_depth(line: &str) -> usize {
    let mut depth = 0usize;
    let mut max = 0;
    let mut in_string = false;
    let mut escaped = false;
    for b in line.bytes() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                max = max.max(depth);
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max
}

/// Print integral floats (`1.0`, `1e2`) as integers.
fn normalize_numbers(value: &mut Value) {
    match value {
        Value::Number(n) if n.is_f64() => {
            if let Some(f) = n.as_f64()
                && f.fract() == 0.0
                && f.abs() < MAX_INTEGRAL_FLOAT
            {
                *n = Number::from(f as i64);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(normalize_numbers),
        Value::Object(map) => map.values_mut().for_each(normalize_numbers),
        _ => {}
    }
}

/// Classify a whole input block.
///
/// Lines are split on `\n` or `\r\n`, trimmed (including a byte order
/// mark), and empty lines dropped.
/// Output order matches input order.
pub fn classify(input: &str, config: &Config) -> Vec<LogLine> {
    input
        .lines()
        .filter_map(|line| classify_line(line, config))
        .collect()
}

/// Classify a single line. Returns `None` if it is empty after trimming.
pub fn classify_line(line: &str, config: &Config) -> Option<LogLine> {
    let trimmed = line.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    if trimmed.is_empty() {
        return None;
    }

    let annotated = annotate::annotate(trimmed, &config.local_zone);

    let rule = RULES
        .iter()
        .find(|rule| (rule.matches)(trimmed))
        .unwrap_or(&RULES[RULES.len() - 1]);
    let (content, json_error) = (rule.render)(trimmed, annotated);

    Some(LogLine {
        raw_text: trimmed.to_string(),
        category: rule.category,
        content,
        json_error,
        visible: true,
    })
}
