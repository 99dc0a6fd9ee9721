//! Search filter over classified lines.
//!
//! Visibility is a pure predicate on each line's original text: a line is
//! visible when the query is empty or occurs in `raw_text` ignoring case.
//! Pretty-printed or annotated content is never searched.

use crate::classify::LogLine;

/// A lower-cased search needle. The empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a line's original text matches this query.
    pub fn matches(&self, raw_text: &str) -> bool {
        self.is_empty() || raw_text.to_lowercase().contains(&self.0)
    }
}

/// Recompute `visible` for every line against `query`.
///
/// Order is untouched. Returns the number of visible lines.
pub fn filter(lines: &mut [LogLine], query: &str) -> usize {
    let query = SearchQuery::new(query);
    let mut visible = 0;
    for line in lines.iter_mut() {
        line.visible = query.matches(&line.raw_text);
        if line.visible {
            visible += 1;
        }
    }
    tracing::debug!(query = query.as_str(), visible, total = lines.len(), "applied search");
    visible
}
