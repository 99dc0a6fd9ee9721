//! Timestamp annotation of free-form log text.
//!
//! [`annotate`] leaves the text of a line untouched and attaches a
//! [`Annotation`] to every epoch token whose instant is representable.
//! Renderers decide how to surface the metadata (inline suffix, HTML
//! `title`, JSON field); stripping it always gives back the original line.

use serde::Serialize;

use crate::epoch::{self, Description, EpochUnit, LocalZone};
use crate::scanner;

/// Date/time metadata attached to one epoch token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Byte offset of the token in [`Annotated::text`].
    pub start: usize,
    /// Byte offset one past the token.
    pub end: usize,
    /// UTC rendering, e.g. `Tue, 14 Nov 2023 22:13:20 GMT`.
    pub utc: String,
    /// Rendering in the fixed local zone.
    pub local: String,
    /// Label of the local zone (e.g. `IST`).
    pub label: String,
}

impl Annotation {
    /// Hover text: `UTC: <utc> | <label>: <local>`.
    pub fn title(&self) -> String {
        format!("UTC: {} | {}: {}", self.utc, self.label, self.local)
    }
}

/// Text plus the annotations that decorate it.
///
/// Annotations are sorted by `start`, never overlap, and always point at
/// ASCII digit runs inside `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotated {
    pub text: String,
    pub annotations: Vec<Annotation>,
}

/// A piece of an [`Annotated`] line, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Epoch(&'a str, &'a Annotation),
}

impl Annotated {
    /// Text with no annotations at all.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotations: Vec::new(),
        }
    }

    /// Prefix `width` spaces, shifting every annotation span accordingly.
    #[must_use]
    pub fn indented(mut self, width: usize) -> Self {
        self.text.insert_str(0, &" ".repeat(width));
        for annotation in &mut self.annotations {
            annotation.start += width;
            annotation.end += width;
        }
        self
    }

    /// Split the text into plain and annotated segments.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let mut segments = Vec::with_capacity(self.annotations.len() * 2 + 1);
        let mut cursor = 0;
        for annotation in &self.annotations {
            if annotation.start > cursor {
                segments.push(Segment::Text(&self.text[cursor..annotation.start]));
            }
            segments.push(Segment::Epoch(
                &self.text[annotation.start..annotation.end],
                annotation,
            ));
            cursor = annotation.end;
        }
        if cursor < self.text.len() {
            segments.push(Segment::Text(&self.text[cursor..]));
        }
        segments
    }
}

/// Annotate every 10–13 digit epoch token in `line`.
///
/// 13 digits are read as milliseconds, 10–12 as seconds. Tokens whose
/// instant falls outside the representable range are left bare.
pub fn annotate(line: &str, zone: &LocalZone) -> Annotated {
    let annotations = scanner::scan(line)
        .filter_map(|token| {
            let unit = EpochUnit::for_token(token.digits.len())?;
            let Some(ts) = epoch::to_timestamp(token.digits, unit) else {
                tracing::trace!(digits = token.digits, "epoch token out of range");
                return None;
            };
            let Description { utc, local } = Description::of(ts, zone);
            Some(Annotation {
                start: token.start,
                end: token.end,
                utc,
                local,
                label: zone.label.clone(),
            })
        })
        .collect();

    Annotated {
        text: line.to_string(),
        annotations,
    }
}
