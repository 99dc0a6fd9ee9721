//! Epoch token scanner.
//!
//! Walks a line byte by byte and yields every maximal run of ASCII digits
//! whose length could be an epoch (10 to 13 digits). Runs are bounded by
//! any non-digit byte or the ends of the line, so a 14-digit run yields
//! nothing rather than a 13-digit slice of it.

use std::ops::Range;

/// Shortest digit run treated as an epoch.
pub const MIN_EPOCH_DIGITS: usize = 10;
/// Longest digit run treated as an epoch.
pub const MAX_EPOCH_DIGITS: usize = 13;

/// A candidate epoch found in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochToken<'a> {
    /// Byte offset of the first digit.
    pub start: usize,
    /// Byte offset one past the last digit.
    pub end: usize,
    /// The digits themselves.
    pub digits: &'a str,
}

impl EpochToken<'_> {
    pub const fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Iterator over the epoch tokens of a line, in order of appearance.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Iterator for Scanner<'a> {
    type Item = EpochToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.line.as_bytes();
        while self.pos < bytes.len() {
            if !bytes[self.pos].is_ascii_digit() {
                self.pos += 1;
                continue;
            }
            let start = self.pos;
            while self.pos < bytes.len() && bytes[self.pos].is_ascii_digit() {
                self.pos += 1;
            }
            let len = self.pos - start;
            if (MIN_EPOCH_DIGITS..=MAX_EPOCH_DIGITS).contains(&len) {
                return Some(EpochToken {
                    start,
                    end: self.pos,
                    digits: &self.line[start..self.pos],
                });
            }
        }
        None
    }
}

/// Scan `line` for epoch-shaped digit runs.
pub const fn scan(line: &str) -> Scanner<'_> {
    Scanner { line, pos: 0 }
}
