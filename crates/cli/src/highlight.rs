// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Highlight compositor.
//!
//! Wraps every match span of a text in open/close markers. Every character of
//! the text appears in the output exactly once and in order; only markers are
//! added. Markers are inserted verbatim: escaping for the output format is the
//! caller's job.
//!
//! Overlapping spans (which a well-behaved evaluator never produces) resolve
//! deterministically: spans are processed from the highest index down, and a
//! span processed later (lower index) wins any region it shares with one
//! processed earlier. The earlier span keeps only what lies past the winner's
//! end.

use std::io::Write;

use termcolor::{Ansi, ColorSpec, WriteColor};

use crate::pattern::Match;

/// Marker strings placed around each highlighted span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    pub open: String,
    pub close: String,
}

impl Delimiters {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Terminal escape sequences that apply `spec` and then reset.
    pub fn ansi(spec: &ColorSpec) -> Self {
        Self {
            open: ansi_sequence(|w| w.set_color(spec)),
            close: ansi_sequence(|w| w.reset()),
        }
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::new("<mark>", "</mark>")
    }
}

fn ansi_sequence(write: impl FnOnce(&mut Ansi<Vec<u8>>) -> std::io::Result<()>) -> String {
    let mut ansi = Ansi::new(Vec::new());
    // Writes into a Vec cannot fail.
    let _ = write(&mut ansi).and_then(|()| ansi.flush());
    String::from_utf8_lossy(&ansi.into_inner()).into_owned()
}

/// Half-open byte range `[start, end)` to highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct HighlightSpan {
    pub start: usize,
    pub end: usize,
}

impl HighlightSpan {
    /// Span covered by `m`, clamped to `text` and snapped to char boundaries.
    fn from_match(text: &str, m: &Match) -> Self {
        let start = floor_char_boundary(text, m.index);
        let end = floor_char_boundary(text, m.index.saturating_add(m.text.len()));
        Self {
            start,
            end: end.max(start),
        }
    }

    fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Largest char boundary of `text` at or below `offset`.
fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Render `text` with every match wrapped in `open` and `close`.
pub fn compose(text: &str, matches: &[Match], open: &str, close: &str) -> String {
    let spans = resolve_spans(text, matches);
    if spans.is_empty() {
        return text.to_string();
    }

    // Splice from the tail toward the front; a splice never moves anything to
    // its left, so the remaining spans keep their original offsets.
    let mut pieces: Vec<&str> = Vec::with_capacity(spans.len() * 4 + 1);
    let mut tail = text.len();
    for span in spans.iter().rev() {
        pieces.push(&text[span.end..tail]);
        pieces.push(close);
        pieces.push(&text[span.start..span.end]);
        pieces.push(open);
        tail = span.start;
    }
    pieces.push(&text[..tail]);
    pieces.reverse();
    pieces.concat()
}

/// Render `text` with every match wrapped in `delimiters`.
pub fn compose_with(text: &str, matches: &[Match], delimiters: &Delimiters) -> String {
    compose(text, matches, &delimiters.open, &delimiters.close)
}

/// Remove every `open` and `close` marker from `rendered`.
///
/// Inverse of `compose` when the markers do not occur in the original text.
pub fn strip_markers(rendered: &str, open: &str, close: &str) -> String {
    let without_close = if close.is_empty() {
        rendered.to_string()
    } else {
        rendered.replace(close, "")
    };
    if open.is_empty() {
        without_close
    } else {
        without_close.replace(open, "")
    }
}

/// Turn matches into ascending, non-overlapping spans.
///
/// Descending processing order is (index desc, length desc); the span
/// processed last wins overlaps. Walking the reverse of that order, each span
/// claims its full extent and later spans are clipped to start after it.
pub(crate) fn resolve_spans(text: &str, matches: &[Match]) -> Vec<HighlightSpan> {
    let mut spans: Vec<HighlightSpan> = matches
        .iter()
        .map(|m| HighlightSpan::from_match(text, m))
        .collect();
    spans.sort();
    spans.dedup();

    let mut resolved: Vec<HighlightSpan> = Vec::with_capacity(spans.len());
    let mut claimed = 0;
    for span in spans {
        if span.is_empty() {
            // An empty span inside a claimed region has nothing to mark.
            if span.start >= claimed {
                resolved.push(span);
            }
            continue;
        }
        let start = span.start.max(claimed);
        if start < span.end {
            resolved.push(HighlightSpan {
                start,
                end: span.end,
            });
            claimed = span.end;
        }
    }
    resolved
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod tests;
