// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match iteration and the request-level evaluation entry point.
//!
//! `evaluate` drives a compiled pattern across the text. `evaluate_request`
//! wraps validation, compilation and iteration so that every failure becomes
//! an invalid `EvaluationResult` instead of an error.

use serde::{Deserialize, Serialize};

use super::flags::{FlagError, FlagSet};
use super::matcher::{CompileError, CompiledPattern, EvaluationError, Limits, Matcher, RawCaptures};

/// A located occurrence of the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Matched text, exactly `text[index..index + self.text.len()]`.
    #[serde(rename = "match")]
    pub text: String,
    /// Byte offset where the match begins.
    pub index: usize,
    /// Offset in Unicode scalar values where the match begins.
    pub char_index: usize,
    /// Captured groups in declaration order; `None` for groups that did not
    /// participate.
    pub groups: Vec<Option<String>>,
}

impl Match {
    /// Byte offset one past the end of the match.
    pub fn end(&self) -> usize {
        self.index + self.text.len()
    }
}

/// Evaluation input in its wire shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PatternRequest {
    pub pattern: String,
    #[serde(default)]
    pub text: String,
    /// Wire flag string such as `"gi"`. `None` is a caller error; `""` is the
    /// empty flag set.
    #[serde(default)]
    pub flags: Option<String>,
}

impl PatternRequest {
    pub fn new(pattern: impl Into<String>, text: impl Into<String>, flags: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            text: text.into(),
            flags: Some(flags.into()),
        }
    }
}

/// Outcome of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub is_valid: bool,
    pub matches: Vec<Match>,
    pub match_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EvaluationResult {
    fn valid(matches: Vec<Match>) -> Self {
        Self {
            is_valid: true,
            match_count: matches.len(),
            matches,
            error: None,
        }
    }

    fn invalid(error: &RequestError) -> Self {
        Self {
            is_valid: false,
            matches: Vec::new(),
            match_count: 0,
            error: Some(error.to_string()),
        }
    }
}

/// Any reason a request did not produce matches.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("pattern is required")]
    EmptyPattern,

    #[error("flags are required")]
    MissingFlags,

    #[error(transparent)]
    Flags(#[from] FlagError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

impl RequestError {
    /// Short category name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RequestError::EmptyPattern | RequestError::MissingFlags | RequestError::Flags(_) => {
                "misuse"
            }
            RequestError::Compile(_) => "compile",
            RequestError::Evaluation(_) => "evaluation",
        }
    }
}

/// Evaluate a request. Never fails: every error is reported in the result.
pub fn evaluate_request(request: &PatternRequest, limits: &Limits) -> EvaluationResult {
    match try_evaluate_request(request, limits) {
        Ok(matches) => {
            tracing::debug!("pattern {:?}: {} matches", request.pattern, matches.len());
            EvaluationResult::valid(matches)
        }
        Err(e) => {
            tracing::debug!("pattern {:?}: {} error: {}", request.pattern, e.kind(), e);
            EvaluationResult::invalid(&e)
        }
    }
}

/// Validate, compile and evaluate a request, surfacing the first failure.
pub fn try_evaluate_request(
    request: &PatternRequest,
    limits: &Limits,
) -> Result<Vec<Match>, RequestError> {
    if request.pattern.trim().is_empty() {
        return Err(RequestError::EmptyPattern);
    }
    let flags: FlagSet = request
        .flags
        .as_deref()
        .ok_or(RequestError::MissingFlags)?
        .parse()?;
    let compiled = CompiledPattern::compile(&request.pattern, flags, limits)?;
    evaluate(&compiled, &request.text, limits).map_err(RequestError::from)
}

/// Collect matches of `pattern` in `text`.
///
/// Without the global flag at most the first match is returned. With it,
/// each search resumes at the end of the previous match; after an empty match
/// the search resumes one character further so iteration always advances.
pub fn evaluate(
    pattern: &CompiledPattern,
    text: &str,
    limits: &Limits,
) -> Result<Vec<Match>, EvaluationError> {
    let global = pattern.flags().global;
    let mut matches = Vec::new();
    let mut chars = CharOffsets::default();
    let mut offset = 0;

    while offset <= text.len() {
        let Some(caps) = pattern.match_from(text, offset)? else {
            break;
        };
        if let Some(limit) = limits.max_matches
            && matches.len() >= limit
        {
            return Err(EvaluationError::TooManyMatches { limit });
        }

        let span = caps.span.clone();
        tracing::trace!("match at {}..{}", span.start, span.end);
        let char_index = chars.advance(text, span.start);
        matches.push(to_match(text, caps, char_index));

        if !global {
            break;
        }
        offset = if span.is_empty() {
            next_char_boundary(text, span.end)
        } else {
            span.end
        };
    }

    Ok(matches)
}

fn to_match(text: &str, caps: RawCaptures, char_index: usize) -> Match {
    Match {
        text: text[caps.span.clone()].to_string(),
        index: caps.span.start,
        char_index,
        groups: caps
            .groups
            .into_iter()
            .map(|g| g.map(|range| text[range].to_string()))
            .collect(),
    }
}

/// Byte offset of the character after the one starting at `offset`.
///
/// Returns `text.len() + 1` at the end of the text so iteration stops.
fn next_char_boundary(text: &str, offset: usize) -> usize {
    match text.get(offset..).and_then(|rest| rest.chars().next()) {
        Some(c) => offset + c.len_utf8(),
        None => text.len() + 1,
    }
}

/// Incremental byte-to-character offset conversion for increasing offsets.
#[derive(Default)]
struct CharOffsets {
    byte: usize,
    chars: usize,
}

impl CharOffsets {
    fn advance(&mut self, text: &str, byte: usize) -> usize {
        if byte < self.byte {
            self.byte = 0;
            self.chars = 0;
        }
        self.chars += text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}

#[cfg(test)]
#[path = "evaluate_tests.rs"]
mod tests;
