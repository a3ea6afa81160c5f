//! Compiled pattern matchers with automatic engine selection.

use std::ops::Range;

use aho_corasick::{AhoCorasick, MatchKind};
use memchr::memmem::Finder;
use regex::{Regex, RegexBuilder};

use super::flags::FlagSet;

/// Resource bounds applied while compiling and iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum matches collected by one global evaluation; unbounded when
    /// unset.
    pub max_matches: Option<usize>,
    /// Maximum compiled program size in bytes.
    pub size_limit: usize,
    /// Maximum backtracking steps for patterns that need a backtracking engine.
    pub backtrack_limit: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_matches: None,
            size_limit: 10 * (1 << 20),
            backtrack_limit: 1_000_000,
        }
    }
}

/// Pattern rejected before any matching was attempted.
///
/// The message is the underlying engine's, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CompileError {
    pub message: String,
}

impl CompileError {
    fn from_engine(err: impl std::fmt::Display) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Matcher fault during iteration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    #[error("too many matches (limit: {limit})")]
    TooManyMatches { limit: usize },

    #[error("{0}")]
    Engine(String),
}

/// One successful search: the whole match plus each capture group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCaptures {
    /// Byte range of the whole match.
    pub span: Range<usize>,
    /// Byte ranges of groups 1..=n; `None` when the group did not participate.
    pub groups: Vec<Option<Range<usize>>>,
}

impl RawCaptures {
    fn without_groups(span: Range<usize>) -> Self {
        Self {
            span,
            groups: Vec::new(),
        }
    }
}

/// A searchable pattern engine.
///
/// `match_from` searches `text` starting at byte `offset`, treating the whole
/// of `text` as context so anchors and word boundaries see what precedes
/// `offset`.
pub trait Matcher: Send + Sync {
    fn match_from(&self, text: &str, offset: usize)
    -> Result<Option<RawCaptures>, EvaluationError>;

    /// Number of capture groups, excluding the implicit whole-match group.
    fn group_count(&self) -> usize;
}

/// Engine chosen for a pattern.
#[derive(Debug)]
pub enum Engine {
    /// Single literal string (fastest).
    Literal(LiteralMatcher),
    /// Alternation of literal strings (Aho-Corasick).
    MultiLiteral(MultiLiteralMatcher),
    /// Linear-time regex.
    Regex(RegexMatcher),
    /// Backtracking regex for backreferences and lookaround.
    Backtracking(BacktrackingMatcher),
}

/// A pattern compiled together with its flags.
#[derive(Debug)]
pub struct CompiledPattern {
    flags: FlagSet,
    engine: Engine,
}

/// Matcher for single literal strings using memchr.
#[derive(Debug)]
pub struct LiteralMatcher {
    finder: Finder<'static>,
}

/// Matcher for pure alternations of literals.
#[derive(Debug)]
pub struct MultiLiteralMatcher {
    automaton: AhoCorasick,
}

/// Matcher backed by the `regex` crate.
#[derive(Debug)]
pub struct RegexMatcher {
    regex: Regex,
}

/// Matcher backed by `fancy-regex`.
#[derive(Debug)]
pub struct BacktrackingMatcher {
    regex: fancy_regex::Regex,
}

impl CompiledPattern {
    /// Compile a pattern with its flags, choosing the cheapest engine that
    /// accepts it.
    ///
    /// - Plain literal (case-sensitive) -> `LiteralMatcher`
    /// - Pure alternation of literals (case-sensitive) -> `MultiLiteralMatcher`
    /// - Anything the linear engine accepts -> `RegexMatcher`
    /// - Backreferences and lookaround, which the linear engine refuses ->
    ///   `BacktrackingMatcher`
    pub fn compile(pattern: &str, flags: FlagSet, limits: &Limits) -> Result<Self, CompileError> {
        // Literal tiers compare bytes exactly, so case folding needs a regex.
        let exact = !flags.ignore_case;
        let engine = if exact && is_literal(pattern) {
            Engine::Literal(LiteralMatcher::new(pattern))
        } else if let Some(literals) = extract_alternation_literals(pattern).filter(|_| exact) {
            Engine::MultiLiteral(MultiLiteralMatcher::new(&literals)?)
        } else {
            match RegexMatcher::build(pattern, flags, limits) {
                Ok(m) => Engine::Regex(m),
                Err(linear_err) if !is_unsupported_feature(&linear_err) => {
                    return Err(CompileError::from_engine(linear_err));
                }
                Err(linear_err) => {
                    tracing::debug!("pattern needs backtracking engine: {}", linear_err);
                    Engine::Backtracking(BacktrackingMatcher::new(pattern, flags, limits)?)
                }
            }
        };
        Ok(Self { flags, engine })
    }

    pub fn flags(&self) -> FlagSet {
        self.flags
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    fn matcher(&self) -> &dyn Matcher {
        match &self.engine {
            Engine::Literal(m) => m,
            Engine::MultiLiteral(m) => m,
            Engine::Regex(m) => m,
            Engine::Backtracking(m) => m,
        }
    }
}

impl Matcher for CompiledPattern {
    fn match_from(
        &self,
        text: &str,
        offset: usize,
    ) -> Result<Option<RawCaptures>, EvaluationError> {
        self.matcher().match_from(text, offset)
    }

    fn group_count(&self) -> usize {
        self.matcher().group_count()
    }
}

/// Whether the linear engine rejected the pattern only because it uses a
/// construct (backreference, lookaround) that needs backtracking.
///
/// Syntax errors and size-limit overruns are final.
fn is_unsupported_feature(err: &regex::Error) -> bool {
    match err {
        regex::Error::Syntax(message) => message.contains("not supported"),
        _ => false,
    }
}

/// Check if pattern is a plain literal (no regex metacharacters).
fn is_literal(pattern: &str) -> bool {
    !pattern.is_empty()
        && !pattern.chars().any(|c| {
            matches!(
                c,
                '\\' | '.' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '|'
            )
        })
}

/// Extract literals from patterns like "foo|bar|baz".
///
/// Returns None if the pattern is not a pure alternation of non-empty literals.
fn extract_alternation_literals(pattern: &str) -> Option<Vec<String>> {
    let parts: Vec<&str> = pattern.split('|').collect();
    if parts.len() < 2 {
        return None;
    }

    for part in &parts {
        if !is_literal(part) {
            return None;
        }
    }

    Some(parts.into_iter().map(String::from).collect())
}

impl LiteralMatcher {
    pub fn new(pattern: &str) -> Self {
        Self {
            finder: Finder::new(pattern).into_owned(),
        }
    }
}

impl Matcher for LiteralMatcher {
    fn match_from(
        &self,
        text: &str,
        offset: usize,
    ) -> Result<Option<RawCaptures>, EvaluationError> {
        let Some(rest) = text.as_bytes().get(offset..) else {
            return Ok(None);
        };
        let len = self.finder.needle().len();
        Ok(self
            .finder
            .find(rest)
            .map(|pos| RawCaptures::without_groups(offset + pos..offset + pos + len)))
    }

    fn group_count(&self) -> usize {
        0
    }
}

impl MultiLiteralMatcher {
    /// Build a leftmost-first automaton so alternation order matches regex
    /// semantics.
    pub fn new(patterns: &[String]) -> Result<Self, CompileError> {
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostFirst)
            .build(patterns)
            .map_err(CompileError::from_engine)?;
        Ok(Self { automaton })
    }
}

impl Matcher for MultiLiteralMatcher {
    fn match_from(
        &self,
        text: &str,
        offset: usize,
    ) -> Result<Option<RawCaptures>, EvaluationError> {
        if offset > text.len() {
            return Ok(None);
        }
        let input = aho_corasick::Input::new(text).range(offset..);
        self.automaton
            .try_find(input)
            .map(|found| found.map(|m| RawCaptures::without_groups(m.start()..m.end())))
            .map_err(|e| EvaluationError::Engine(e.to_string()))
    }

    fn group_count(&self) -> usize {
        0
    }
}

impl RegexMatcher {
    pub fn new(pattern: &str, flags: FlagSet, limits: &Limits) -> Result<Self, CompileError> {
        Self::build(pattern, flags, limits).map_err(CompileError::from_engine)
    }

    fn build(pattern: &str, flags: FlagSet, limits: &Limits) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(flags.ignore_case)
            .multi_line(flags.multiline)
            .size_limit(limits.size_limit)
            .build()?;
        Ok(Self { regex })
    }
}

impl Matcher for RegexMatcher {
    fn match_from(
        &self,
        text: &str,
        offset: usize,
    ) -> Result<Option<RawCaptures>, EvaluationError> {
        if offset > text.len() {
            return Ok(None);
        }
        let Some(caps) = self.regex.captures_at(text, offset) else {
            return Ok(None);
        };
        let Some(whole) = caps.get(0) else {
            return Ok(None);
        };
        let groups = (1..caps.len())
            .map(|i| caps.get(i).map(|m| m.range()))
            .collect();
        Ok(Some(RawCaptures {
            span: whole.range(),
            groups,
        }))
    }

    fn group_count(&self) -> usize {
        self.regex.captures_len().saturating_sub(1)
    }
}

impl BacktrackingMatcher {
    pub fn new(pattern: &str, flags: FlagSet, limits: &Limits) -> Result<Self, CompileError> {
        let source = format!("{}{}", flags.inline_prefix(), pattern);
        let regex = fancy_regex::RegexBuilder::new(&source)
            .backtrack_limit(limits.backtrack_limit)
            .delegate_size_limit(limits.size_limit)
            .build()
            .map_err(CompileError::from_engine)?;
        Ok(Self { regex })
    }
}

impl Matcher for BacktrackingMatcher {
    fn match_from(
        &self,
        text: &str,
        offset: usize,
    ) -> Result<Option<RawCaptures>, EvaluationError> {
        if offset > text.len() {
            return Ok(None);
        }
        let caps = self
            .regex
            .captures_from_pos(text, offset)
            .map_err(|e| EvaluationError::Engine(e.to_string()))?;
        let Some(caps) = caps else {
            return Ok(None);
        };
        let Some(whole) = caps.get(0) else {
            return Ok(None);
        };
        let groups = (1..caps.len())
            .map(|i| caps.get(i).map(|m| m.start()..m.end()))
            .collect();
        Ok(Some(RawCaptures {
            span: whole.start()..whole.end(),
            groups,
        }))
    }

    fn group_count(&self) -> usize {
        self.regex.captures_len().saturating_sub(1)
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
