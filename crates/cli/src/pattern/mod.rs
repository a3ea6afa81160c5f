// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern evaluation.
//!
//! Compiles a pattern with its flags and enumerates matches:
//! - Single literal: memchr::memmem
//! - Multiple literals: aho-corasick
//! - Regex: regex crate
//! - Backreferences and lookaround: fancy-regex
//!
//! Iteration always advances past empty matches, and every failure of a
//! request is reported through `EvaluationResult` rather than returned.

pub mod evaluate;
pub mod flags;
pub mod matcher;

pub use evaluate::{
    EvaluationResult, Match, PatternRequest, RequestError, evaluate, evaluate_request,
    try_evaluate_request,
};
pub use flags::{FlagError, FlagSet};
pub use matcher::{CompileError, CompiledPattern, Engine, EvaluationError, Limits, Matcher};
