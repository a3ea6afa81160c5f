// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! relens: regular-expression evaluation and match highlighting.
//!
//! The [`pattern`] module compiles a pattern with its flags and lists every
//! match; [`highlight`] renders a text with those matches marked.

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod highlight;
pub mod output;
pub mod pattern;
pub mod presets;
pub mod runner;

pub use cli::{Cli, Command, OutputFormat};
pub use error::{Error, ExitCode, Result};
pub use highlight::{Delimiters, compose, compose_with, strip_markers};
pub use pattern::{
    EvaluationResult, FlagSet, Limits, Match, PatternRequest, evaluate_request,
};
pub use presets::{PRESETS, Preset};
