// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for evaluation results and presets.

pub mod json;
pub mod text;

/// "match" or "matches" for `count`.
pub fn match_noun(count: usize) -> &'static str {
    if count == 1 { "match" } else { "matches" }
}
