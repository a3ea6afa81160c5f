// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flag sets and their wire form.
//!
//! The wire form is a string of single-character codes (`g`, `i`, `m`) in any
//! order. Internally flags are independent booleans so matching never depends
//! on the spelling of the request.

use std::fmt;
use std::str::FromStr;

/// Modifiers that alter matching semantics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FlagSet {
    /// Keep searching after the first match.
    pub global: bool,
    /// Fold case during comparison.
    pub ignore_case: bool,
    /// `^` and `$` match at line boundaries.
    pub multiline: bool,
}

/// Error parsing a wire flag string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlagError {
    #[error("unknown flag '{0}' (expected g, i or m)")]
    Unknown(char),
}

impl FlagSet {
    /// Flag set with only `global` enabled.
    pub fn global() -> Self {
        Self {
            global: true,
            ..Self::default()
        }
    }

    pub fn with_ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    pub fn with_multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    /// Inline flag group understood by both engines, e.g. `(?im)`.
    ///
    /// Returns an empty string when no inline flag applies.
    pub(crate) fn inline_prefix(&self) -> &'static str {
        match (self.ignore_case, self.multiline) {
            (true, true) => "(?im)",
            (true, false) => "(?i)",
            (false, true) => "(?m)",
            (false, false) => "",
        }
    }
}

impl FromStr for FlagSet {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = FlagSet::default();
        for c in s.chars() {
            match c {
                'g' => flags.global = true,
                'i' => flags.ignore_case = true,
                'm' => flags.multiline = true,
                other => return Err(FlagError::Unknown(other)),
            }
        }
        Ok(flags)
    }
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.global {
            f.write_str("g")?;
        }
        if self.ignore_case {
            f.write_str("i")?;
        }
        if self.multiline {
            f.write_str("m")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "flags_tests.rs"]
mod tests;
