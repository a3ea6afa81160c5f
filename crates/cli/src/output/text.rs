// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! ```text
//! Valid
//! Found 2 matches
//!   10-20
//!     Index: 0
//!     Groups: 10, 20
//! ```

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::match_noun;
use crate::color::scheme;
use crate::pattern::{EvaluationResult, Match};
use crate::presets::Preset;

/// Placeholder printed for a group that did not participate.
const ABSENT_GROUP: &str = "(unmatched)";

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the validity badge, the match count and every match.
    pub fn write_result(&mut self, result: &EvaluationResult) -> std::io::Result<()> {
        if !result.is_valid {
            self.out.set_color(&scheme::invalid())?;
            write!(self.out, "Invalid")?;
            self.out.reset()?;
            match &result.error {
                Some(error) => writeln!(self.out, ": {}", error)?,
                None => writeln!(self.out)?,
            }
            return Ok(());
        }

        self.out.set_color(&scheme::valid())?;
        write!(self.out, "Valid")?;
        self.out.reset()?;
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Found {} {}",
            result.match_count,
            match_noun(result.match_count)
        )?;

        for m in &result.matches {
            self.write_match(m)?;
        }
        Ok(())
    }

    fn write_match(&mut self, m: &Match) -> std::io::Result<()> {
        write!(self.out, "  ")?;
        if m.text.is_empty() {
            self.out.set_color(&scheme::absent())?;
            write!(self.out, "(empty)")?;
        } else {
            self.out.set_color(&scheme::highlight())?;
            write!(self.out, "{}", m.text)?;
        }
        self.out.reset()?;
        writeln!(self.out)?;

        write!(self.out, "    Index: ")?;
        self.out.set_color(&scheme::index())?;
        write!(self.out, "{}", m.index)?;
        self.out.reset()?;
        writeln!(self.out)?;

        if m.groups.is_empty() {
            return Ok(());
        }
        write!(self.out, "    Groups: ")?;
        for (i, group) in m.groups.iter().enumerate() {
            if i > 0 {
                write!(self.out, ", ")?;
            }
            match group {
                Some(text) => {
                    self.out.set_color(&scheme::group())?;
                    write!(self.out, "{}", text)?;
                }
                None => {
                    self.out.set_color(&scheme::absent())?;
                    write!(self.out, "{}", ABSENT_GROUP)?;
                }
            }
            self.out.reset()?;
        }
        writeln!(self.out)
    }

    /// Write one line per preset: name, pattern, description.
    pub fn write_presets(&mut self, presets: &[Preset]) -> std::io::Result<()> {
        let width = presets.iter().map(|p| p.name.len()).max().unwrap_or(0);
        for preset in presets {
            self.out.set_color(&scheme::valid())?;
            write!(self.out, "{:<width$}", preset.name, width = width)?;
            self.out.reset()?;
            writeln!(self.out, "  {}", preset.pattern)?;
            writeln!(self.out, "{:<width$}  {}", "", preset.description, width = width)?;
        }
        Ok(())
    }

    /// Write the outcome of checking one preset.
    pub fn write_preset_check(
        &mut self,
        preset: &Preset,
        result: &EvaluationResult,
    ) -> std::io::Result<()> {
        write!(self.out, "{}: ", preset.name)?;
        if result.is_valid {
            self.out.set_color(&scheme::valid())?;
            write!(self.out, "ok")?;
            self.out.reset()?;
            writeln!(self.out)
        } else {
            self.out.set_color(&scheme::invalid())?;
            write!(self.out, "FAIL")?;
            self.out.reset()?;
            writeln!(self.out, " {}", result.error.as_deref().unwrap_or_default())
        }
    }

    /// Write `rendered` followed by a newline unless it already ends in one.
    pub fn write_highlighted(&mut self, rendered: &str) -> std::io::Result<()> {
        write!(self.out, "{}", rendered)?;
        if !rendered.ends_with('\n') {
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
