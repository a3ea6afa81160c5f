// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! Evaluation results use the wire shape (`isValid`, `matches`, `matchCount`,
//! `error`). JSON is buffered and written at the end (not streamed).

use std::io::Write;

use serde::Serialize;

use crate::pattern::EvaluationResult;
use crate::presets::Preset;

/// Outcome of checking one preset.
#[derive(Debug, Serialize)]
pub struct PresetCheck<'a> {
    pub name: &'a str,
    pub pattern: &'a str,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
}

impl<'a> PresetCheck<'a> {
    pub fn new(preset: &'a Preset, result: &'a EvaluationResult) -> Self {
        Self {
            name: preset.name,
            pattern: preset.pattern,
            valid: result.is_valid,
            error: result.error.as_deref(),
        }
    }
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write an evaluation result.
    pub fn write_result(&mut self, result: &EvaluationResult) -> std::io::Result<()> {
        self.write_value(result)
    }

    /// Write the preset list.
    pub fn write_presets(&mut self, presets: &[Preset]) -> std::io::Result<()> {
        self.write_value(&presets)
    }

    /// Write preset check outcomes.
    pub fn write_preset_checks(&mut self, checks: &[PresetCheck<'_>]) -> std::io::Result<()> {
        self.write_value(&checks)
    }

    fn write_value<T: Serialize + ?Sized>(&mut self, value: &T) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, value)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
