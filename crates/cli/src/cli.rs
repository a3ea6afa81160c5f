// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::config::duration::parse_duration;
use crate::error::{Error, Result};
use crate::presets;

/// Evaluate regular expressions and highlight every match
#[derive(Parser)]
#[command(name = "relens")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "RELENS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every match with its offset and groups
    Eval(EvalArgs),
    /// Print the text with every match marked
    Highlight(HighlightArgs),
    /// List the built-in common patterns
    Presets(PresetsArgs),
}

/// Pattern, text and evaluation options shared by `eval` and `highlight`.
#[derive(clap::Args)]
pub struct InputArgs {
    /// Regular expression (with --preset, the text instead)
    #[arg(value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Text to search (default: --file, then stdin)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Flags: any of g (global), i (ignore case), m (multiline)
    #[arg(short, long, value_name = "FLAGS")]
    pub flags: Option<String>,

    /// Use a named common pattern instead of PATTERN
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Abandon evaluation after this long (e.g. 500ms, 2s)
    #[arg(long, value_name = "DURATION", value_parser = parse_duration)]
    pub timeout: Option<Duration>,
}

impl InputArgs {
    /// The pattern to evaluate, from --preset or the first positional.
    pub fn resolve_pattern(&self) -> Result<String> {
        match &self.preset {
            Some(name) => presets::find(name)
                .map(|p| p.pattern.to_string())
                .ok_or_else(|| Error::Argument(format!("unknown preset: {name}"))),
            None => self
                .pattern
                .clone()
                .ok_or_else(|| Error::Argument("a PATTERN or --preset is required".to_string())),
        }
    }

    /// The text to search: positional, then --file, then `stdin`.
    pub fn resolve_text(&self, stdin: impl Read) -> Result<String> {
        let positional = if self.preset.is_some() {
            if self.text.is_some() {
                return Err(Error::Argument(
                    "--preset takes the place of PATTERN; pass only TEXT".to_string(),
                ));
            }
            self.pattern.as_deref()
        } else {
            self.text.as_deref()
        };

        match (positional, &self.file) {
            (Some(_), Some(_)) => Err(Error::Argument(
                "pass TEXT or --file, not both".to_string(),
            )),
            (Some(text), None) => Ok(text.to_string()),
            (None, Some(path)) => std::fs::read_to_string(path).map_err(|e| Error::Io {
                path: path.clone(),
                source: e,
            }),
            (None, None) => {
                let mut text = String::new();
                let mut stdin = stdin;
                stdin.read_to_string(&mut text).map_err(|e| Error::Io {
                    path: PathBuf::from("<stdin>"),
                    source: e,
                })?;
                Ok(text)
            }
        }
    }
}

#[derive(clap::Args)]
pub struct EvalArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct HighlightArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Marker inserted before each match
    #[arg(long, value_name = "MARKER")]
    pub open: Option<String>,

    /// Marker inserted after each match
    #[arg(long, value_name = "MARKER")]
    pub close: Option<String>,

    /// Mark matches with terminal color instead of text markers
    #[arg(long)]
    pub color: bool,

    /// Never use terminal color for markers
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct PresetsArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Verify that every preset compiles
    #[arg(long)]
    pub check: bool,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
