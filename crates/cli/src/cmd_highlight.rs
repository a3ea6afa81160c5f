// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Highlight command implementation.

use termcolor::ColorChoice;

use relens::cli::{Cli, HighlightArgs};
use relens::color::{emits_color, resolve_color, scheme};
use relens::config::{self, Config};
use relens::error::ExitCode;
use relens::highlight::{Delimiters, compose_with};
use relens::output::text::TextFormatter;

use crate::cmd_eval;

/// Run the highlight command.
pub fn run(cli: &Cli, args: &HighlightArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = config::load_resolved(cli.config.as_deref(), &cwd)?;

    let (text, result) = cmd_eval::evaluate(&args.input, &config)?;
    if !result.is_valid {
        eprintln!(
            "relens: invalid pattern: {}",
            result.error.as_deref().unwrap_or_default()
        );
        return Ok(ExitCode::InvalidPattern);
    }

    let delimiters = choose_delimiters(args, &config, resolve_color(args.color, args.no_color));
    let rendered = compose_with(&text, &result.matches, &delimiters);

    TextFormatter::stdout(ColorChoice::Never).write_highlighted(&rendered)?;
    Ok(ExitCode::Success)
}

/// Markers in priority order: `--color`, `--open`/`--close`, the config file,
/// terminal color when stdout supports it, then the default markers.
fn choose_delimiters(args: &HighlightArgs, config: &Config, choice: ColorChoice) -> Delimiters {
    if args.color {
        return Delimiters::ansi(&scheme::highlight());
    }
    if args.open.is_some() || args.close.is_some() {
        let defaults = Delimiters::default();
        return Delimiters::new(
            args.open.clone().unwrap_or(defaults.open),
            args.close.clone().unwrap_or(defaults.close),
        );
    }
    if let Some(delimiters) = config.highlight.delimiters() {
        return delimiters;
    }
    if emits_color(choice) {
        return Delimiters::ansi(&scheme::highlight());
    }
    Delimiters::default()
}
