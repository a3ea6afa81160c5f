// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Eval command implementation.

use relens::cli::{Cli, EvalArgs, InputArgs, OutputFormat};
use relens::color::resolve_color;
use relens::config::{self, Config};
use relens::error::ExitCode;
use relens::output::json::JsonFormatter;
use relens::output::text::TextFormatter;
use relens::pattern::{EvaluationResult, PatternRequest};
use relens::runner;

/// Run the eval command.
pub fn run(cli: &Cli, args: &EvalArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = config::load_resolved(cli.config.as_deref(), &cwd)?;

    let (_, result) = evaluate(&args.input, &config)?;

    match args.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(resolve_color(args.color, args.no_color));
            formatter.write_result(&result)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock()).write_result(&result)?;
        }
    }

    Ok(if result.is_valid {
        ExitCode::Success
    } else {
        ExitCode::InvalidPattern
    })
}

/// Evaluate the pattern and text named by `input`, returning the text with
/// the result.
///
/// Flags and limits not given on the command line come from `config`.
pub fn evaluate(input: &InputArgs, config: &Config) -> anyhow::Result<(String, EvaluationResult)> {
    let pattern = input.resolve_pattern()?;
    let text = input.resolve_text(std::io::stdin().lock())?;
    let flags = input
        .flags
        .clone()
        .unwrap_or_else(|| config.default_flags().to_string());

    tracing::debug!(%pattern, %flags, text_len = text.len(), "evaluating");

    let request = PatternRequest::new(pattern, text.clone(), flags);
    let timeout = input.timeout.or(config.limits.timeout);
    let result = runner::evaluate_with_timeout(request, config.limits.to_limits(), timeout)?;
    Ok((text, result))
}
