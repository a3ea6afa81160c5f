// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Presets command implementation.

use rayon::prelude::*;

use relens::cli::{OutputFormat, PresetsArgs};
use relens::color::resolve_color;
use relens::error::ExitCode;
use relens::output::json::{JsonFormatter, PresetCheck};
use relens::output::text::TextFormatter;
use relens::pattern::{EvaluationResult, Limits, PatternRequest, evaluate_request};
use relens::presets::PRESETS;

/// Run the presets command.
pub fn run(args: &PresetsArgs) -> anyhow::Result<ExitCode> {
    let color = resolve_color(false, false);
    if !args.check {
        match args.output {
            OutputFormat::Text => TextFormatter::stdout(color).write_presets(PRESETS)?,
            OutputFormat::Json => JsonFormatter::new(std::io::stdout().lock()).write_presets(PRESETS)?,
        }
        return Ok(ExitCode::Success);
    }

    let limits = Limits::default();
    let results: Vec<EvaluationResult> = PRESETS
        .par_iter()
        .map(|preset| evaluate_request(&PatternRequest::new(preset.pattern, "", "g"), &limits))
        .collect();
    let all_valid = results.iter().all(|r| r.is_valid);

    match args.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(color);
            for (preset, result) in PRESETS.iter().zip(&results) {
                formatter.write_preset_check(preset, result)?;
            }
        }
        OutputFormat::Json => {
            let checks: Vec<PresetCheck<'_>> = PRESETS
                .iter()
                .zip(&results)
                .map(|(preset, result)| PresetCheck::new(preset, result))
                .collect();
            JsonFormatter::new(std::io::stdout().lock()).write_preset_checks(&checks)?;
        }
    }

    Ok(if all_valid {
        ExitCode::Success
    } else {
        ExitCode::InvalidPattern
    })
}
