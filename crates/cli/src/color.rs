// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. `--no-color` / `--color` flags
//! 2. NO_COLOR env var -> no color
//! 3. COLOR env var -> use color
//! 4. default: color only when stdout is a TTY outside CI and agent shells

use std::io::IsTerminal;
use termcolor::ColorChoice;

/// Resolve color choice from command-line overrides and the environment.
pub fn resolve_color(force: bool, disable: bool) -> ColorChoice {
    if disable {
        return ColorChoice::Never;
    }
    if force {
        return ColorChoice::Always;
    }
    // NO_COLOR spec: any value (including empty) disables color
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os("COLOR").is_some() {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() || is_agent_environment() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Whether a resolved choice actually emits escape sequences.
pub fn emits_color(choice: ColorChoice) -> bool {
    !matches!(choice, ColorChoice::Never)
}

/// Check if running in an AI agent or CI environment.
fn is_agent_environment() -> bool {
    std::env::var_os("CLAUDE_CODE").is_some()
        || std::env::var_os("CODEX").is_some()
        || std::env::var_os("CURSOR").is_some()
        || std::env::var_os("CI").is_some()
}

/// Color scheme for output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Highlighted match: bold magenta.
    pub fn highlight() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Magenta)).set_bold(true);
        spec
    }

    /// Green "Valid" indicator.
    pub fn valid() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Red "Invalid" indicator.
    pub fn invalid() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Yellow match offset.
    pub fn index() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Cyan group text.
    pub fn group() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Dimmed placeholder for non-participating groups.
    pub fn absent() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_dimmed(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
