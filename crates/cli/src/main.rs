// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! relens CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use relens::cli::{Cli, Command};
use relens::error::ExitCode;

mod cmd_eval;
mod cmd_highlight;
mod cmd_presets;

fn init_logging() {
    let filter = EnvFilter::try_from_env("RELENS_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("relens: {}", e);
            match e.downcast_ref::<relens::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Eval(args)) => cmd_eval::run(&cli, args),
        Some(Command::Highlight(args)) => cmd_highlight::run(&cli, args),
        Some(Command::Presets(args)) => cmd_presets::run(args),
    }
}
