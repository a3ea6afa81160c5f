// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn config_error_display() {
    let err = Error::Config {
        message: "invalid version".into(),
        path: Some(PathBuf::from("relens.toml")),
    };
    assert!(err.to_string().contains("invalid version"));
}

#[test]
fn timeout_display_includes_deadline() {
    let err = Error::Timeout(Duration::from_millis(250));
    assert_eq!(err.to_string(), "evaluation timed out after 250ms");
}

#[test]
fn io_error_display_includes_path() {
    let err = Error::Io {
        path: PathBuf::from("input.txt"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    };
    let msg = err.to_string();
    assert!(msg.contains("input.txt"));
    assert!(msg.contains("missing"));
}

#[parameterized(
    config = { Error::Config { message: "x".into(), path: None }, ExitCode::ConfigError },
    argument = { Error::Argument("x".into()), ExitCode::ConfigError },
    timeout = { Error::Timeout(Duration::from_secs(1)), ExitCode::InternalError },
    internal = { Error::Internal("x".into()), ExitCode::InternalError },
)]
fn exit_code_mapping(err: Error, expected: ExitCode) {
    assert_eq!(ExitCode::from(&err), expected);
}
