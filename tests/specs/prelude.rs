//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the relens binary and checking its
//! stdout, stderr and exit code.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::{Path, PathBuf};

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the relens binary
pub fn relens_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("relens"))
}

/// `relens eval PATTERN`
pub fn eval(pattern: &str) -> Run {
    Run::new(["eval", pattern])
}

/// `relens highlight PATTERN`
pub fn highlight(pattern: &str) -> Run {
    Run::new(["highlight", pattern])
}

/// `relens presets`
pub fn presets() -> Run {
    Run::new(["presets"])
}

/// Fluent builder for one relens invocation.
pub struct Run {
    args: Vec<String>,
    stdin: Option<String>,
    envs: Vec<(String, String)>,
    dir: Option<PathBuf>,
}

#[allow(dead_code)]
impl Run {
    /// Start from an arbitrary argument list.
    pub fn from_args<const N: usize>(args: [&str; N]) -> Self {
        Self::new(args)
    }

    fn new<const N: usize>(args: [&str; N]) -> Self {
        Self {
            args: args.iter().map(|s| s.to_string()).collect(),
            stdin: None,
            envs: Vec::new(),
            dir: None,
        }
    }

    /// Pass the text to search as a positional argument.
    pub fn text(self, text: &str) -> Self {
        self.args([text])
    }

    /// Append arguments.
    pub fn args<const N: usize>(mut self, args: [&str; N]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Feed `input` on stdin.
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Set an environment variable.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Run from `dir` (config discovery starts there).
    pub fn pwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Request JSON output and parse it.
    pub fn json(self) -> serde_json::Value {
        let output = run_passes(self.args(["-o", "json"]).command());
        serde_json::from_slice(&output.output.stdout).unwrap()
    }

    pub fn passes(self) -> RunAssert {
        run_passes(self.command())
    }

    pub fn exits(self, code: i32) -> RunAssert {
        run_exits(self.command(), code)
    }

    fn command(self) -> assert_cmd::Command {
        let mut cmd = relens_cmd();
        cmd.args(&self.args);
        cmd.env_remove("NO_COLOR")
            .env_remove("COLOR")
            .env_remove("RELENS_CONFIG")
            .env_remove("RELENS_LOG");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.current_dir(self.dir.unwrap_or_else(std::env::temp_dir));
        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd
    }
}

fn run_passes(mut cmd: assert_cmd::Command) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert!(
        output.status.success(),
        "expected success, got exit code {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

fn run_exits(mut cmd: assert_cmd::Command, code: i32) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
        code,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

/// Result of a run for chaining assertions
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout matches predicate.
    /// Prefer `stdout_eq` for strict matching.
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }
}

// =============================================================================
// Project
// =============================================================================

/// Temporary directory acting as a project root.
///
/// Holds a `.git` marker so config discovery stops here, and prefixes
/// `version = 1` to configs.
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Write relens.toml with `version = 1` prepended.
    pub fn config(&self, body: &str) {
        self.file("relens.toml", &format!("version = 1\n{body}"));
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, rel: &str, content: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
