// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluation under a wall-clock deadline.
//!
//! The evaluator itself never times out; a caller that needs a deadline runs
//! it on a worker thread and stops waiting once the deadline passes. An
//! abandoned worker keeps running until its own step limits stop it, and its
//! result is dropped.

use std::time::{Duration, Instant};

use crossbeam_channel::{RecvTimeoutError, bounded};

use crate::error::{Error, Result};
use crate::pattern::{EvaluationResult, Limits, PatternRequest, evaluate_request};

/// Run `job` on a worker thread, waiting at most `timeout` for its value.
///
/// With no timeout the job runs on the calling thread.
pub fn run_with_timeout<T, F>(timeout: Option<Duration>, job: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let Some(timeout) = timeout else {
        return Ok(job());
    };

    let (tx, rx) = bounded(1);
    std::thread::Builder::new()
        .name("relens-eval".to_string())
        .spawn(move || {
            // The receiver is gone once the deadline has passed.
            let _ = tx.send(job());
        })
        .map_err(|e| Error::Internal(format!("failed to spawn worker: {e}")))?;

    match rx.recv_timeout(timeout) {
        Ok(value) => Ok(value),
        Err(RecvTimeoutError::Timeout) => Err(Error::Timeout(timeout)),
        Err(RecvTimeoutError::Disconnected) => {
            Err(Error::Internal("evaluation worker exited without a result".to_string()))
        }
    }
}

/// Evaluate `request`, giving up after `timeout`.
pub fn evaluate_with_timeout(
    request: PatternRequest,
    limits: Limits,
    timeout: Option<Duration>,
) -> Result<EvaluationResult> {
    let start = Instant::now();
    let result = run_with_timeout(timeout, move || evaluate_request(&request, &limits));
    tracing::debug!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        timed_out = matches!(result, Err(Error::Timeout(_))),
        "evaluation finished"
    );
    result
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
