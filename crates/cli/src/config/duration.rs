// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Duration strings for evaluation deadlines: `500ms`, `2s`, `1.5s`, `1m`.

use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// Parse a duration string into a Duration.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    let split = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(s.len());
    let (number, unit) = s.split_at(split);
    let value: f64 = number
        .parse()
        .map_err(|_| format!("invalid duration: {s}"))?;

    let seconds = match unit.trim() {
        "ms" => value / 1000.0,
        "s" => value,
        "m" => value * 60.0,
        _ => return Err(format!("invalid duration format: {s} (use 500ms, 2s, or 1m)")),
    };

    Duration::try_from_secs_f64(seconds).map_err(|_| format!("duration out of range: {s}"))
}

/// Deserialize an optional duration string.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    opt.map(|s| parse_duration(&s).map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
