// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles relens.toml parsing with version validation and unknown key warnings.

pub mod duration;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::highlight::Delimiters;
use crate::pattern::{FlagSet, Limits};

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "limits", "highlight", "defaults"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Resource bounds for evaluation.
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Highlight markers.
    #[serde(default)]
    pub highlight: HighlightConfig,

    /// Defaults for command-line options.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// `[limits]` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimitsConfig {
    /// Maximum matches per evaluation (unbounded when unset).
    #[serde(default)]
    pub max_matches: Option<usize>,

    /// Maximum compiled program size in bytes.
    #[serde(default)]
    pub size_limit: Option<usize>,

    /// Maximum backtracking steps.
    #[serde(default)]
    pub backtrack_limit: Option<usize>,

    /// Deadline for a single evaluation (e.g. "2s", "500ms").
    #[serde(default, deserialize_with = "duration::deserialize_option")]
    pub timeout: Option<Duration>,
}

impl LimitsConfig {
    /// Engine limits with unset values taken from the defaults.
    pub fn to_limits(&self) -> Limits {
        let defaults = Limits::default();
        Limits {
            max_matches: self.max_matches.or(defaults.max_matches),
            size_limit: self.size_limit.unwrap_or(defaults.size_limit),
            backtrack_limit: self.backtrack_limit.unwrap_or(defaults.backtrack_limit),
        }
    }
}

/// `[highlight]` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HighlightConfig {
    /// Marker inserted before each match.
    #[serde(default)]
    pub open: Option<String>,

    /// Marker inserted after each match.
    #[serde(default)]
    pub close: Option<String>,
}

impl HighlightConfig {
    /// Configured delimiters, if either marker is set.
    ///
    /// A missing side falls back to the default marker.
    pub fn delimiters(&self) -> Option<Delimiters> {
        if self.open.is_none() && self.close.is_none() {
            return None;
        }
        let defaults = Delimiters::default();
        Some(Delimiters::new(
            self.open.clone().unwrap_or(defaults.open),
            self.close.clone().unwrap_or(defaults.close),
        ))
    }
}

/// `[defaults]` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefaultsConfig {
    /// Wire flag string used when `--flags` is not given.
    #[serde(default)]
    pub flags: Option<String>,
}

impl Config {
    /// Flag string used when the command line does not give one.
    pub fn default_flags(&self) -> &str {
        self.defaults.flags.as_deref().unwrap_or("g")
    }

    fn validate(self, path: &Path) -> Result<Self> {
        if let Some(flags) = &self.defaults.flags
            && let Err(e) = flags.parse::<FlagSet>()
        {
            return Err(Error::Config {
                message: format!("defaults.flags: {e}"),
                path: Some(path.to_path_buf()),
            });
        }
        if self.limits.max_matches == Some(0) {
            return Err(Error::Config {
                message: "limits.max_matches must be at least 1".to_string(),
                path: Some(path.to_path_buf()),
            });
        }
        Ok(self)
    }
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Load the config named on the command line, or the one discovered from
/// `cwd`, falling back to defaults when there is none.
pub fn load_resolved(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    match crate::discovery::resolve_config(explicit, cwd)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            load_with_warnings(&path)
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    check_version(version, path)?;

    let config: Config = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;
    config.validate(path)
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    check_version(flexible.version, path)?;

    let unknown_keys: BTreeSet<&String> = flexible
        .unknown
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .collect();
    for key in unknown_keys {
        warn_unknown_key(path, key);
    }

    parse(content, path)
}

fn check_version(version: i64, path: &Path) -> Result<()> {
    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }
    Ok(())
}

fn warn_unknown_key(path: &Path, key: &str) {
    tracing::warn!("unknown config key {} in {}", key, path.display());
    eprintln!(
        "relens: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
