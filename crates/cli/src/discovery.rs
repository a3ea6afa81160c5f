// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating `relens.toml`.
//!
//! A path named with `-C`/`RELENS_CONFIG` is used as given (relative to the
//! working directory) and must be a file. Without one, the nearest
//! `relens.toml` at or above the working directory is used; the search does
//! not leave the enclosing git repository.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Name of the config file looked up during discovery.
pub const CONFIG_FILE: &str = "relens.toml";

/// Nearest `relens.toml` in `start_dir` or one of its ancestors, stopping at
/// the first directory that holds `.git`.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if is_repository_root(dir) {
            break;
        }
    }
    None
}

fn is_repository_root(dir: &Path) -> bool {
    dir.join(".git").exists()
}

/// Config file to load, if any: the explicit path, else the discovered one.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    let Some(explicit) = explicit else {
        return Ok(find_config(cwd));
    };

    let path = cwd.join(explicit);
    if !path.is_file() {
        return Err(Error::Config {
            message: format!("config file not found: {}", explicit.display()),
            path: Some(path),
        });
    }
    Ok(Some(path))
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
