// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named common patterns offered as quick-fill presets.

use serde::Serialize;

/// A named pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub pattern: &'static str,
    pub description: &'static str,
}

/// All presets, in display order.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Email",
        pattern: r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b",
        description: "Email addresses",
    },
    Preset {
        name: "Phone",
        pattern: r"\b\d{3}-\d{3}-\d{4}\b",
        description: "US phone numbers like 555-123-4567",
    },
    Preset {
        name: "URL",
        pattern: r"https?://(www\.)?[-a-zA-Z0-9@:%._\+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_\+.~#?&/=]*)",
        description: "http and https URLs",
    },
    Preset {
        name: "IP Address",
        pattern: r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b",
        description: "Dotted IPv4 addresses",
    },
    Preset {
        name: "Date (MM/DD/YYYY)",
        pattern: r"\b(0?[1-9]|1[0-2])/(0?[1-9]|[12][0-9]|3[01])/(19|20)\d\d\b",
        description: "Dates such as 12/31/1999",
    },
    Preset {
        name: "Hex Color",
        pattern: r"#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})",
        description: "CSS hex colors such as #fff or #1a2b3c",
    },
];

/// Look up a preset by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
#[path = "presets_tests.rs"]
mod tests;
