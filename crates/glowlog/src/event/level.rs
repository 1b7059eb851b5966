//! Event severity levels and their display monikers.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity of a log event, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Verbose,
    Debug,
    Information,
    Warning,
    Error,
    Fatal,
}

/// Abbreviations of width 1 to 4, title case.
const MONIKERS: [[&str; 4]; 6] = [
    ["V", "Vb", "Vrb", "Verb"],
    ["D", "De", "Dbg", "Dbug"],
    ["I", "In", "Inf", "Info"],
    ["W", "Wn", "Wrn", "Warn"],
    ["E", "Er", "Err", "Eror"],
    ["F", "Fa", "Ftl", "Fatl"],
];

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Verbose,
        Level::Debug,
        Level::Information,
        Level::Warning,
        Level::Error,
        Level::Fatal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Level::Verbose => "Verbose",
            Level::Debug => "Debug",
            Level::Information => "Information",
            Level::Warning => "Warning",
            Level::Error => "Error",
            Level::Fatal => "Fatal",
        }
    }

    /// Renders the level for a `{Level:format}` token.
    ///
    /// The format is a case letter followed by an optional width:
    ///
    /// - `u` uppercase, `w` lowercase, `t` title case
    /// - widths 1 to 4 select a fixed abbreviation (`u3` gives `ERR`)
    /// - larger widths truncate the full name
    ///
    /// Without a format the full name is returned. Unrecognised formats
    /// keep the full name with only the casing applied.
    ///
    /// ```rust
    /// use glowlog::Level;
    ///
    /// assert_eq!(Level::Error.moniker(Some("u3")), "ERR");
    /// assert_eq!(Level::Warning.moniker(Some("w4")), "warn");
    /// assert_eq!(Level::Information.moniker(Some("t1")), "I");
    /// assert_eq!(Level::Information.moniker(None), "Information");
    /// ```
    pub fn moniker(&self, format: Option<&str>) -> Cow<'static, str> {
        let Some(format) = format else {
            return Cow::Borrowed(self.name());
        };

        let mut chars = format.chars();
        let casing = chars.next();
        let digits = chars.as_str();
        let width = match digits.len() {
            1 | 2 if digits.bytes().all(|b| b.is_ascii_digit()) => digits.parse::<usize>().ok(),
            _ => None,
        };

        let Some(width) = width else {
            return apply_casing(self.name(), casing);
        };

        if width == 0 {
            return Cow::Borrowed("");
        }

        if width > 4 {
            let name = self.name();
            let truncated = &name[..width.min(name.len())];
            return apply_casing(truncated, casing);
        }

        let moniker = MONIKERS[*self as usize][width - 1];
        match casing {
            Some('u') | Some('w') => apply_casing(moniker, casing),
            Some('t') => Cow::Borrowed(moniker),
            _ => Cow::Borrowed(self.name()),
        }
    }
}

fn apply_casing(text: &'static str, casing: Option<char>) -> Cow<'static, str> {
    match casing {
        Some('u') => Cow::Owned(text.to_uppercase()),
        Some('w') => Cow::Owned(text.to_lowercase()),
        _ => Cow::Borrowed(text),
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a level name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level '{0}'")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verbose" | "trace" => Ok(Level::Verbose),
            "debug" => Ok(Level::Debug),
            "information" | "info" => Ok(Level::Information),
            "warning" | "warn" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            "fatal" | "critical" => Ok(Level::Fatal),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
