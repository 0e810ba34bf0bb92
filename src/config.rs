//! Capitalization and punctuation options.
//!
//! A [`Config`] is a read-only snapshot handed to every pipeline step. The
//! settings file uses the same camelCase keys as the message client's
//! settings panel, and any key left out falls back to its default.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Characters after which the next non-space character is capitalized.
pub const DEFAULT_DELIMITERS: &str = "?!.";

/// Characters after which no trailing period is appended.
pub const DEFAULT_EXCLUDE_END_SYMBOLS: &str = "!?.,:()";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Options controlling the rewrite pipeline.
///
/// The two character-set fields are plain strings; each `char` is one member
/// of the set. They may overlap or be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[expect(
    clippy::struct_excessive_bools,
    reason = "settings expose four independent toggles"
)]
pub struct Config {
    pub delimiters: String,
    pub each_line: bool,
    pub first_letter: bool,
    pub dot_at_end: bool,
    pub dot_at_each_line: bool,
    pub exclude_end_symbols: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.to_string(),
            each_line: true,
            first_letter: true,
            dot_at_end: false,
            dot_at_each_line: false,
            exclude_end_symbols: DEFAULT_EXCLUDE_END_SYMBOLS.to_string(),
        }
    }
}

impl Config {
    /// Parse a JSON settings document.
    ///
    /// # Errors
    /// Returns an error if `json` is not a valid settings object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON settings file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Whether `c` suppresses the trailing period.
    #[must_use]
    pub fn is_excluded_end_symbol(&self, c: char) -> bool {
        self.exclude_end_symbols.contains(c)
    }
}
