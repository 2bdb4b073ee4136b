//! Configuration for commandline splitting and batch parsing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default delimiter between commands in one invocation.
pub const DEFAULT_DELIMITER: char = ';';
/// Default escape character that makes a following delimiter literal.
pub const DEFAULT_ESCAPE: char = '\\';
/// Default synthetic program name seeded into every commandline after the first.
pub const DEFAULT_PROGRAM_NAME: &str = "wt.exe";

/// Errors that can occur when loading or validating a [`ParserConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON deserialization failed.
    #[error("invalid config JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A field value is unusable.
    #[error("invalid {field}: {reason}")]
    InvalidField {
        /// The name of the field that failed validation.
        field: String,
        /// A human-readable explanation of why the field value is invalid.
        reason: String,
    },
}

/// Characters and placeholder used by the commandline splitter.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SplitConfig {
    /// Command delimiter (default `;`).
    pub delimiter: char,
    /// Escape character that makes an immediately following delimiter literal (default `\`).
    pub escape: char,
    /// Program name token that starts every commandline after the first.
    pub program_name: String,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            escape: DEFAULT_ESCAPE,
            program_name: DEFAULT_PROGRAM_NAME.to_string(),
        }
    }
}

impl SplitConfig {
    /// Build a config with custom delimiter and escape characters and the
    /// default program name.
    pub fn with_chars(delimiter: char, escape: char) -> Self {
        Self {
            delimiter,
            escape,
            ..Self::default()
        }
    }
}

/// Complete parser configuration: splitting rules plus batch behavior.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParserConfig {
    /// Splitting rules.
    pub split: SplitConfig,
    /// Stop parsing a batch at the first commandline that fails.
    ///
    /// Help requests are not failures and never stop the batch.
    pub stop_on_error: bool,
}

impl ParserConfig {
    /// Check the invariants deserialization cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.split.delimiter == self.split.escape {
            return Err(ConfigError::InvalidField {
                field: "split.escape".into(),
                reason: format!(
                    "must differ from the delimiter ({:?})",
                    self.split.delimiter
                ),
            });
        }
        if self.split.program_name.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "split.programName".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.split.program_name.contains(self.split.delimiter) {
            return Err(ConfigError::InvalidField {
                field: "split.programName".into(),
                reason: format!("must not contain the delimiter ({:?})", self.split.delimiter),
            });
        }
        Ok(())
    }
}

/// Load and validate a [`ParserConfig`] from a JSON string.
///
/// Every key is optional; missing keys keep their defaults.
pub fn load_config_from_str(s: &str) -> Result<ParserConfig, ConfigError> {
    let config: ParserConfig = serde_json::from_str(s)?;
    config.validate()?;
    Ok(config)
}
