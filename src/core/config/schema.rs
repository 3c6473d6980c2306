//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing. Default labels follow the
//! same rule as labels given on the command line: none may be blank.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::Label;

/// How a metadata report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON object
    #[default]
    Json,
    /// One block per file with indented `tag: value` lines
    Text,
}

/// Configuration file contents.
///
/// # Example
///
/// ```toml
/// default_labels = ["Date", "Model"]
/// format = "text"
/// include_thumbnail = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Labels applied when none are given on the command line
    pub default_labels: Option<Vec<String>>,

    /// Output format
    pub format: Option<OutputFormat>,

    /// Expose thumbnail fields
    pub include_thumbnail: Option<bool>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(labels) = &self.default_labels {
            for label in labels {
                Label::new(label.as_str()).map_err(|e| {
                    ConfigError::InvalidValue(format!("default_labels: {}", e))
                })?;
            }
        }
        Ok(())
    }
}
