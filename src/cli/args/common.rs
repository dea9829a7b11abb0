//! Common CLI types shared across commands

use clap::ValueEnum;

use crate::error::{ConfigError, Result};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Table format - one row per entry (default)
    #[default]
    Table,
    /// JSON format - structured for scripts
    Json,
}

impl OutputFormat {
    /// Parse a format name from the config file
    pub fn from_config(value: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(value, true).map_err(|_| {
            ConfigError::Invalid(format!(
                "Unknown output format '{}' (expected table or json)",
                value
            ))
            .into()
        })
    }
}
