//! Command execution context
//!
//! Loads configuration once and resolves the effective output format and
//! defaults for command handlers.

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config and runtime options.
pub struct CommandContext {
    /// Loaded configuration (defaults when no file exists)
    pub config: Config,
    /// Output format after applying the config file default
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a command context from global options.
    ///
    /// # Errors
    /// Returns error if the config file exists but cannot be parsed, or names
    /// an unknown output format.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_or_default(opts.config_ref())?;

        let format = match (opts.format, config.preferences.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(configured)) => OutputFormat::from_config(configured)?,
            (None, None) => OutputFormat::default(),
        };
        debug!("Output format: {:?}", format);

        Ok(Self { config, format })
    }

    /// Default page size from the config file
    pub fn page_size(&self) -> usize {
        self.config.preferences.page_size
    }

    /// Whether decoding is strict unless the command line says so
    pub fn strict(&self) -> bool {
        self.config.preferences.strict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts_with_config(contents: &str) -> (tempfile::TempDir, GlobalOptions) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, contents).unwrap();
        let opts = GlobalOptions {
            config: Some(path.to_string_lossy().to_string()),
            ..GlobalOptions::default()
        };
        (dir, opts)
    }

    #[test]
    fn test_config_format_applies() {
        let (_dir, opts) = opts_with_config("preferences:\n  format: json\n  page_size: 25\n");
        let ctx = CommandContext::new(&opts).unwrap();

        assert_eq!(ctx.format, OutputFormat::Json);
        assert_eq!(ctx.page_size(), 25);
        assert!(!ctx.strict());
    }

    #[test]
    fn test_flag_overrides_config_format() {
        let (_dir, mut opts) = opts_with_config("preferences:\n  format: json\n");
        opts.format = Some(OutputFormat::Table);

        let ctx = CommandContext::new(&opts).unwrap();
        assert_eq!(ctx.format, OutputFormat::Table);
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let opts = GlobalOptions {
            config: Some(dir.path().join("none.yaml").to_string_lossy().to_string()),
            ..GlobalOptions::default()
        };

        let ctx = CommandContext::new(&opts).unwrap();
        assert_eq!(ctx.format, OutputFormat::Table);
        assert_eq!(ctx.page_size(), 100);
    }

    #[test]
    fn test_bad_config_format() {
        let (_dir, opts) = opts_with_config("preferences:\n  format: pretty\n");
        assert!(CommandContext::new(&opts).is_err());
    }
}
