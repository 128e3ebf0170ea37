//! CLI command implementations.

pub mod config;
pub mod interp1d;
pub mod interp2d;
pub mod profile;

// Re-export submodules for convenience
pub use config::ConfigArgs;
pub use interp1d::Interp1dArgs;
pub use interp2d::Interp2dArgs;
pub use profile::ProfileArgs;

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::config::CliConfig;

/// Settings shared by every command after flags and file are merged.
#[derive(Debug, Clone)]
pub struct Context {
    /// Effective output format.
    pub format: OutputFormat,
    /// Suppress headers and notes.
    pub quiet: bool,
    /// Configuration as loaded.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub source: Option<PathBuf>,
}

impl Context {
    /// Merges command-line flags over the loaded configuration.
    pub fn new(cli: &Cli, config: CliConfig, source: Option<PathBuf>) -> Self {
        Self {
            format: cli.format.unwrap_or(config.format),
            quiet: cli.quiet,
            config,
            source,
        }
    }

    /// Decimal places for table output.
    pub fn precision(&self) -> usize {
        self.config.precision
    }

    /// Prints a section header in table mode unless quiet.
    pub fn header(&self, title: &str) {
        if self.format == OutputFormat::Table && !self.quiet {
            crate::output::print_header(title);
        }
    }
}
