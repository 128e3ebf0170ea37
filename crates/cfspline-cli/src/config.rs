//! CLI configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Settings read from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Output format when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,

    /// Decimal places in table output
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Resampling step for `profile` when `--interval` is not given
    #[serde(default = "default_profile_interval")]
    pub profile_interval: f64,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_precision() -> usize {
    6
}

fn default_profile_interval() -> f64 {
    1.0
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            format: OutputFormat::default(),
            precision: default_precision(),
            profile_interval: default_profile_interval(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.validate(path)?;
        Ok(config)
    }

    /// Loads the explicit file if given, else the per-user file if it exists,
    /// else the defaults. Returns the file actually read alongside.
    pub fn load(explicit: Option<&Path>) -> CliResult<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::from_file(path)?, Some(path.to_path_buf())));
        }
        match default_path() {
            Some(path) if path.is_file() => Ok((Self::from_file(&path)?, Some(path))),
            _ => Ok((Self::default(), None)),
        }
    }

    fn validate(&self, path: &Path) -> CliResult<()> {
        if !(self.profile_interval.is_finite() && self.profile_interval > 0.0) {
            return Err(CliError::Config {
                path: path.to_path_buf(),
                reason: format!(
                    "profile_interval must be positive, got {}",
                    self.profile_interval
                ),
            });
        }
        Ok(())
    }
}

/// `$CONFIG_DIR/cfspline/config.toml`, if the platform has a config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cfspline").join("config.toml"))
}
