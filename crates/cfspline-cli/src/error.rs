//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The configuration file could not be read or parsed.
    #[error("Configuration error in {}: {reason}", path.display())]
    Config {
        /// File that failed.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// An input file could not be read or parsed.
    #[error("Cannot read {}: {source}", path.display())]
    Input {
        /// File that failed.
        path: PathBuf,
        /// Underlying CSV or IO error.
        source: csv::Error,
    },

    /// An input file contained no samples.
    #[error("No samples in {}", .0.display())]
    EmptyInput(PathBuf),

    /// A grid file lacks the sample at a node.
    #[error("Grid is missing the sample at x={x}, y={y}")]
    MissingNode {
        /// Node abscissa.
        x: f64,
        /// Node ordinate.
        y: f64,
    },

    /// A grid file lists a node more than once.
    #[error("Grid lists the sample at x={x}, y={y} more than once")]
    DuplicateNode {
        /// Node abscissa.
        x: f64,
        /// Node ordinate.
        y: f64,
    },

    /// A command-line value could not be parsed.
    #[error("Invalid value for {name}: {value}")]
    InvalidArgument {
        /// Option name.
        name: &'static str,
        /// Offending text.
        value: String,
    },

    /// Interpolation failed.
    #[error(transparent)]
    Spline(#[from] cfspline_math::SplineError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
