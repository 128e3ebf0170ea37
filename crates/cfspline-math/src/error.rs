//! Error types for spline construction and evaluation.

use thiserror::Error;

/// A specialized Result type for spline operations.
pub type SplineResult<T> = Result<T, SplineError>;

/// Errors that can occur while fitting or evaluating splines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplineError {
    /// Array shapes disagree.
    #[error("Dimension mismatch for {name}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Which array (or axis) has the wrong length.
        name: &'static str,
        /// Length implied by the other inputs.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// Fewer samples than the fit requires.
    #[error("Insufficient points: need at least {required}, got {actual}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// Abscissas are not strictly increasing.
    #[error("Abscissas must be strictly increasing: x[{index}] = {value} follows {previous}")]
    NonMonotonicInput {
        /// Index of the first offending abscissa.
        index: usize,
        /// The abscissa before it.
        previous: f64,
        /// The offending abscissa.
        value: f64,
    },

    /// Query point outside the fitted abscissa range.
    #[error("Query {x} is outside the interpolation domain [{min}, {max}]")]
    OutOfDomain {
        /// The query point.
        x: f64,
        /// Lower bound of the domain.
        min: f64,
        /// Upper bound of the domain.
        max: f64,
    },

    /// Tridiagonal system could not be solved.
    #[error("Singular matrix: cannot solve")]
    SingularMatrix,

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl SplineError {
    /// Creates a dimension mismatch error.
    #[must_use]
    pub fn dimension_mismatch(name: &'static str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            name,
            expected,
            actual,
        }
    }

    /// Creates an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, actual: usize) -> Self {
        Self::InsufficientPoints { required, actual }
    }

    /// Creates an out-of-domain error.
    #[must_use]
    pub fn out_of_domain(x: f64, min: f64, max: f64) -> Self {
        Self::OutOfDomain { x, min, max }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns true for [`SplineError::OutOfDomain`].
    ///
    /// Callers that want clamp-and-retry behaviour key off this.
    pub fn is_out_of_domain(&self) -> bool {
        matches!(self, Self::OutOfDomain { .. })
    }
}
