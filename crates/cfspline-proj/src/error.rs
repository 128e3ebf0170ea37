//! Error types for projection calls.

use thiserror::Error;

/// A specialized Result type for projection operations.
pub type ProjResult<T> = Result<T, ProjError>;

/// Errors that can occur while projecting points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjError {
    /// The projection library rejected the parameter list.
    #[error("Projection setup failed: {reason}")]
    Init {
        /// Library-supplied description.
        reason: String,
    },

    /// A single point could not be transformed.
    #[error("Projection of point {index} failed: {reason}")]
    Transform {
        /// Column of the failing point.
        index: usize,
        /// Library-supplied description.
        reason: String,
    },

    /// The points array is not 2×n.
    #[error("Points array must have 2 rows, got {rows}x{cols}")]
    BadShape {
        /// Rows supplied.
        rows: usize,
        /// Columns supplied.
        cols: usize,
    },

    /// The CF grid mapping names a projection that is not supported.
    #[error("Unsupported grid mapping: {0}")]
    UnknownMapping(String),

    /// The CF grid mapping lacks or misstates a required attribute.
    #[error("Invalid grid mapping: {reason}")]
    InvalidMapping {
        /// Description of the problem.
        reason: String,
    },
}

impl ProjError {
    /// Creates an initialisation error.
    #[must_use]
    pub fn init(reason: impl Into<String>) -> Self {
        Self::Init {
            reason: reason.into(),
        }
    }

    /// Creates an invalid mapping error.
    #[must_use]
    pub fn invalid_mapping(reason: impl Into<String>) -> Self {
        Self::InvalidMapping {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProjError::BadShape { rows: 3, cols: 5 };
        assert_eq!(err.to_string(), "Points array must have 2 rows, got 3x5");

        let err = ProjError::UnknownMapping("mercator".into());
        assert!(err.to_string().contains("mercator"));
    }
}
