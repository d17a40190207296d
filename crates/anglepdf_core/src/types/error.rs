//! Error types for angular PDF sampling.
//!
//! This module provides the error taxonomy shared by every layer:
//! - `PdfError`: caller-visible failures, one variant per failure kind
//! - `InterpolationError`: errors from the interpolators

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the workspace.
pub type PdfResult<T> = Result<T, PdfError>;

/// Categorised failures reported to the caller.
///
/// None of these are converted into silent defaults. A missing dataset file
/// is not an error at all; the store treats it as a cache miss.
///
/// # Examples
/// ```
/// use anglepdf_core::types::PdfError;
///
/// let err = PdfError::UnsupportedDistribution("bogus95".to_string());
/// assert_eq!(format!("{}", err), "Unsupported distribution: bogus95");
/// ```
#[derive(Error, Debug)]
pub enum PdfError {
    /// Out-of-domain measurement, non-positive sigma or sample count.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the violation
        reason: String,
    },

    /// Distribution name with no registered sampler.
    #[error("Unsupported distribution: {0}")]
    UnsupportedDistribution(String),

    /// Dataset identifier that does not parse into four valid tokens.
    #[error("Malformed identifier '{identifier}': {reason}")]
    MalformedIdentifier {
        /// The identifier as supplied
        identifier: String,
        /// What was wrong with it
        reason: String,
    },

    /// Lookup table missing or corrupt.
    #[error("Failed to load lookup table from {source_name}: {reason}")]
    Load {
        /// Resource name (file path or bundled asset name)
        source_name: String,
        /// Description of the failure
        reason: String,
    },

    /// Persisted dataset unreadable or unwritable.
    #[error("Storage error at {}: {reason}", path.display())]
    Storage {
        /// Path of the dataset file
        path: PathBuf,
        /// Description of the failure
        reason: String,
    },

    /// Operation with no defined semantics yet.
    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

impl PdfError {
    /// Shorthand for [`PdfError::InvalidParameter`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Shorthand for [`PdfError::MalformedIdentifier`].
    pub fn malformed(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedIdentifier {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for [`PdfError::Storage`].
    pub fn storage(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Storage {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Interpolation errors.
///
/// # Examples
/// ```
/// use anglepdf_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 0.3, min: 0.505, max: 0.995 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// Query point outside valid interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Abscissae are not strictly increasing.
    #[error("Data is not strictly increasing at index {index}")]
    NonMonotonicData {
        /// Index where monotonicity violation was detected
        index: usize,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<InterpolationError> for PdfError {
    fn from(err: InterpolationError) -> Self {
        match err {
            InterpolationError::OutOfBounds { .. } => PdfError::invalid("measurement", err.to_string()),
            other => PdfError::Load {
                source_name: "interpolator".to_string(),
                reason: other.to_string(),
            },
        }
    }
}
