//! Sampling request types.

use super::error::{PdfError, PdfResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lower bound of the ⟨cos²θ₂D⟩ expectation value (isotropic sample).
pub const MIN_MEASUREMENT: f64 = 0.5;

/// Upper bound of the ⟨cos²θ₂D⟩ expectation value (perfect alignment).
pub const MAX_MEASUREMENT: f64 = 1.0;

/// Dimensionality of the molecular alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlignmentDim {
    /// Alignment of one molecular axis along the laboratory axis.
    #[serde(rename = "1D")]
    OneD,
    /// Full three-dimensional alignment.
    #[serde(rename = "3D")]
    ThreeD,
}

impl AlignmentDim {
    /// Label used in identifiers and dataset metadata.
    pub fn label(&self) -> &'static str {
        match self {
            AlignmentDim::OneD => "1D",
            AlignmentDim::ThreeD => "3D",
        }
    }
}

impl fmt::Display for AlignmentDim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AlignmentDim {
    type Err = PdfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "1D" => Ok(AlignmentDim::OneD),
            "3D" => Ok(AlignmentDim::ThreeD),
            _ => Err(PdfError::invalid(
                "alignment_dim",
                format!("expected '1D' or '3D', got '{}'", s),
            )),
        }
    }
}

/// A validated request for an angle sample set.
///
/// Immutable once constructed. Construction enforces
/// `measurement ∈ [0.5, 1.0]` and `sample_count > 0`.
///
/// # Examples
///
/// ```
/// use anglepdf_core::types::{AlignmentDim, AlignmentRequest, PdfError};
///
/// let request = AlignmentRequest::new("fh95", AlignmentDim::OneD, 0.85, 10_000).unwrap();
/// assert_eq!(request.sample_count(), 10_000);
///
/// let err = AlignmentRequest::new("fh95", AlignmentDim::OneD, 0.49, 10).unwrap_err();
/// assert!(matches!(err, PdfError::InvalidParameter { name: "measurement", .. }));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlignmentRequest {
    distribution: String,
    alignment: AlignmentDim,
    measurement: f64,
    sample_count: usize,
}

impl AlignmentRequest {
    /// Creates a request, validating its invariants.
    ///
    /// # Errors
    ///
    /// Returns `PdfError::InvalidParameter` if:
    /// - `distribution` is empty
    /// - `measurement` is not finite or lies outside [0.5, 1.0]
    /// - `sample_count` is 0
    pub fn new(
        distribution: impl Into<String>,
        alignment: AlignmentDim,
        measurement: f64,
        sample_count: usize,
    ) -> PdfResult<Self> {
        let distribution = distribution.into();
        if distribution.is_empty() {
            return Err(PdfError::invalid("distribution", "must not be empty"));
        }
        if !measurement.is_finite() || !(MIN_MEASUREMENT..=MAX_MEASUREMENT).contains(&measurement)
        {
            return Err(PdfError::invalid(
                "measurement",
                format!(
                    "expectation value {} outside [{}, {}]",
                    measurement, MIN_MEASUREMENT, MAX_MEASUREMENT
                ),
            ));
        }
        if sample_count == 0 {
            return Err(PdfError::invalid("sample_count", "must be positive"));
        }

        Ok(Self {
            distribution,
            alignment,
            measurement,
            sample_count,
        })
    }

    /// Distribution name token, e.g. `fh95`.
    #[inline]
    pub fn distribution(&self) -> &str {
        &self.distribution
    }

    /// Alignment dimensionality.
    #[inline]
    pub fn alignment(&self) -> AlignmentDim {
        self.alignment
    }

    /// Measured ⟨cos²θ₂D⟩.
    #[inline]
    pub fn measurement(&self) -> f64 {
        self.measurement
    }

    /// Number of angle triples to produce.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }
}
