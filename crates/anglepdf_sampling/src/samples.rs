//! Angle sample sets.

use anglepdf_core::types::{PdfError, PdfResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// Sampled Euler angles of a molecular ensemble.
///
/// All three sequences have the same length. θ lies in [0, π]; φ and χ lie
/// in [0, 2π).
///
/// # Examples
///
/// ```rust
/// use anglepdf_sampling::samples::AngleSampleSet;
///
/// let set = AngleSampleSet::new(vec![0.0, 1.0], vec![0.5, 2.0], vec![3.0, 4.0]).unwrap();
/// assert_eq!(set.len(), 2);
/// assert!(set.is_within_domain());
///
/// assert!(AngleSampleSet::new(vec![0.0], vec![], vec![]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AngleSampleSet {
    phi: Vec<f64>,
    theta: Vec<f64>,
    chi: Vec<f64>,
}

impl AngleSampleSet {
    /// Assembles a sample set from its three angle arrays.
    ///
    /// # Errors
    ///
    /// `PdfError::InvalidParameter` if the arrays differ in length.
    pub fn new(phi: Vec<f64>, theta: Vec<f64>, chi: Vec<f64>) -> PdfResult<Self> {
        if phi.len() != theta.len() || chi.len() != theta.len() {
            return Err(PdfError::invalid(
                "samples",
                format!(
                    "angle arrays differ in length: phi {}, theta {}, chi {}",
                    phi.len(),
                    theta.len(),
                    chi.len()
                ),
            ));
        }
        Ok(Self { phi, theta, chi })
    }

    /// Azimuthal angles φ.
    #[inline]
    pub fn phi(&self) -> &[f64] {
        &self.phi
    }

    /// Polar angles θ.
    #[inline]
    pub fn theta(&self) -> &[f64] {
        &self.theta
    }

    /// Precession angles χ.
    #[inline]
    pub fn chi(&self) -> &[f64] {
        &self.chi
    }

    /// Number of angle triples.
    #[inline]
    pub fn len(&self) -> usize {
        self.theta.len()
    }

    /// True if the set holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.theta.is_empty()
    }

    /// Iterates over `(phi, theta, chi)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.phi
            .iter()
            .zip(self.theta.iter())
            .zip(self.chi.iter())
            .map(|((&phi, &theta), &chi)| (phi, theta, chi))
    }

    /// Consumes the set, returning `(phi, theta, chi)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.phi, self.theta, self.chi)
    }

    /// Checks θ ∈ [0, π] and φ, χ ∈ [0, 2π) for every sample.
    pub fn is_within_domain(&self) -> bool {
        let periodic = |a: &f64| (0.0..TAU).contains(a);
        self.theta.iter().all(|t| (0.0..=PI).contains(t))
            && self.phi.iter().all(periodic)
            && self.chi.iter().all(periodic)
    }

    /// Sample mean of cos²θ₂D, the alignment observable.
    ///
    /// θ₂D is the angle between the laboratory axis and the molecular axis
    /// projected onto the detector plane spanned by that axis and the
    /// φ = 0 direction: cos²θ₂D = cos²θ / (cos²θ + sin²θ cos²φ).
    /// Returns `None` for an empty set.
    pub fn projected_cos2_mean(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        let sum: f64 = self
            .phi
            .iter()
            .zip(self.theta.iter())
            .map(|(&phi, &theta)| {
                let c2 = theta.cos().powi(2);
                let denom = c2 + theta.sin().powi(2) * phi.cos().powi(2);
                // both projections vanish only on a null set
                if denom > 0.0 {
                    c2 / denom
                } else {
                    0.0
                }
            })
            .sum();
        Some(sum / self.len() as f64)
    }
}
