//! Friedrich–Herschbach (1995) alignment distribution.
//!
//! For a molecule aligned along the laboratory axis the distribution of
//! c = cos θ is modelled as
//!
//! ```text
//! f(c, σ) = exp(-(1 - c²) / (2σ²)),   c ∈ [-1, 1]
//! ```
//!
//! (B. Friedrich and D. Herschbach, Phys. Rev. Lett. 74, 4623 (1995)).
//! f ≤ 1 everywhere, so a uniform threshold in [0, 1) is a valid envelope
//! against a uniform proposal on [-1, 1] and no normalisation is needed.

use super::{Sampler, SamplingOutcome};
use crate::config::{SamplerConfig, DEFAULT_BATCH_SIZE};
use crate::rng::PdfRng;
use crate::samples::AngleSampleSet;
use anglepdf_core::lookup::ShapeTableHandle;
use anglepdf_core::types::{AlignmentDim, AlignmentRequest, PdfError, PdfResult};
use rand_distr::Uniform;
use std::f64::consts::TAU;
use tracing::debug;

/// Distribution name token.
pub const NAME: &str = "fh95";

/// Smallest accepted shape parameter.
///
/// For small σ the acceptance rate, the mean of f over the proposal, is
/// about σ², so each sample costs about 1/σ² proposals. At this floor that
/// is ~1e8 proposals per sample; σ only slightly above it is already
/// impractical for large sample counts.
pub const MIN_SIGMA: f64 = 1e-4;

/// Unnormalised Friedrich–Herschbach density at `cos_theta`.
///
/// ```rust
/// use anglepdf_sampling::sampler::fh_density;
///
/// assert_eq!(fh_density(1.0, 0.3), 1.0);
/// assert!(fh_density(0.0, 0.3) < 0.01);
/// ```
#[inline]
pub fn fh_density(cos_theta: f64, sigma: f64) -> f64 {
    (-0.5 * (1.0 - cos_theta * cos_theta) / (sigma * sigma)).exp()
}

/// Rejection sampler for the Friedrich–Herschbach distribution.
///
/// σ is looked up from the measurement through the shape table, which is
/// loaded on first use.
#[derive(Debug, Clone)]
pub struct FriedrichHerschbach {
    table: ShapeTableHandle,
    batch_size: usize,
}

impl FriedrichHerschbach {
    /// Sampler over `table` with the default batch size.
    pub fn new(table: ShapeTableHandle) -> Self {
        Self {
            table,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Sampler over `table` using the batch size from `config`.
    pub fn with_config(table: ShapeTableHandle, config: &SamplerConfig) -> Self {
        Self {
            table,
            batch_size: config.batch_size(),
        }
    }

    /// The sigma lookup table handle.
    pub fn table(&self) -> &ShapeTableHandle {
        &self.table
    }

    /// Draws `n` angle triples for one-dimensional alignment.
    ///
    /// θ is obtained by accept/reject on cos θ; φ and χ are uniform on
    /// [0, 2π) with exactly one draw per output slot. Proposals are drawn in
    /// fixed-size batches and rejected ones are discarded immediately, so
    /// memory stays bounded by `n` plus one batch however low the
    /// acceptance rate.
    ///
    /// # Errors
    ///
    /// `PdfError::InvalidParameter` if `sigma` is not finite or below
    /// [`MIN_SIGMA`], or if `n` is 0.
    pub fn sample_1d(&self, sigma: f64, n: usize, rng: &mut PdfRng) -> PdfResult<AngleSampleSet> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(PdfError::invalid(
                "sigma",
                format!("must be positive and finite, got {}", sigma),
            ));
        }
        if sigma < MIN_SIGMA {
            return Err(PdfError::invalid(
                "sigma",
                format!("{} below minimum {}", sigma, MIN_SIGMA),
            ));
        }
        if n == 0 {
            return Err(PdfError::invalid("sample_count", "must be positive"));
        }

        let angle = Uniform::new(0.0, TAU);
        let phi: Vec<f64> = (0..n).map(|_| rng.sample(&angle)).collect();

        let mut proposals = vec![0.0; self.batch_size];
        let mut thresholds = vec![0.0; self.batch_size];
        let mut theta = Vec::with_capacity(n);
        let mut drawn: u64 = 0;

        'batches: loop {
            rng.fill_uniform_range(&mut proposals, -1.0, 1.0);
            rng.fill_uniform(&mut thresholds);

            for (&c, &v) in proposals.iter().zip(thresholds.iter()) {
                drawn += 1;
                if v <= fh_density(c, sigma) {
                    theta.push(c.acos());
                    if theta.len() == n {
                        break 'batches;
                    }
                }
            }
        }

        let chi: Vec<f64> = (0..n).map(|_| rng.sample(&angle)).collect();

        debug!(
            sigma,
            n,
            proposals = drawn,
            acceptance = n as f64 / drawn as f64,
            "fh95 rejection sampling finished"
        );

        AngleSampleSet::new(phi, theta, chi)
    }

    /// Three-dimensional alignment has no model yet.
    ///
    /// # Errors
    ///
    /// Always `PdfError::NotImplemented`.
    pub fn sample_3d(
        &self,
        _measurement: f64,
        _n: usize,
        _rng: &mut PdfRng,
    ) -> PdfResult<AngleSampleSet> {
        Err(PdfError::NotImplemented(format!(
            "{} sampling for 3D alignment",
            NAME
        )))
    }
}

impl Sampler for FriedrichHerschbach {
    fn name(&self) -> &'static str {
        NAME
    }

    fn sample(&self, request: &AlignmentRequest, rng: &mut PdfRng) -> PdfResult<SamplingOutcome> {
        match request.alignment() {
            AlignmentDim::OneD => {
                let sigma = self.table.get()?.sigma_for(request.measurement())?;
                debug!(
                    measurement = request.measurement(),
                    sigma, "resolved shape parameter"
                );
                let samples = self.sample_1d(sigma, request.sample_count(), rng)?;
                Ok(SamplingOutcome {
                    samples,
                    sigma: Some(sigma),
                })
            }
            AlignmentDim::ThreeD => {
                let samples =
                    self.sample_3d(request.measurement(), request.sample_count(), rng)?;
                Ok(SamplingOutcome {
                    samples,
                    sigma: None,
                })
            }
        }
    }
}
