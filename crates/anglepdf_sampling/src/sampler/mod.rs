//! Samplers for model angular distributions.
//!
//! Each supported distribution family implements [`Sampler`]. The
//! [`crate::selector`] module maps distribution names onto implementations.

mod fh95;

pub use fh95::{fh_density, FriedrichHerschbach, MIN_SIGMA, NAME as FH95_NAME};

use crate::rng::PdfRng;
use crate::samples::AngleSampleSet;
use anglepdf_core::types::{AlignmentRequest, PdfResult};

/// Result of one sampling run.
#[derive(Clone, Debug, PartialEq)]
pub struct SamplingOutcome {
    /// The sampled angles.
    pub samples: AngleSampleSet,
    /// Shape parameter the samples were drawn with, if the model has one.
    pub sigma: Option<f64>,
}

/// A distribution family that can produce angle samples for a request.
pub trait Sampler {
    /// Distribution name token, e.g. `fh95`.
    fn name(&self) -> &'static str;

    /// Draws `request.sample_count()` angle triples.
    ///
    /// # Errors
    ///
    /// - `PdfError::InvalidParameter` for parameters the model cannot use
    /// - `PdfError::Load` if the model's lookup resource cannot be loaded
    /// - `PdfError::NotImplemented` for alignment modes without a model
    fn sample(&self, request: &AlignmentRequest, rng: &mut PdfRng) -> PdfResult<SamplingOutcome>;
}
