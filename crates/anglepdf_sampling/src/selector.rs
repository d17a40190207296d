//! Distribution selection.
//!
//! Maps a distribution name token onto a concrete sampler. Dispatch is
//! static: [`SamplerHandle`] is an enum with one variant per family.

use crate::config::SamplerConfig;
use crate::rng::PdfRng;
use crate::sampler::{FriedrichHerschbach, Sampler, SamplingOutcome, FH95_NAME};
use anglepdf_core::lookup::ShapeTableHandle;
use anglepdf_core::types::{AlignmentRequest, PdfError, PdfResult};
use std::fmt;
use std::str::FromStr;

/// Known distribution families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DistributionKind {
    /// Friedrich–Herschbach, 1995 parameterisation (`fh95`).
    FriedrichHerschbach1995,
}

impl DistributionKind {
    /// Every supported family.
    pub const ALL: [DistributionKind; 1] = [DistributionKind::FriedrichHerschbach1995];

    /// Canonical name token.
    pub fn name(&self) -> &'static str {
        match self {
            DistributionKind::FriedrichHerschbach1995 => FH95_NAME,
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistributionKind {
    type Err = PdfError;

    /// Case-insensitive lookup by name token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PdfError::UnsupportedDistribution(s.to_string()))
    }
}

/// A resolved sampler.
#[derive(Debug, Clone)]
pub enum SamplerHandle {
    /// Friedrich–Herschbach rejection sampler.
    FriedrichHerschbach(FriedrichHerschbach),
}

impl SamplerHandle {
    /// Builds the sampler for `kind`.
    pub fn new(kind: DistributionKind, table: &ShapeTableHandle, config: &SamplerConfig) -> Self {
        match kind {
            DistributionKind::FriedrichHerschbach1995 => SamplerHandle::FriedrichHerschbach(
                FriedrichHerschbach::with_config(table.clone(), config),
            ),
        }
    }

    /// The family this sampler belongs to.
    pub fn kind(&self) -> DistributionKind {
        match self {
            SamplerHandle::FriedrichHerschbach(_) => DistributionKind::FriedrichHerschbach1995,
        }
    }
}

impl Sampler for SamplerHandle {
    fn name(&self) -> &'static str {
        match self {
            SamplerHandle::FriedrichHerschbach(s) => s.name(),
        }
    }

    fn sample(&self, request: &AlignmentRequest, rng: &mut PdfRng) -> PdfResult<SamplingOutcome> {
        match self {
            SamplerHandle::FriedrichHerschbach(s) => s.sample(request, rng),
        }
    }
}

/// Resolves a distribution name to a sampler with default configuration.
///
/// # Errors
///
/// `PdfError::UnsupportedDistribution` for unknown names.
///
/// # Examples
///
/// ```rust
/// use anglepdf_core::lookup::ShapeTableHandle;
/// use anglepdf_core::types::PdfError;
/// use anglepdf_sampling::selector::resolve;
///
/// let table = ShapeTableHandle::bundled();
/// assert!(resolve("fh95", &table).is_ok());
/// assert!(matches!(
///     resolve("bogus95", &table),
///     Err(PdfError::UnsupportedDistribution(_))
/// ));
/// ```
pub fn resolve(name: &str, table: &ShapeTableHandle) -> PdfResult<SamplerHandle> {
    resolve_with(name, table, &SamplerConfig::default())
}

/// Resolves a distribution name to a sampler built from `config`.
pub fn resolve_with(
    name: &str,
    table: &ShapeTableHandle,
    config: &SamplerConfig,
) -> PdfResult<SamplerHandle> {
    let kind: DistributionKind = name.parse()?;
    Ok(SamplerHandle::new(kind, table, config))
}
