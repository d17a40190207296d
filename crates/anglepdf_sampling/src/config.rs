//! Sampler configuration.
//!
//! Configuration types and builders for the rejection samplers.

use crate::rng::PdfRng;
use anglepdf_core::types::{PdfError, PdfResult};

/// Default number of proposals drawn per batch.
pub const DEFAULT_BATCH_SIZE: usize = 4096;

/// Maximum number of proposals drawn per batch.
pub const MAX_BATCH_SIZE: usize = 1 << 20;

/// Rejection sampler configuration.
///
/// Immutable once built. Use [`SamplerConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use anglepdf_sampling::config::SamplerConfig;
///
/// let config = SamplerConfig::builder()
///     .seed(42)
///     .batch_size(1024)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.seed(), Some(42));
/// assert_eq!(config.batch_size(), 1024);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Optional seed for reproducibility.
    seed: Option<u64>,
    /// Proposals drawn per batch; bounds the sampler's working memory.
    batch_size: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl SamplerConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::default()
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the number of proposals drawn per batch.
    #[inline]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Creates the generator this configuration describes.
    ///
    /// Seeded from entropy when no seed is set.
    pub fn rng(&self) -> PdfRng {
        match self.seed {
            Some(seed) => PdfRng::from_seed(seed),
            None => PdfRng::from_entropy(),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// `PdfError::InvalidParameter` if `batch_size` is 0 or greater than
    /// [`MAX_BATCH_SIZE`].
    pub fn validate(&self) -> PdfResult<()> {
        if self.batch_size == 0 || self.batch_size > MAX_BATCH_SIZE {
            return Err(PdfError::invalid(
                "batch_size",
                format!("{} outside [1, {}]", self.batch_size, MAX_BATCH_SIZE),
            ));
        }
        Ok(())
    }
}

/// Builder for [`SamplerConfig`].
#[derive(Clone, Debug, Default)]
pub struct SamplerConfigBuilder {
    seed: Option<u64>,
    batch_size: Option<usize>,
}

impl SamplerConfigBuilder {
    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the seed if one is given.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the number of proposals drawn per batch.
    #[inline]
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// `PdfError::InvalidParameter` if the batch size is invalid.
    pub fn build(self) -> PdfResult<SamplerConfig> {
        let config = SamplerConfig {
            seed: self.seed,
            batch_size: self.batch_size.unwrap_or(DEFAULT_BATCH_SIZE),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = SamplerConfig::builder().build().unwrap();
        assert_eq!(config, SamplerConfig::default());
        assert_eq!(config.seed(), None);
        assert_eq!(config.batch_size(), DEFAULT_BATCH_SIZE);
    }

    #[test]
    fn test_config_builder_with_seed() {
        let config = SamplerConfig::builder().seed(42).build().unwrap();
        assert_eq!(config.seed(), Some(42));
        assert_eq!(config.rng().seed(), 42);
    }

    #[test]
    fn test_maybe_seed_none_clears() {
        let config = SamplerConfig::builder()
            .seed(42)
            .maybe_seed(None)
            .build()
            .unwrap();
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_config_invalid_zero_batch() {
        let result = SamplerConfig::builder().batch_size(0).build();
        assert!(matches!(
            result,
            Err(PdfError::InvalidParameter {
                name: "batch_size",
                ..
            })
        ));
    }

    #[test]
    fn test_config_invalid_oversized_batch() {
        let result = SamplerConfig::builder()
            .batch_size(MAX_BATCH_SIZE + 1)
            .build();
        assert!(result.is_err());
    }
}
