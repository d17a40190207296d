//! Store configuration management
//!
//! Handles loading configuration from defaults, TOML files, and environment
//! variables.

use anglepdf_core::lookup::TableSource;
use anglepdf_core::math::interpolators::ExtrapolationPolicy;
use anglepdf_core::types::PdfError;
use anglepdf_sampling::config::{SamplerConfig, DEFAULT_BATCH_SIZE};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the dataset directory.
pub const ENV_DATASET_DIR: &str = "ANGLEPDF_DATASET_DIR";
/// Environment variable naming a CSV lookup table to use instead of the bundled one.
pub const ENV_TABLE: &str = "ANGLEPDF_TABLE";
/// Environment variable selecting the extrapolation policy.
pub const ENV_EXTRAPOLATION: &str = "ANGLEPDF_EXTRAPOLATION";
/// Environment variable fixing the sampling seed.
pub const ENV_SEED: &str = "ANGLEPDF_SEED";
/// Environment variable setting the sampler batch size.
pub const ENV_BATCH_SIZE: &str = "ANGLEPDF_BATCH_SIZE";
/// Environment variable overriding the provenance tag.
pub const ENV_PROVENANCE: &str = "ANGLEPDF_PROVENANCE";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown extrapolation policy name
    #[error("Invalid extrapolation policy: {0}. Must be one of: clamp, error, extrapolate")]
    InvalidPolicy(String),

    /// Value that does not parse for its setting
    #[error("Invalid value for {name}: {value}")]
    InvalidValue {
        /// Setting name
        name: &'static str,
        /// Value as supplied
        value: String,
    },

    /// Unreadable or unparsable configuration file
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Settings that fail validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for PdfError {
    fn from(err: ConfigError) -> Self {
        PdfError::invalid("config", err.to_string())
    }
}

/// Dataset store configuration.
///
/// # Example
///
/// ```
/// use anglepdf_store::StoreConfig;
///
/// let config: StoreConfig = toml::from_str(r#"
///     dataset_dir = "/tmp/angles"
///     extrapolation = "error"
///     seed = 7
/// "#).unwrap();
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.extension, "bin");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding dataset files
    pub dataset_dir: PathBuf,
    /// File extension of dataset files, without the dot
    pub extension: String,
    /// CSV lookup table; the bundled table when unset
    pub table_path: Option<PathBuf>,
    /// Behaviour for measurements outside the table domain
    pub extrapolation: ExtrapolationPolicy,
    /// Fixed sampling seed; fresh entropy per dataset when unset
    pub seed: Option<u64>,
    /// Proposals drawn per rejection-sampling batch
    pub batch_size: usize,
    /// Tag recorded in every dataset's metadata
    pub provenance: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dataset_dir: PathBuf::from("datasets"),
            extension: "bin".to_string(),
            table_path: None,
            extrapolation: ExtrapolationPolicy::default(),
            seed: None,
            batch_size: DEFAULT_BATCH_SIZE,
            provenance: default_provenance(),
        }
    }
}

fn default_provenance() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

impl StoreConfig {
    /// Create a new StoreConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default().with_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: StoreConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Applies every override `lookup` yields for the `ANGLEPDF_*` names.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DATASET_DIR) {
            self.dataset_dir = PathBuf::from(dir);
        }

        if let Some(table) = lookup(ENV_TABLE) {
            self.table_path = Some(PathBuf::from(table));
        }

        if let Some(policy) = lookup(ENV_EXTRAPOLATION) {
            self.extrapolation = policy
                .parse()
                .map_err(|_| ConfigError::InvalidPolicy(policy.clone()))?;
        }

        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = Some(seed.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: ENV_SEED,
                value: seed.clone(),
            })?);
        }

        if let Some(batch) = lookup(ENV_BATCH_SIZE) {
            self.batch_size = batch.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: ENV_BATCH_SIZE,
                value: batch.clone(),
            })?;
        }

        if let Some(provenance) = lookup(ENV_PROVENANCE) {
            self.provenance = provenance;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dataset_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("dataset_dir must not be empty".to_string()));
        }
        if self.extension.is_empty() || self.extension.contains(['.', '/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "extension '{}' must be a non-empty bare extension",
                self.extension
            )));
        }
        self.sampler_config()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(())
    }

    /// Where the lookup table is loaded from.
    pub fn table_source(&self) -> TableSource {
        match &self.table_path {
            Some(path) => TableSource::Csv(path.clone()),
            None => TableSource::Bundled,
        }
    }

    /// Sampler configuration derived from the seed and batch size.
    pub fn sampler_config(&self) -> Result<SamplerConfig, PdfError> {
        SamplerConfig::builder()
            .maybe_seed(self.seed)
            .batch_size(self.batch_size)
            .build()
    }
}
