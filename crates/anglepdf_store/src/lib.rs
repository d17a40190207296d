//! # anglepdf_store: Dataset Cache
//!
//! ## Layer 3 Role
//!
//! anglepdf_store persists sampled angle sets so that each
//! (distribution, alignment, measurement, sample count) combination is
//! sampled only once:
//! - Identifier parsing and canonical cache keys (`key`)
//! - The binary dataset record and its provenance metadata (`record`)
//! - The file-backed store with `get_or_create` (`store`)
//! - Store configuration from defaults, TOML or environment (`config`)
//!
//! ## Flow
//!
//! ```text
//! get_or_create("fh95-1D-0.85-10000")
//! ├── CacheKey::parse          (MalformedIdentifier / InvalidParameter)
//! ├── selector::resolve        (UnsupportedDistribution)
//! ├── exists(key)?
//! │   ├── yes → load + validate → Origin::Cached
//! │   └── no / stale → sample → save (write, then rename) → Origin::Sampled
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use anglepdf_store::{DatasetStore, Origin, StoreConfig};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let config = StoreConfig {
//!     dataset_dir: dir.path().to_path_buf(),
//!     seed: Some(1),
//!     ..StoreConfig::default()
//! };
//! let store = DatasetStore::new(config).unwrap();
//!
//! let first = store.get_or_create("fh95-1D-0.85-200").unwrap();
//! assert_eq!(first.origin, Origin::Sampled);
//!
//! let second = store.get_or_create("fh95-1D-0.85-200").unwrap();
//! assert_eq!(second.origin, Origin::Cached);
//! assert_eq!(first.samples, second.samples);
//! ```

#![deny(missing_docs)]

pub mod config;
pub mod key;
pub mod record;
pub mod store;

pub use config::{ConfigError, StoreConfig};
pub use key::{CacheKey, IDENTIFIER_SEPARATOR};
pub use record::{DatasetMetadata, DatasetRecord};
pub use store::{Dataset, DatasetStore, Origin};
