//! File-backed dataset store.

use crate::config::StoreConfig;
use crate::key::CacheKey;
use crate::record::{DatasetMetadata, DatasetRecord};
use anglepdf_core::lookup::ShapeTableHandle;
use anglepdf_core::types::{PdfError, PdfResult};
use anglepdf_sampling::config::SamplerConfig;
use anglepdf_sampling::samples::AngleSampleSet;
use anglepdf_sampling::selector::{self, SamplerHandle};
use anglepdf_sampling::Sampler;
use chrono::Utc;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

/// Where a returned dataset came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// Read from an existing file.
    Cached,
    /// Sampled by this call and persisted.
    Sampled,
}

/// A dataset returned by [`DatasetStore::get_or_create`].
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    /// Canonical key
    pub key: CacheKey,
    /// File the dataset is stored in
    pub path: PathBuf,
    /// Provenance
    pub metadata: DatasetMetadata,
    /// The sampled angles
    pub samples: AngleSampleSet,
    /// Cache hit or fresh sample
    pub origin: Origin,
}

/// Store of sampled datasets, one file per [`CacheKey`].
///
/// Calls on the same key are serialised within the process; independent
/// keys proceed concurrently. A key's lock lives only while a call on it is
/// in flight. Files are written under a temporary name and
/// renamed into place, so readers never observe a partial record.
#[derive(Debug)]
pub struct DatasetStore {
    config: StoreConfig,
    sampler_config: SamplerConfig,
    table: ShapeTableHandle,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl DatasetStore {
    /// Creates a store whose lookup table comes from `config`.
    ///
    /// The table is not loaded until the first dataset is sampled.
    ///
    /// # Errors
    ///
    /// `PdfError::InvalidParameter` if the configuration does not validate.
    pub fn new(config: StoreConfig) -> PdfResult<Self> {
        let table = ShapeTableHandle::new(config.table_source(), config.extrapolation);
        Self::with_table(config, table)
    }

    /// Creates a store that samples with an explicit lookup table.
    pub fn with_table(config: StoreConfig, table: ShapeTableHandle) -> PdfResult<Self> {
        config.validate()?;
        let sampler_config = config.sampler_config()?;
        Ok(Self {
            config,
            sampler_config,
            table,
            locks: Mutex::new(HashMap::new()),
        })
    }

    /// Store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Lookup table used for sampling.
    pub fn table(&self) -> &ShapeTableHandle {
        &self.table
    }

    /// Path of the file holding `key`'s dataset.
    pub fn path_for(&self, key: &CacheKey) -> PathBuf {
        self.config
            .dataset_dir
            .join(key.file_name(&self.config.extension))
    }

    /// Whether a dataset file exists for `key`.
    pub fn exists(&self, key: &CacheKey) -> bool {
        self.path_for(key).is_file()
    }

    /// Reads the stored record for `key` without sampling.
    ///
    /// Returns `Ok(None)` if there is no file, or if the file holds a record
    /// of another layout version or one that does not match `key`.
    ///
    /// # Errors
    ///
    /// `PdfError::Storage` if the file cannot be read or decoded.
    pub fn load(&self, key: &CacheKey) -> PdfResult<Option<DatasetRecord>> {
        let path = self.path_for(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PdfError::storage(path, e)),
        };

        let record = match DatasetRecord::from_bytes(&bytes) {
            Ok(record) => record,
            Err(e) if e.is_stale() => {
                warn!(path = %path.display(), error = %e, "Stale dataset record");
                return Ok(None);
            }
            Err(e) => return Err(PdfError::storage(path, e)),
        };

        if let Err(reason) = record.check(key) {
            warn!(path = %path.display(), %reason, "Dataset record does not match its key");
            return Ok(None);
        }
        Ok(Some(record))
    }

    /// Writes `record` as `key`'s dataset, replacing any existing file.
    ///
    /// # Errors
    ///
    /// - `PdfError::InvalidParameter` if the record does not match `key`
    /// - `PdfError::Storage` if the directory or file cannot be written
    pub fn save(&self, key: &CacheKey, record: &DatasetRecord) -> PdfResult<PathBuf> {
        record
            .check(key)
            .map_err(|reason| PdfError::invalid("record", reason))?;

        let dir = &self.config.dataset_dir;
        fs::create_dir_all(dir).map_err(|e| PdfError::storage(dir, e))?;

        let path = self.path_for(key);
        let bytes = record.to_bytes().map_err(|e| PdfError::storage(&path, e))?;

        let temp_path = dir.join(format!("{}.tmp", key.file_name(&self.config.extension)));
        let written = fs::write(&temp_path, &bytes)
            .map_err(|e| PdfError::storage(&temp_path, e))
            .and_then(|()| fs::rename(&temp_path, &path).map_err(|e| PdfError::storage(&path, e)));
        if written.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        written?;

        debug!(path = %path.display(), bytes = bytes.len(), "Dataset saved");
        Ok(path)
    }

    /// Deletes `key`'s dataset file. Returns whether a file was removed.
    pub fn remove(&self, key: &CacheKey) -> PdfResult<bool> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(PdfError::storage(path, e)),
        }
    }

    /// Returns the dataset an identifier names, sampling and persisting it
    /// on first request.
    ///
    /// # Errors
    ///
    /// - `PdfError::MalformedIdentifier` / `PdfError::InvalidParameter` if
    ///   the identifier does not parse into a valid request
    /// - `PdfError::UnsupportedDistribution` for unknown distributions,
    ///   before any file is touched
    /// - `PdfError::NotImplemented` for 3D alignment
    /// - `PdfError::Load` if the lookup table cannot be loaded
    /// - `PdfError::Storage` if an existing file is unreadable or the new
    ///   one cannot be written
    pub fn get_or_create(&self, identifier: &str) -> PdfResult<Dataset> {
        let key = CacheKey::parse(identifier)?;
        self.get_or_create_key(&key)
    }

    /// [`DatasetStore::get_or_create`] for an already parsed key.
    pub fn get_or_create_key(&self, key: &CacheKey) -> PdfResult<Dataset> {
        let request = key.request();
        let sampler =
            selector::resolve_with(request.distribution(), &self.table, &self.sampler_config)?;

        let lock = self.key_lock(key);
        let result = {
            let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
            self.load_or_sample(key, &sampler)
        };
        self.release_key_lock(key, lock);
        result
    }

    fn load_or_sample(&self, key: &CacheKey, sampler: &SamplerHandle) -> PdfResult<Dataset> {
        let request = key.request();
        let path = self.path_for(key);
        if self.exists(key) {
            if let Some(record) = self.load(key)? {
                debug!(key = %key, "Dataset cache hit");
                let (metadata, samples) = record.into_parts();
                return Ok(Dataset {
                    key: key.clone(),
                    path,
                    metadata,
                    samples,
                    origin: Origin::Cached,
                });
            }
        } else {
            debug!(key = %key, "Dataset cache miss");
        }

        let mut rng = self.sampler_config.rng();
        let outcome = sampler.sample(request, &mut rng)?;

        let metadata = DatasetMetadata {
            distribution: sampler.name().to_string(),
            alignment: request.alignment(),
            measurement: request.measurement(),
            sample_count: request.sample_count() as u64,
            sigma: outcome.sigma,
            seed: rng.seed(),
            provenance: self.config.provenance.clone(),
            created_at: Utc::now(),
        };
        let record = DatasetRecord::new(metadata, outcome.samples);
        let path = self.save(key, &record)?;

        info!(
            key = %key,
            path = %path.display(),
            sigma = ?record.metadata().sigma,
            "Sampled new dataset"
        );

        let (metadata, samples) = record.into_parts();
        Ok(Dataset {
            key: key.clone(),
            path,
            metadata,
            samples,
            origin: Origin::Sampled,
        })
    }

    fn key_lock(&self, key: &CacheKey) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        locks.entry(key.to_string()).or_default().clone()
    }

    /// Drops the map entry once no other caller holds or waits on it.
    fn release_key_lock(&self, key: &CacheKey, lock: Arc<Mutex<()>>) {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        // one reference in the map, one here
        if Arc::strong_count(&lock) == 2 {
            locks.remove(&key.to_string());
        }
    }
}
