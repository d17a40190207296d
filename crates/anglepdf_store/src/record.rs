//! Persisted dataset records.
//!
//! A record is the bincode encoding of [`DatasetRecord`]: a four-byte magic,
//! a format version, the [`DatasetMetadata`] and the three angle arrays.

use crate::key::CacheKey;
use anglepdf_core::types::AlignmentDim;
use anglepdf_sampling::samples::AngleSampleSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Leading bytes of every dataset file.
pub const MAGIC: [u8; 4] = *b"APDF";

/// Current record layout version.
pub const FORMAT_VERSION: u16 = 1;

/// Record decoding errors.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Bytes that do not decode as a record
    #[error("Failed to decode dataset record: {0}")]
    Decode(#[from] bincode::Error),

    /// File that is not a dataset record at all
    #[error("Not a dataset record (magic {0:?})")]
    BadMagic([u8; 4]),

    /// Record written by an incompatible layout version
    #[error("Unsupported record format version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the file
        found: u16,
        /// Version this build reads and writes
        expected: u16,
    },
}

impl RecordError {
    /// Whether the file is a dataset record that should be regenerated
    /// rather than reported.
    pub fn is_stale(&self) -> bool {
        matches!(self, RecordError::UnsupportedVersion { .. })
    }
}

/// Provenance of a persisted dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    /// Canonical distribution name
    pub distribution: String,
    /// Alignment mode
    pub alignment: AlignmentDim,
    /// Measured ⟨cos²θ₂D⟩ the dataset was sampled for
    pub measurement: f64,
    /// Number of angle triples
    pub sample_count: u64,
    /// Shape parameter used, if the model has one
    pub sigma: Option<f64>,
    /// Seed of the generator that drew the samples
    pub seed: u64,
    /// Producer tag, e.g. `anglepdf_store 0.1.0`
    pub provenance: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// One persisted dataset.
///
/// # Example
///
/// ```
/// use anglepdf_core::types::AlignmentDim;
/// use anglepdf_sampling::samples::AngleSampleSet;
/// use anglepdf_store::{DatasetMetadata, DatasetRecord};
///
/// let metadata = DatasetMetadata {
///     distribution: "fh95".to_string(),
///     alignment: AlignmentDim::OneD,
///     measurement: 0.85,
///     sample_count: 1,
///     sigma: Some(0.32),
///     seed: 1,
///     provenance: "doc".to_string(),
///     created_at: chrono::Utc::now(),
/// };
/// let samples = AngleSampleSet::new(vec![0.1], vec![0.2], vec![0.3]).unwrap();
/// let record = DatasetRecord::new(metadata, samples);
///
/// let bytes = record.to_bytes().unwrap();
/// assert_eq!(&bytes[..4], b"APDF");
/// assert_eq!(DatasetRecord::from_bytes(&bytes).unwrap(), record);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    magic: [u8; 4],
    format_version: u16,
    metadata: DatasetMetadata,
    samples: AngleSampleSet,
}

impl DatasetRecord {
    /// Wraps metadata and samples in a current-version record.
    pub fn new(metadata: DatasetMetadata, samples: AngleSampleSet) -> Self {
        Self {
            magic: MAGIC,
            format_version: FORMAT_VERSION,
            metadata,
            samples,
        }
    }

    /// Record layout version.
    pub fn format_version(&self) -> u16 {
        self.format_version
    }

    /// Dataset provenance.
    pub fn metadata(&self) -> &DatasetMetadata {
        &self.metadata
    }

    /// The sampled angles.
    pub fn samples(&self) -> &AngleSampleSet {
        &self.samples
    }

    /// Consumes the record, returning metadata and samples.
    pub fn into_parts(self) -> (DatasetMetadata, AngleSampleSet) {
        (self.metadata, self.samples)
    }

    /// Encodes the record.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decodes a record, checking magic and version before the body.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        let (magic, format_version): ([u8; 4], u16) = bincode::deserialize(bytes)?;
        if magic != MAGIC {
            return Err(RecordError::BadMagic(magic));
        }
        if format_version != FORMAT_VERSION {
            return Err(RecordError::UnsupportedVersion {
                found: format_version,
                expected: FORMAT_VERSION,
            });
        }
        Ok(bincode::deserialize(bytes)?)
    }

    /// Checks that the record holds the dataset `key` names.
    ///
    /// Returns a description of the first mismatch.
    pub fn check(&self, key: &CacheKey) -> Result<(), String> {
        let request = key.request();
        let meta = &self.metadata;
        let expected = request.sample_count();

        if !meta.distribution.eq_ignore_ascii_case(request.distribution()) {
            return Err(format!(
                "distribution '{}' != '{}'",
                meta.distribution,
                request.distribution()
            ));
        }
        if meta.alignment != request.alignment() {
            return Err(format!("alignment {} != {}", meta.alignment, request.alignment()));
        }
        if meta.measurement != request.measurement() {
            return Err(format!(
                "measurement {} != {}",
                meta.measurement,
                request.measurement()
            ));
        }
        if meta.sample_count != expected as u64 {
            return Err(format!("sample_count {} != {}", meta.sample_count, expected));
        }

        let s = &self.samples;
        if s.phi().len() != expected || s.theta().len() != expected || s.chi().len() != expected {
            return Err(format!(
                "array lengths phi {}, theta {}, chi {} != {}",
                s.phi().len(),
                s.theta().len(),
                s.chi().len(),
                expected
            ));
        }
        if !s.is_within_domain() {
            return Err("angles outside their domain".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(n: usize) -> DatasetRecord {
        let metadata = DatasetMetadata {
            distribution: "fh95".to_string(),
            alignment: AlignmentDim::OneD,
            measurement: 0.85,
            sample_count: n as u64,
            sigma: Some(0.4),
            seed: 11,
            provenance: "test".to_string(),
            created_at: Utc::now(),
        };
        let samples = AngleSampleSet::new(vec![1.0; n], vec![0.5; n], vec![2.0; n]).unwrap();
        DatasetRecord::new(metadata, samples)
    }

    fn key(id: &str) -> CacheKey {
        CacheKey::parse(id).unwrap()
    }

    #[test]
    fn test_encoding_starts_with_magic_and_version() {
        let bytes = sample_record(3).to_bytes().unwrap();
        assert_eq!(&bytes[..4], &MAGIC);
        assert_eq!(u16::from_le_bytes([bytes[4], bytes[5]]), FORMAT_VERSION);
    }

    #[test]
    fn test_decode_preserves_samples_exactly() {
        let record = sample_record(5);
        let decoded = DatasetRecord::from_bytes(&record.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded.samples(), record.samples());
        assert_eq!(decoded.metadata(), record.metadata());
    }

    #[test]
    fn test_bad_magic() {
        let mut bytes = sample_record(2).to_bytes().unwrap();
        bytes[0] = b'X';
        let err = DatasetRecord::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, RecordError::BadMagic(_)));
        assert!(!err.is_stale());
    }

    #[test]
    fn test_other_version_is_stale() {
        let mut bytes = sample_record(2).to_bytes().unwrap();
        bytes[4..6].copy_from_slice(&7u16.to_le_bytes());
        let err = DatasetRecord::from_bytes(&bytes).unwrap_err();
        assert!(matches!(
            err,
            RecordError::UnsupportedVersion { found: 7, expected: FORMAT_VERSION }
        ));
        assert!(err.is_stale());
    }

    #[test]
    fn test_truncated_bytes_fail_to_decode() {
        let bytes = sample_record(4).to_bytes().unwrap();
        assert!(matches!(
            DatasetRecord::from_bytes(&bytes[..bytes.len() - 3]),
            Err(RecordError::Decode(_))
        ));
        assert!(matches!(
            DatasetRecord::from_bytes(&[]),
            Err(RecordError::Decode(_))
        ));
    }

    #[test]
    fn test_check_accepts_matching_key() {
        assert!(sample_record(3).check(&key("fh95-1D-0.85-3")).is_ok());
    }

    #[test]
    fn test_check_reports_mismatches() {
        let record = sample_record(3);
        for id in [
            "fh95-1D-0.85-4",
            "fh95-1D-0.86-3",
            "fh95-3D-0.85-3",
            "other-1D-0.85-3",
        ] {
            assert!(record.check(&key(id)).is_err(), "{} should not match", id);
        }
    }

    #[test]
    fn test_check_rejects_out_of_domain_angles() {
        let mut record = sample_record(1);
        record.samples = AngleSampleSet::new(vec![1.0], vec![4.0], vec![1.0]).unwrap();
        let reason = record.check(&key("fh95-1D-0.85-1")).unwrap_err();
        assert!(reason.contains("domain"));
    }
}
