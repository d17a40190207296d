//! Measurement → sigma lookup table.

use crate::math::interpolators::{ExtrapolationPolicy, Interpolator, LinearInterpolator};
use crate::types::{InterpolationError, PdfError, PdfResult};
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Name of the column holding ⟨cos²θ₂D⟩ values.
pub const MEASUREMENT_COLUMN: &str = "measurement";

/// Name of the column holding the Gaussian width σ.
pub const SIGMA_COLUMN: &str = "sigma";

/// Resource name reported for the compiled-in table.
pub const BUNDLED_TABLE_NAME: &str = "bundled:fh95_sigma_table.csv";

const BUNDLED_TABLE: &str = include_str!("../../data/fh95_sigma_table.csv");

/// Precomputed mapping from 2D-projected expectation value to sigma.
///
/// Rows are strictly increasing in measurement and every sigma is positive.
/// The table is immutable after load; lookups are piecewise linear.
///
/// # Example
///
/// ```
/// use anglepdf_core::lookup::ShapeTable;
///
/// let table = ShapeTable::from_pairs("inline", &[0.6, 0.85, 0.95], &[0.9, 0.4, 0.2]).unwrap();
/// assert!((table.sigma_for(0.85).unwrap() - 0.4).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct ShapeTable {
    interp: LinearInterpolator<f64>,
    policy: ExtrapolationPolicy,
    source: String,
}

impl ShapeTable {
    /// Builds a table from parallel measurement and sigma columns.
    ///
    /// # Errors
    ///
    /// `PdfError::Load` if the columns differ in length, hold fewer than two
    /// rows, are not strictly increasing in measurement, or contain a
    /// non-positive sigma.
    pub fn from_pairs(
        source: impl Into<String>,
        measurements: &[f64],
        sigmas: &[f64],
    ) -> PdfResult<Self> {
        let source = source.into();
        let load_err = |reason: String| PdfError::Load {
            source_name: source.clone(),
            reason,
        };

        if let Some(i) = sigmas.iter().position(|&s| s <= 0.0) {
            return Err(load_err(format!(
                "sigma must be positive, row {} has {}",
                i, sigmas[i]
            )));
        }

        let interp = LinearInterpolator::new(measurements, sigmas)
            .map_err(|e: InterpolationError| load_err(e.to_string()))?;

        let (lo, hi) = interp.domain();
        debug!(source = %source, rows = interp.len(), lo, hi, "loaded sigma lookup table");

        Ok(Self {
            interp,
            policy: ExtrapolationPolicy::default(),
            source,
        })
    }

    /// Parses a CSV table with named `measurement` and `sigma` columns.
    ///
    /// Column order is irrelevant and extra columns are ignored.
    pub fn from_csv_reader<R: Read>(source: impl Into<String>, reader: R) -> PdfResult<Self> {
        let source = source.into();
        let load_err = |reason: String| PdfError::Load {
            source_name: source.clone(),
            reason,
        };

        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| load_err(format!("unreadable header: {}", e)))?
            .clone();
        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| load_err(format!("missing column '{}'", name)))
        };
        let m_idx = column(MEASUREMENT_COLUMN)?;
        let s_idx = column(SIGMA_COLUMN)?;

        let mut measurements = Vec::new();
        let mut sigmas = Vec::new();
        for (row, record) in rdr.records().enumerate() {
            let record = record.map_err(|e| load_err(format!("row {}: {}", row + 1, e)))?;
            let field = |idx: usize, name: &str| -> PdfResult<f64> {
                let raw = record
                    .get(idx)
                    .ok_or_else(|| load_err(format!("row {}: missing '{}'", row + 1, name)))?;
                raw.parse::<f64>().map_err(|_| {
                    load_err(format!("row {}: '{}' is not a number ({})", row + 1, raw, name))
                })
            };
            measurements.push(field(m_idx, MEASUREMENT_COLUMN)?);
            sigmas.push(field(s_idx, SIGMA_COLUMN)?);
        }

        Self::from_pairs(source, &measurements, &sigmas)
    }

    /// Parses a CSV table from an in-memory string.
    pub fn from_csv_str(source: impl Into<String>, text: &str) -> PdfResult<Self> {
        Self::from_csv_reader(source, text.as_bytes())
    }

    /// Loads a CSV table from disk.
    ///
    /// # Errors
    ///
    /// `PdfError::Load` if the file is missing or malformed.
    pub fn from_csv_path(path: impl AsRef<Path>) -> PdfResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| PdfError::Load {
            source_name: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_csv_reader(path.display().to_string(), std::io::BufReader::new(file))
    }

    /// The Friedrich–Herschbach table compiled into the crate.
    pub fn bundled() -> PdfResult<Self> {
        Self::from_csv_str(BUNDLED_TABLE_NAME, BUNDLED_TABLE)
    }

    /// Returns the table with a different out-of-domain policy.
    pub fn with_policy(mut self, policy: ExtrapolationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Out-of-domain policy used by [`ShapeTable::sigma_for`].
    #[inline]
    pub fn policy(&self) -> ExtrapolationPolicy {
        self.policy
    }

    /// Resource name the table was loaded from.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.interp.len()
    }

    /// Always false for a loaded table.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.interp.is_empty()
    }

    /// Measurement range covered by the rows.
    #[inline]
    pub fn domain(&self) -> (f64, f64) {
        self.interp.domain()
    }

    /// Measurement column.
    #[inline]
    pub fn measurements(&self) -> &[f64] {
        self.interp.xs()
    }

    /// Sigma column.
    #[inline]
    pub fn sigmas(&self) -> &[f64] {
        self.interp.ys()
    }

    /// Sigma for `measurement` under the table's own policy.
    pub fn sigma_for(&self, measurement: f64) -> PdfResult<f64> {
        self.sigma_for_with(measurement, self.policy)
    }

    /// Sigma for `measurement` under an explicit policy.
    ///
    /// # Errors
    ///
    /// `PdfError::InvalidParameter` if the measurement is out of domain under
    /// `ExtrapolationPolicy::Error`, is NaN, or extrapolation yields a
    /// non-positive sigma.
    pub fn sigma_for_with(&self, measurement: f64, policy: ExtrapolationPolicy) -> PdfResult<f64> {
        let (lo, hi) = self.domain();
        if measurement < lo || measurement > hi {
            match policy {
                ExtrapolationPolicy::Error => {}
                ExtrapolationPolicy::Clamp => warn!(
                    measurement,
                    lo, hi, "measurement outside lookup table, clamping to nearest row"
                ),
                ExtrapolationPolicy::Extrapolate => warn!(
                    measurement,
                    lo, hi, "measurement outside lookup table, extrapolating end segment"
                ),
            }
        }

        let sigma = self
            .interp
            .interpolate_with(measurement, policy)
            .map_err(|e| match e {
                InterpolationError::InvalidInput(reason) => PdfError::invalid("measurement", reason),
                other => other.into(),
            })?;

        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(PdfError::invalid(
                "sigma",
                format!(
                    "lookup for measurement {} produced non-positive sigma {}",
                    measurement, sigma
                ),
            ));
        }
        Ok(sigma)
    }
}
