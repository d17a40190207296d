//! Lazily initialised, shared table handle.

use super::ShapeTable;
use crate::math::interpolators::ExtrapolationPolicy;
use crate::types::{PdfError, PdfResult};
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use tracing::info;

/// Where a [`ShapeTableHandle`] loads its table from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// The table compiled into the crate.
    Bundled,
    /// A CSV file on disk.
    Csv(PathBuf),
    /// A table supplied already parsed.
    Preloaded,
}

#[derive(Debug)]
struct Inner {
    source: TableSource,
    policy: ExtrapolationPolicy,
    table: OnceLock<Arc<ShapeTable>>,
}

/// Cloneable handle to a lookup table loaded on first use.
///
/// Clones share the loaded table. A failed load is not cached, so a later
/// call retries.
///
/// # Example
///
/// ```
/// use anglepdf_core::lookup::ShapeTableHandle;
///
/// let handle = ShapeTableHandle::bundled();
/// assert!(!handle.is_loaded());
/// let table = handle.get().unwrap();
/// assert!(handle.is_loaded());
/// assert!(table.len() > 2);
/// ```
#[derive(Debug, Clone)]
pub struct ShapeTableHandle {
    inner: Arc<Inner>,
}

impl ShapeTableHandle {
    /// Handle to a table from `source`, looked up under `policy`.
    pub fn new(source: TableSource, policy: ExtrapolationPolicy) -> Self {
        Self {
            inner: Arc::new(Inner {
                source,
                policy,
                table: OnceLock::new(),
            }),
        }
    }

    /// Handle to the bundled table with the default policy.
    pub fn bundled() -> Self {
        Self::new(TableSource::Bundled, ExtrapolationPolicy::default())
    }

    /// Handle to an already loaded table.
    pub fn from_table(table: ShapeTable) -> Self {
        let policy = table.policy();
        let handle = Self::new(TableSource::Preloaded, policy);
        let _ = handle.inner.table.set(Arc::new(table));
        handle
    }

    /// The configured source.
    pub fn source(&self) -> &TableSource {
        &self.inner.source
    }

    /// Whether the table has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.inner.table.get().is_some()
    }

    /// Returns the table, loading it on first call.
    ///
    /// # Errors
    ///
    /// `PdfError::Load` if the resource is missing or malformed.
    pub fn get(&self) -> PdfResult<Arc<ShapeTable>> {
        if let Some(table) = self.inner.table.get() {
            return Ok(Arc::clone(table));
        }

        let table = match &self.inner.source {
            TableSource::Bundled => ShapeTable::bundled()?,
            TableSource::Csv(path) => ShapeTable::from_csv_path(path)?,
            // set at construction, so the early return above always fires
            TableSource::Preloaded => {
                return Err(PdfError::Load {
                    source_name: "preloaded".to_string(),
                    reason: "table was never supplied".to_string(),
                })
            }
        }
        .with_policy(self.inner.policy);
        info!(source = table.source(), rows = table.len(), policy = %self.inner.policy, "sigma lookup table ready");

        Ok(Arc::clone(self.inner.table.get_or_init(|| Arc::new(table))))
    }
}
