//! Friedrich–Herschbach sigma lookup.
//!
//! The table maps a measured ⟨cos²θ₂D⟩ to the width σ of the
//! Friedrich–Herschbach angular distribution. It was built once, offline, by
//! Monte Carlo integration and ships with the crate as a CSV asset.
//!
//! - [`ShapeTable`]: the parsed, immutable table and its lookups
//! - [`ShapeTableHandle`]: a cloneable handle that loads the table on first use

mod handle;
mod table;

pub use handle::{ShapeTableHandle, TableSource};
pub use table::{ShapeTable, BUNDLED_TABLE_NAME, MEASUREMENT_COLUMN, SIGMA_COLUMN};
