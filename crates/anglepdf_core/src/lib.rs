//! # anglepdf_core: Foundation for Angular PDF Sampling
//!
//! ## Layer 1 (Foundation) Role
//!
//! anglepdf_core is the bottom layer of the workspace, providing:
//! - Error taxonomy: `PdfError`, `InterpolationError` (`types::error`)
//! - Request types: `AlignmentDim`, `AlignmentRequest` (`types::request`)
//! - Piecewise linear interpolation with explicit extrapolation policy (`math::interpolators`)
//! - The Friedrich–Herschbach sigma lookup table (`lookup`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other anglepdf_* crates:
//! - num-traits: generic numerical computation in the interpolators
//! - csv: parsing of the lookup table resource
//! - serde: serialisation of request types
//! - tracing: structured diagnostics on table load
//!
//! ## Usage Example
//!
//! ```rust
//! use anglepdf_core::lookup::ShapeTableHandle;
//! use anglepdf_core::types::{AlignmentDim, AlignmentRequest};
//!
//! let request = AlignmentRequest::new("fh95", AlignmentDim::OneD, 0.85, 1000).unwrap();
//!
//! let table = ShapeTableHandle::bundled();
//! let sigma = table.get().unwrap().sigma_for(request.measurement()).unwrap();
//! assert!(sigma > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod lookup;
pub mod math;
pub mod types;
