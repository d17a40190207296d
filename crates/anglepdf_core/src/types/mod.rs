//! Core types for angular PDF sampling.
//!
//! - [`error`]: the caller-visible error taxonomy and interpolation errors
//! - [`request`]: alignment dimensionality and validated sampling requests

pub mod error;
pub mod request;

pub use error::{InterpolationError, PdfError, PdfResult};
pub use request::{AlignmentDim, AlignmentRequest, MAX_MEASUREMENT, MIN_MEASUREMENT};
