//! # anglepdf_sampling: Rejection Sampling Engine
//!
//! ## Layer 2 Role
//!
//! anglepdf_sampling draws angle triples (φ, θ, χ) for a molecular ensemble
//! whose degree of alignment has been measured:
//! - Seeded random number generation (`rng`)
//! - Sampler configuration (`config`)
//! - Sample sets and their projection statistics (`samples`)
//! - The `Sampler` trait and the Friedrich–Herschbach sampler (`sampler`)
//! - Mapping of distribution names to samplers (`selector`)
//!
//! ## Architecture
//!
//! ```text
//! resolve("fh95")
//! └── SamplerHandle::FriedrichHerschbach
//!     ├── ShapeTableHandle  (measurement → sigma)
//!     ├── PdfRng            (uniform proposals and thresholds)
//!     └── sample_1d()       (accept/reject on cos θ)
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use anglepdf_core::lookup::ShapeTableHandle;
//! use anglepdf_core::types::{AlignmentDim, AlignmentRequest};
//! use anglepdf_sampling::rng::PdfRng;
//! use anglepdf_sampling::sampler::Sampler;
//! use anglepdf_sampling::selector::resolve;
//!
//! let sampler = resolve("fh95", &ShapeTableHandle::bundled()).unwrap();
//! let request = AlignmentRequest::new("fh95", AlignmentDim::OneD, 0.85, 500).unwrap();
//!
//! let mut rng = PdfRng::from_seed(7);
//! let outcome = sampler.sample(&request, &mut rng).unwrap();
//! assert_eq!(outcome.samples.len(), 500);
//! ```

#![deny(missing_docs)]

pub mod config;
pub mod rng;
pub mod sampler;
pub mod samples;
pub mod selector;

pub use config::SamplerConfig;
pub use rng::PdfRng;
pub use sampler::{FriedrichHerschbach, Sampler, SamplingOutcome};
pub use samples::AngleSampleSet;
pub use selector::{resolve, DistributionKind, SamplerHandle};
