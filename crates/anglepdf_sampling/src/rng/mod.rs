//! # Random Number Generation
//!
//! Seeded pseudo-random number generation for the samplers.
//!
//! - **Reproducibility**: every generator carries the seed it was built from,
//!   including generators seeded from entropy, so a dataset can record it
//! - **Efficiency**: batch operations fill caller-owned `&mut [f64]` buffers
//!
//! ```rust
//! use anglepdf_sampling::rng::PdfRng;
//!
//! let mut rng = PdfRng::from_seed(12345);
//! let u = rng.gen_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_uniform_range(&mut buffer, -1.0, 1.0);
//! ```

mod prng;

pub use prng::PdfRng;
