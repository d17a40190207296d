//! Pseudo-random number generator wrapper.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

/// Seeded random number generator for angle sampling.
///
/// # Examples
///
/// ```rust
/// use anglepdf_sampling::rng::PdfRng;
///
/// let mut rng1 = PdfRng::from_seed(42);
/// let mut rng2 = PdfRng::from_seed(42);
/// assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
/// ```
#[derive(Debug, Clone)]
pub struct PdfRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation.
    seed: u64,
}

impl PdfRng {
    /// Creates a generator from a fixed seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator from a seed drawn from OS entropy.
    ///
    /// The drawn seed is kept, so the sequence can be replayed with
    /// [`PdfRng::from_seed`].
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single uniform value in [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Draws one value from `dist`.
    #[inline]
    pub fn sample<D: Distribution<f64>>(&mut self, dist: &D) -> f64 {
        dist.sample(&mut self.inner)
    }

    /// Fills the buffer with uniform values in [0, 1).
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.inner.gen();
        }
    }

    /// Fills the buffer with uniform values in [low, high).
    ///
    /// # Panics
    ///
    /// If `low >= high` or either bound is not finite.
    #[inline]
    pub fn fill_uniform_range(&mut self, buffer: &mut [f64], low: f64, high: f64) {
        let dist = Uniform::new(low, high);
        for value in buffer.iter_mut() {
            *value = dist.sample(&mut self.inner);
        }
    }
}
