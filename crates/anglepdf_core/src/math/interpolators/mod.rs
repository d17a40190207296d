//! Interpolation methods for the sigma lookup table.
//!
//! ## Available Interpolators
//!
//! - [`LinearInterpolator`]: Piecewise linear interpolation between data points
//!
//! ## Core Trait
//!
//! All 1D interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`: Compute interpolated value
//! - `domain() -> (T, T)`: Return valid interpolation range
//!
//! Queries outside the domain are never answered silently: callers choose an
//! [`ExtrapolationPolicy`] and go through [`Interpolator::interpolate_with`].
//!
//! ## Example
//!
//! ```
//! use anglepdf_core::math::interpolators::{ExtrapolationPolicy, Interpolator, LinearInterpolator};
//!
//! let xs: [f64; 3] = [0.6, 0.7, 0.8];
//! let ys: [f64; 3] = [1.0, 0.6, 0.4];
//!
//! let interp = LinearInterpolator::new(&xs, &ys).unwrap();
//! let y = interp.interpolate(0.65).unwrap();
//! assert!((y - 0.8).abs() < 1e-10);
//!
//! // Outside the domain
//! assert!(interp.interpolate_with(0.9, ExtrapolationPolicy::Error).is_err());
//! let clamped = interp.interpolate_with(0.9, ExtrapolationPolicy::Clamp).unwrap();
//! assert!((clamped - 0.4).abs() < 1e-10);
//! ```

mod linear;
mod policy;
mod traits;

pub use linear::LinearInterpolator;
pub use policy::ExtrapolationPolicy;
pub use traits::Interpolator;
