//! Interpolator trait definition.

use super::ExtrapolationPolicy;
use crate::types::InterpolationError;
use num_traits::Float;

/// One-dimensional interpolator over a fixed set of knots.
pub trait Interpolator<T: Float> {
    /// Interpolate at `x`.
    ///
    /// # Errors
    ///
    /// `InterpolationError::OutOfBounds` if `x` lies outside [`Interpolator::domain`].
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Return the valid interpolation domain `(x_min, x_max)`.
    fn domain(&self) -> (T, T);

    /// Evaluate at `x` beyond the domain when the policy permits it.
    ///
    /// The default implementation supports `Error` and `Clamp`; interpolators
    /// that can extend their end segments override it for `Extrapolate`.
    fn interpolate_with(&self, x: T, policy: ExtrapolationPolicy) -> Result<T, InterpolationError> {
        if x.is_nan() {
            return Err(InterpolationError::InvalidInput("query point is NaN".to_string()));
        }
        let (x_min, x_max) = self.domain();
        match policy {
            ExtrapolationPolicy::Clamp => self.interpolate(x.max(x_min).min(x_max)),
            ExtrapolationPolicy::Error | ExtrapolationPolicy::Extrapolate => self.interpolate(x),
        }
    }
}
