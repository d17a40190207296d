//! Linear interpolation implementation.

use super::{ExtrapolationPolicy, Interpolator};
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise linear interpolator.
///
/// Stores (x, y) knots with strictly increasing x and performs linear
/// interpolation between adjacent knots. No smoothing or higher-order fit.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use anglepdf_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 2.0, 4.0, 6.0];
///
/// let interp = LinearInterpolator::new(&xs, &ys).unwrap();
/// assert_eq!(interp.domain(), (0.0, 3.0));
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Float> {
    /// Strictly increasing x-coordinates
    xs: Vec<T>,
    /// Corresponding y-values
    ys: Vec<T>,
}

impl<T: Float> LinearInterpolator<T> {
    /// Construct a linear interpolator from x and y data points.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched lengths or non-finite values
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 data points
    /// * `Err(InterpolationError::NonMonotonicData)` - xs not strictly increasing
    ///
    /// # Example
    ///
    /// ```
    /// use anglepdf_core::math::interpolators::LinearInterpolator;
    ///
    /// assert!(LinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]).is_ok());
    /// assert!(LinearInterpolator::new(&[0.0], &[0.0]).is_err());
    /// assert!(LinearInterpolator::new(&[1.0, 0.0], &[0.0, 1.0]).is_err());
    /// ```
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }

        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }

        if let Some(i) = xs
            .iter()
            .chain(ys.iter())
            .position(|v| !v.is_finite())
        {
            return Err(InterpolationError::InvalidInput(format!(
                "non-finite value at position {}",
                i % xs.len()
            )));
        }

        if let Some(i) = xs.windows(2).position(|w| w[1] <= w[0]) {
            return Err(InterpolationError::NonMonotonicData { index: i + 1 });
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    /// Returns a reference to the x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-values.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no data points.
    /// Never true for a successfully constructed interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Returns the index `i` such that `xs[i] <= x < xs[i+1]`,
    /// clamped to the valid segment range [0, n-2].
    #[inline]
    fn find_segment(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);

        if pos == 0 {
            0
        } else if pos >= self.xs.len() {
            self.xs.len() - 2
        } else {
            pos - 1
        }
    }

    /// Evaluate the segment formula without a bounds check.
    #[inline]
    fn eval_segment(&self, x: T) -> T {
        let i = self.find_segment(x);

        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[i];
        let y1 = self.ys[i + 1];

        // y = y0 + (y1 - y0) * (x - x0) / (x1 - x0)
        let t = (x - x0) / (x1 - x0);
        y0 + (y1 - y0) * t
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    /// Interpolate value at point `x` using piecewise linear interpolation.
    ///
    /// Binary search (O(log n)) locates the segment.
    ///
    /// # Example
    ///
    /// ```
    /// use anglepdf_core::math::interpolators::{Interpolator, LinearInterpolator};
    ///
    /// let interp = LinearInterpolator::new(&[0.0_f64, 1.0, 2.0], &[0.0_f64, 2.0, 4.0]).unwrap();
    /// assert!((interp.interpolate(0.5).unwrap() - 1.0).abs() < 1e-10);
    /// assert!(interp.interpolate(2.5).is_err());
    /// ```
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        if x.is_nan() {
            return Err(InterpolationError::InvalidInput("query point is NaN".to_string()));
        }

        let (x_min, x_max) = self.domain();
        if x < x_min || x > x_max {
            return Err(InterpolationError::OutOfBounds {
                x: x.to_f64().unwrap_or(f64::NAN),
                min: x_min.to_f64().unwrap_or(f64::NAN),
                max: x_max.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(self.eval_segment(x))
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    fn interpolate_with(&self, x: T, policy: ExtrapolationPolicy) -> Result<T, InterpolationError> {
        if x.is_nan() {
            return Err(InterpolationError::InvalidInput("query point is NaN".to_string()));
        }
        let (x_min, x_max) = self.domain();
        match policy {
            ExtrapolationPolicy::Error => self.interpolate(x),
            ExtrapolationPolicy::Clamp => self.interpolate(x.max(x_min).min(x_max)),
            ExtrapolationPolicy::Extrapolate => Ok(self.eval_segment(x)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_new_with_minimum_points() {
        let interp = LinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        assert_eq!(interp.len(), 2);
        assert!(!interp.is_empty());
    }

    #[test]
    fn test_new_insufficient_data_one_point() {
        match LinearInterpolator::new(&[1.0], &[2.0]).unwrap_err() {
            InterpolationError::InsufficientData { got, need } => {
                assert_eq!(got, 1);
                assert_eq!(need, 2);
            }
            other => panic!("Expected InsufficientData error, got {:?}", other),
        }
    }

    #[test]
    fn test_new_mismatched_lengths() {
        match LinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0]).unwrap_err() {
            InterpolationError::InvalidInput(msg) => assert!(msg.contains("same length")),
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_unsorted_xs() {
        let result = LinearInterpolator::new(&[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0]);
        assert_eq!(
            result.unwrap_err(),
            InterpolationError::NonMonotonicData { index: 2 }
        );
    }

    #[test]
    fn test_new_rejects_duplicate_xs() {
        let result = LinearInterpolator::new(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0]);
        assert_eq!(
            result.unwrap_err(),
            InterpolationError::NonMonotonicData { index: 2 }
        );
    }

    #[test]
    fn test_new_rejects_non_finite_values() {
        assert!(matches!(
            LinearInterpolator::new(&[0.0, 1.0], &[0.0, f64::INFINITY]),
            Err(InterpolationError::InvalidInput(_))
        ));
        assert!(matches!(
            LinearInterpolator::new(&[f64::NAN, 1.0], &[0.0, 1.0]),
            Err(InterpolationError::InvalidInput(_))
        ));
    }

    // ========================================
    // Interpolation Tests
    // ========================================

    #[test]
    fn test_interpolate_at_knot_points() {
        let xs = [0.505, 0.6, 0.85, 0.995];
        let ys = [2.89, 0.93, 0.32, 0.07];
        let interp = LinearInterpolator::new(&xs, &ys).unwrap();

        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(interp.interpolate(*x).unwrap(), *y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_interpolate_decreasing_values() {
        let interp = LinearInterpolator::new(&[0.6, 0.8], &[1.0, 0.5]).unwrap();
        assert_relative_eq!(interp.interpolate(0.7).unwrap(), 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolate_non_uniform_spacing() {
        let interp = LinearInterpolator::new(&[0.0, 0.1, 1.0, 10.0], &[0.0, 1.0, 2.0, 3.0]).unwrap();
        assert_relative_eq!(interp.interpolate(0.05).unwrap(), 0.5, epsilon = 1e-10);
        assert_relative_eq!(interp.interpolate(0.55).unwrap(), 1.5, epsilon = 1e-10);
    }

    #[test]
    fn test_interpolate_out_of_bounds() {
        let interp = LinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
        match interp.interpolate(2.1).unwrap_err() {
            InterpolationError::OutOfBounds { x, min, max } => {
                assert_relative_eq!(x, 2.1);
                assert_relative_eq!(min, 0.0);
                assert_relative_eq!(max, 2.0);
            }
            other => panic!("Expected OutOfBounds error, got {:?}", other),
        }
        assert!(interp.interpolate(-0.1).is_err());
    }

    #[test]
    fn test_interpolate_nan_is_rejected() {
        let interp = LinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        assert!(matches!(
            interp.interpolate(f64::NAN),
            Err(InterpolationError::InvalidInput(_))
        ));
        assert!(matches!(
            interp.interpolate_with(f64::NAN, ExtrapolationPolicy::Clamp),
            Err(InterpolationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_interpolate_f32() {
        let interp = LinearInterpolator::new(&[0.0f32, 1.0, 2.0], &[0.0f32, 2.0, 4.0]).unwrap();
        let y = interp.interpolate(0.5_f32).unwrap();
        assert!((y - 1.0_f32).abs() < 1e-6);
    }

    // ========================================
    // Policy Tests
    // ========================================

    #[test]
    fn test_policy_error_outside_domain() {
        let interp = LinearInterpolator::new(&[0.6, 0.8], &[1.0, 0.5]).unwrap();
        assert!(interp.interpolate_with(0.9, ExtrapolationPolicy::Error).is_err());
        assert!(interp.interpolate_with(0.7, ExtrapolationPolicy::Error).is_ok());
    }

    #[test]
    fn test_policy_clamp_uses_endpoints() {
        let interp = LinearInterpolator::new(&[0.6, 0.8], &[1.0, 0.5]).unwrap();
        assert_relative_eq!(
            interp.interpolate_with(0.5, ExtrapolationPolicy::Clamp).unwrap(),
            1.0
        );
        assert_relative_eq!(
            interp.interpolate_with(1.0, ExtrapolationPolicy::Clamp).unwrap(),
            0.5
        );
    }

    #[test]
    fn test_policy_extrapolate_extends_end_segments() {
        let interp = LinearInterpolator::new(&[0.6, 0.8, 0.9], &[1.0, 0.5, 0.3]).unwrap();
        // Last segment slope -2: 0.3 - 2 * 0.05
        assert_relative_eq!(
            interp
                .interpolate_with(0.95, ExtrapolationPolicy::Extrapolate)
                .unwrap(),
            0.2,
            epsilon = 1e-12
        );
        // First segment slope -2.5: 1.0 + 2.5 * 0.1
        assert_relative_eq!(
            interp
                .interpolate_with(0.5, ExtrapolationPolicy::Extrapolate)
                .unwrap(),
            1.25,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_policy_inside_domain_is_identical() {
        let interp = LinearInterpolator::new(&[0.6, 0.8, 0.9], &[1.0, 0.5, 0.3]).unwrap();
        let plain = interp.interpolate(0.75).unwrap();
        for policy in [
            ExtrapolationPolicy::Clamp,
            ExtrapolationPolicy::Error,
            ExtrapolationPolicy::Extrapolate,
        ] {
            assert_eq!(interp.interpolate_with(0.75, policy).unwrap(), plain);
        }
    }
}
