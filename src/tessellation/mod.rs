mod tessellate_curve;

pub use tessellate_curve::TessellateCurve;

use serde::{Deserialize, Serialize};

use crate::error::{InputError, Result};
use crate::math::Point2;

/// Default cap on sampling iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 64;

/// Default cap on the number of samples per curve.
pub const DEFAULT_MAX_SAMPLES: usize = 1_000_000;

/// Parameters controlling adaptive curve sampling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    /// Maximum allowed distance between consecutive samples.
    pub max_distance: f64,
    /// Upper bound on refinement iterations.
    pub max_iterations: usize,
    /// Upper bound on the number of samples evaluated in one iteration.
    pub max_samples: usize,
}

impl SamplingParams {
    /// Creates sampling parameters with the default work bounds.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NonPositiveMaxDistance` if `max_distance` is not
    /// a positive finite number.
    pub fn new(max_distance: f64) -> Result<Self> {
        Self::with_limits(max_distance, DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_SAMPLES)
    }

    /// Creates sampling parameters with explicit work bounds.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NonPositiveMaxDistance` if `max_distance` is not
    /// a positive finite number, or `InputError::InvalidConfig` if either
    /// bound is zero.
    pub fn with_limits(max_distance: f64, max_iterations: usize, max_samples: usize) -> Result<Self> {
        if !(max_distance.is_finite() && max_distance > 0.0) {
            return Err(InputError::NonPositiveMaxDistance(max_distance).into());
        }
        if max_iterations == 0 || max_samples < 2 {
            return Err(InputError::InvalidConfig(format!(
                "sampling bounds must allow at least one iteration of two samples \
                 (max_iterations = {max_iterations}, max_samples = {max_samples})"
            ))
            .into());
        }
        Ok(Self {
            max_distance,
            max_iterations,
            max_samples,
        })
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}

impl Polyline {
    /// Wraps an ordered list of vertices.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polyline has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest distance between consecutive vertices; `0` with fewer than two.
    #[must_use]
    pub fn max_segment_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (w[1] - w[0]).norm())
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn params_reject_non_positive_distance() {
        assert!(SamplingParams::new(0.0).is_err());
        assert!(SamplingParams::new(-1.0).is_err());
        assert!(SamplingParams::new(f64::NAN).is_err());
        assert!(SamplingParams::new(f64::INFINITY).is_err());
    }

    #[test]
    fn params_reject_zero_bounds() {
        assert!(SamplingParams::with_limits(1.0, 0, 100).is_err());
        assert!(SamplingParams::with_limits(1.0, 10, 1).is_err());
    }

    #[test]
    fn params_defaults() {
        let params = SamplingParams::new(2.5).unwrap();
        assert_eq!(params.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert_eq!(params.max_samples, DEFAULT_MAX_SAMPLES);
    }

    #[test]
    fn max_segment_length_of_polyline() {
        let poly = Polyline::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 4.0),
            Point2::new(4.0, 4.0),
        ]);
        assert!((poly.max_segment_length() - 5.0).abs() < 1e-12);
        assert!(Polyline::default().max_segment_length().abs() < f64::EPSILON);
    }
}
