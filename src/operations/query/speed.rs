use serde::{Deserialize, Serialize};

/// Default curvature clamp (1/m).
pub const DEFAULT_MAX_CURVATURE: f64 = 100.0;

/// Default speed clamp, in the unit of the scaled speed output (km/h).
pub const DEFAULT_MAX_SPEED: f64 = 1e4;

/// Computes the maximum speed through each vertex from its curvature.
///
/// `v = sqrt(a_lat / |k|)`, with `a_lat` the allowed lateral acceleration.
/// Zero curvature gives `+inf`; clamping is left to [`ClampPolicy`].
pub struct SpeedLimit {
    lateral_acceleration: f64,
}

impl SpeedLimit {
    /// Creates a new `SpeedLimit` query.
    #[must_use]
    pub fn new(lateral_acceleration: f64) -> Self {
        Self {
            lateral_acceleration,
        }
    }

    /// Executes the query, returning one speed per curvature value.
    #[must_use]
    pub fn execute(&self, curvature: &[f64]) -> Vec<f64> {
        curvature
            .iter()
            .map(|k| (self.lateral_acceleration / k.abs()).sqrt())
            .collect()
    }
}

/// Replacement values for degenerate curvature and speed.
///
/// Non-finite values are clamped rather than reported so the output can
/// always be plotted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClampPolicy {
    pub max_curvature: f64,
    pub max_speed: f64,
}

impl Default for ClampPolicy {
    fn default() -> Self {
        Self {
            max_curvature: DEFAULT_MAX_CURVATURE,
            max_speed: DEFAULT_MAX_SPEED,
        }
    }
}

impl ClampPolicy {
    /// `NaN` and `+inf` become `max_curvature`, `-inf` becomes `-max_curvature`.
    ///
    /// Returns the number of values replaced.
    pub fn clamp_curvature(&self, curvature: &mut [f64]) -> usize {
        let mut replaced = 0;
        for k in curvature.iter_mut() {
            if k.is_nan() || *k == f64::INFINITY {
                *k = self.max_curvature;
                replaced += 1;
            } else if *k == f64::NEG_INFINITY {
                *k = -self.max_curvature;
                replaced += 1;
            }
        }
        replaced
    }

    /// `+inf` becomes `max_speed`.
    ///
    /// Returns the number of values replaced.
    pub fn clamp_speed(&self, speed: &mut [f64]) -> usize {
        let mut replaced = 0;
        for v in speed.iter_mut().filter(|v| **v == f64::INFINITY) {
            *v = self.max_speed;
            replaced += 1;
        }
        replaced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn speed_from_curvature() {
        let v = SpeedLimit::new(1.0).execute(&[0.01, -0.04]);
        assert_relative_eq!(v[0], 10.0);
        assert_relative_eq!(v[1], 5.0);
    }

    #[test]
    fn zero_curvature_is_infinite_speed() {
        let v = SpeedLimit::new(1.73).execute(&[0.0, -0.0]);
        assert!(v.iter().all(|s| *s == f64::INFINITY));
    }

    #[test]
    fn clamp_curvature_replaces_non_finite() {
        let policy = ClampPolicy::default();
        let mut c = vec![f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0.5];
        assert_eq!(policy.clamp_curvature(&mut c), 3);
        assert_eq!(c, vec![100.0, 100.0, -100.0, 0.5]);
    }

    #[test]
    fn clamp_speed_replaces_infinity_only() {
        let policy = ClampPolicy {
            max_curvature: 1.0,
            max_speed: 300.0,
        };
        let mut v = vec![f64::INFINITY, 42.0];
        assert_eq!(policy.clamp_speed(&mut v), 1);
        assert_eq!(v, vec![300.0, 42.0]);
    }
}
