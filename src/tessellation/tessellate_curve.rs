use tracing::{debug, instrument, warn};

use crate::error::{ComputationError, Result};
use crate::geometry::BSpline;

use super::{Polyline, SamplingParams};

/// Samples a B-spline uniformly in parameter space, refining the sample
/// count until no two consecutive samples are further apart than
/// `max_distance`.
///
/// The first pass uses two samples per control point. Each further pass
/// scales the count by the measured overshoot `max_gap / max_distance`
/// (and always adds at least one sample). Refinement stops with
/// `ComputationError::SamplingLimit` once `max_iterations` passes have run
/// or the next pass would exceed `max_samples`.
pub struct TessellateCurve {
    params: SamplingParams,
}

impl TessellateCurve {
    /// Creates a new `TessellateCurve` operation.
    #[must_use]
    pub fn new(params: SamplingParams) -> Self {
        Self { params }
    }

    /// Executes the sampling, returning the accepted polyline.
    ///
    /// # Errors
    ///
    /// Returns `ComputationError::SamplingLimit` if the gap bound is not met
    /// within the configured work limits, or an evaluation error from the curve.
    #[instrument(skip_all, fields(max_distance = self.params.max_distance))]
    pub fn execute(&self, curve: &BSpline) -> Result<Polyline> {
        let SamplingParams {
            max_distance,
            max_iterations,
            max_samples,
        } = self.params;

        let mut n_eval = 2 * curve.control().len();
        let mut iterations = 0;
        let mut max_gap = f64::INFINITY;

        while iterations < max_iterations && n_eval <= max_samples {
            let polyline = Polyline::new(curve.evaluate_uniform(n_eval)?);
            max_gap = polyline.max_segment_length();
            iterations += 1;
            debug!(iterations, n_eval, max_gap, "sampling pass");

            if max_gap <= max_distance {
                return Ok(polyline);
            }
            if !max_gap.is_finite() {
                break;
            }

            #[allow(clippy::cast_precision_loss)]
            let (scaled, limit) = (
                (n_eval as f64 * (max_gap / max_distance)).round_ties_even(),
                max_samples as f64,
            );
            if scaled > limit {
                n_eval = max_samples.saturating_add(1);
                break;
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let scaled = scaled as usize;
            n_eval = scaled.max(n_eval + 1);
        }

        warn!(iterations, n_eval, max_gap, "adaptive sampling hit its work bound");
        Err(ComputationError::SamplingLimit {
            iterations,
            samples: n_eval,
            max_gap,
            max_distance,
        }
        .into())
    }
}
