//! End-to-end curve computation: geographic control points in, a dense
//! sampled curve with distance, curvature and speed profiles out.

mod config;
mod request;

pub use config::{PipelineConfig, DEFAULT_LATERAL_ACCELERATION, DEFAULT_SPEED_SCALE};
pub use request::{ControlPoints, CurveRequest, CurveResponse};

use tracing::{debug, instrument};

use crate::error::Result;
use crate::geodesy::LocalFrame;
use crate::geometry::BSpline;
use crate::operations::query::{ArcLength, Curvature, SpeedLimit};
use crate::tessellation::{SamplingParams, TessellateCurve};

/// Computes route curves under a fixed set of policy constants.
///
/// The pipeline holds no mutable state, so one instance can serve
/// concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct CurvePipeline {
    config: PipelineConfig,
}

impl CurvePipeline {
    /// Creates a pipeline with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidConfig` if the configuration is invalid.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Computes one curve.
    ///
    /// The local frame is anchored at the first control point. Control
    /// points are fitted with a B-spline, sampled until adjacent samples are
    /// at most `max_distance` meters apart, and annotated with cumulative
    /// distance, curvature and speed before being mapped back to latitude
    /// and longitude.
    ///
    /// # Errors
    ///
    /// Returns an `InputError` for malformed requests (including a closed
    /// curve whose sampled ends do not meet) and
    /// `ComputationError::SamplingLimit` if sampling does not converge.
    #[instrument(
        skip_all,
        fields(points = request.control.lat.len(), degree = request.desired_degree, closed = request.closed)
    )]
    pub fn execute(&self, request: &CurveRequest) -> Result<CurveResponse> {
        request.validate()?;

        let control = request.control.to_geo_points();
        let frame = LocalFrame::anchored_at(&control, self.config.ellipsoid)?;
        let local = frame.to_local(&control);

        let curve = BSpline::create(&local.xy(), request.desired_degree, request.closed)?;
        let params = SamplingParams::with_limits(
            request.max_distance,
            self.config.max_iterations,
            self.config.max_samples,
        )?;
        let polyline = TessellateCurve::new(params).execute(&curve)?;
        let points = &polyline.points;

        let policy = self.config.clamp_policy();
        let mut curvature = Curvature::new(points, request.closed).execute()?;
        let clamped_curvature = policy.clamp_curvature(&mut curvature);

        let mut speed: Vec<f64> = SpeedLimit::new(self.config.lateral_acceleration)
            .execute(&curvature)
            .into_iter()
            .map(|v| v * self.config.speed_scale)
            .collect();
        let clamped_speed = policy.clamp_speed(&mut speed);

        let distance = ArcLength::new(points).execute();
        let (lat, lon) = frame
            .to_global_2d(points)
            .into_iter()
            .map(|g| (g.lat, g.lon))
            .unzip();

        debug!(
            samples = points.len(),
            degree = curve.degree(),
            clamped_curvature,
            clamped_speed,
            "curve computed"
        );

        Ok(CurveResponse {
            degree: curve.degree(),
            lat,
            lon,
            distance,
            curvature,
            speed,
        })
    }
}
