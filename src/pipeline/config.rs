use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{InputError, Result};
use crate::geodesy::Ellipsoid;
use crate::operations::query::{ClampPolicy, DEFAULT_MAX_CURVATURE, DEFAULT_MAX_SPEED};
use crate::tessellation::{DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_SAMPLES};

/// Allowed lateral acceleration in m/s^2.
pub const DEFAULT_LATERAL_ACCELERATION: f64 = 1.73;

/// Conversion from m/s to km/h.
pub const DEFAULT_SPEED_SCALE: f64 = 3.6;

/// Policy constants for one pipeline instance.
///
/// Every field has a default, so a JSON document only needs to name the
/// values it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Ellipsoid used for the local frame.
    pub ellipsoid: Ellipsoid,
    /// Replacement for `NaN`/`+inf` curvature (1/m).
    pub max_curvature: f64,
    /// Replacement for infinite speed, in output speed units.
    pub max_speed: f64,
    /// Allowed lateral acceleration (m/s^2).
    pub lateral_acceleration: f64,
    /// Factor applied to speeds in m/s before clamping.
    pub speed_scale: f64,
    /// Upper bound on adaptive sampling passes.
    pub max_iterations: usize,
    /// Upper bound on samples per pass.
    pub max_samples: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            ellipsoid: Ellipsoid::WGS84,
            max_curvature: DEFAULT_MAX_CURVATURE,
            max_speed: DEFAULT_MAX_SPEED,
            lateral_acceleration: DEFAULT_LATERAL_ACCELERATION,
            speed_scale: DEFAULT_SPEED_SCALE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_samples: DEFAULT_MAX_SAMPLES,
        }
    }
}

impl PipelineConfig {
    /// Parses and validates a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidConfig` if the JSON is malformed or a
    /// value fails [`PipelineConfig::validate`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| InputError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidConfig` if the file cannot be read, parsed
    /// or validated.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            InputError::InvalidConfig(format!(
                "failed to read config file '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_json_str(&content)
    }

    /// Checks that every limit is positive and finite.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("ellipsoid.semi_major_axis", self.ellipsoid.semi_major_axis),
            ("max_curvature", self.max_curvature),
            ("max_speed", self.max_speed),
            ("lateral_acceleration", self.lateral_acceleration),
            ("speed_scale", self.speed_scale),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(InputError::InvalidConfig(format!(
                    "{name} must be positive and finite, got {value}"
                ))
                .into());
            }
        }
        let e = self.ellipsoid.eccentricity;
        if !(0.0..1.0).contains(&e) {
            return Err(InputError::InvalidConfig(format!(
                "ellipsoid.eccentricity must lie in [0, 1), got {e}"
            ))
            .into());
        }
        if self.max_iterations == 0 || self.max_samples < 2 {
            return Err(InputError::InvalidConfig(
                "max_iterations must be at least 1 and max_samples at least 2".to_owned(),
            )
            .into());
        }
        Ok(())
    }

    /// The curvature/speed clamp limits.
    #[must_use]
    pub fn clamp_policy(&self) -> ClampPolicy {
        ClampPolicy {
            max_curvature: self.max_curvature,
            max_speed: self.max_speed,
        }
    }
}
