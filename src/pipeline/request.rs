use serde::{Deserialize, Serialize};

use crate::error::{InputError, Result};
use crate::geodesy::{check_range, GeoPoint};

/// Control points as parallel latitude/longitude arrays in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPoints {
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
}

impl ControlPoints {
    /// Checks array lengths and coordinate ranges.
    ///
    /// # Errors
    ///
    /// Returns `InputError::LengthMismatch`, `InputError::TooFewPoints` or
    /// `InputError::OutOfRange`.
    pub fn validate(&self) -> Result<()> {
        if self.lat.len() != self.lon.len() {
            return Err(InputError::LengthMismatch {
                first: "lat",
                second: "lon",
                first_len: self.lat.len(),
                second_len: self.lon.len(),
            }
            .into());
        }
        if self.lat.len() < 2 {
            return Err(InputError::TooFewPoints {
                required: 2,
                actual: self.lat.len(),
            }
            .into());
        }
        for (&lat, &lon) in self.lat.iter().zip(&self.lon) {
            check_range("lat", lat, -90.0, 90.0)?;
            check_range("lon", lon, -180.0, 180.0)?;
        }
        Ok(())
    }

    /// The control points at sea level.
    #[must_use]
    pub fn to_geo_points(&self) -> Vec<GeoPoint> {
        self.lat
            .iter()
            .zip(&self.lon)
            .map(|(&lat, &lon)| GeoPoint::surface(lat, lon))
            .collect()
    }
}

/// Input of one curve computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveRequest {
    pub control: ControlPoints,
    pub desired_degree: usize,
    pub closed: bool,
    /// Maximum distance between adjacent output samples, in meters.
    pub max_distance: f64,
}

impl CurveRequest {
    /// Checks the request shape before any computation.
    ///
    /// # Errors
    ///
    /// Returns the first `InputError` found.
    pub fn validate(&self) -> Result<()> {
        self.control.validate()?;
        if self.desired_degree < 1 {
            return Err(InputError::InvalidDegree(self.desired_degree).into());
        }
        if !(self.max_distance.is_finite() && self.max_distance > 0.0) {
            return Err(InputError::NonPositiveMaxDistance(self.max_distance).into());
        }
        Ok(())
    }
}

/// Result of one curve computation; all arrays have one entry per sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveResponse {
    /// Degree actually used, after clamping to the control point count.
    pub degree: usize,
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    /// Cumulative arc length in meters, starting at `0`.
    pub distance: Vec<f64>,
    /// Signed curvature in 1/m.
    pub curvature: Vec<f64>,
    /// Speed bound in the configured output unit.
    pub speed: Vec<f64>,
}

impl CurveResponse {
    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lat.len()
    }

    /// Returns `true` if the response has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lat.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::LinedrawError;

    fn request() -> CurveRequest {
        CurveRequest {
            control: ControlPoints {
                lat: vec![47.0, 47.01],
                lon: vec![8.0, 8.01],
            },
            desired_degree: 3,
            closed: false,
            max_distance: 10.0,
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn length_mismatch() {
        let mut req = request();
        req.control.lon.push(8.02);
        let err = req.validate().unwrap_err();
        assert!(matches!(
            err,
            LinedrawError::Input(InputError::LengthMismatch {
                first_len: 2,
                second_len: 3,
                ..
            })
        ));
    }

    #[test]
    fn too_few_points() {
        let mut req = request();
        req.control.lat.truncate(1);
        req.control.lon.truncate(1);
        assert!(matches!(
            req.validate().unwrap_err(),
            LinedrawError::Input(InputError::TooFewPoints { actual: 1, .. })
        ));
    }

    #[test]
    fn zero_degree() {
        let mut req = request();
        req.desired_degree = 0;
        assert!(matches!(
            req.validate().unwrap_err(),
            LinedrawError::Input(InputError::InvalidDegree(0))
        ));
    }

    #[test]
    fn non_positive_max_distance() {
        let mut req = request();
        req.max_distance = 0.0;
        assert!(req.validate().is_err());
        req.max_distance = f64::NAN;
        assert!(req.validate().is_err());
    }

    #[test]
    fn latitude_out_of_range() {
        let mut req = request();
        req.control.lat[1] = 95.0;
        assert!(matches!(
            req.validate().unwrap_err(),
            LinedrawError::Input(InputError::OutOfRange { parameter: "lat", .. })
        ));
    }

    #[test]
    fn decodes_wire_format() {
        let json = r#"{
            "control": {"lat": [0.0, 1.0], "lon": [0.0, 1.0]},
            "desired_degree": 1,
            "closed": false,
            "max_distance": 1000.0
        }"#;
        let req: CurveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.desired_degree, 1);
        assert_eq!(req.control.to_geo_points().len(), 2);
    }
}
