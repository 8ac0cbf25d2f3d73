use serde::{Deserialize, Serialize};

use super::Ellipsoid;
use crate::error::{InputError, Result};
use crate::math::{Point2, Point3};

/// A point on the ellipsoid: latitude and longitude in degrees, altitude in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
}

impl GeoPoint {
    /// Creates a new point.
    #[must_use]
    pub fn new(lat: f64, lon: f64, alt: f64) -> Self {
        Self { lat, lon, alt }
    }

    /// Creates a point at sea level.
    #[must_use]
    pub fn surface(lat: f64, lon: f64) -> Self {
        Self { lat, lon, alt: 0.0 }
    }

    /// Checks that latitude lies in `[-90, 90]` and longitude in `[-180, 180]`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::OutOfRange` for the first offending coordinate.
    pub fn validate(&self) -> Result<()> {
        check_range("lat", self.lat, -90.0, 90.0)?;
        check_range("lon", self.lon, -180.0, 180.0)?;
        Ok(())
    }

    /// Straight-line distance to `other` in meters.
    ///
    /// Both points are projected into a local frame anchored at `other`, so
    /// the result is only accurate for points close to each other.
    ///
    /// # Errors
    ///
    /// Returns `InputError::ReferenceUnset` if `other` has non-finite coordinates.
    pub fn distance_to(&self, other: &GeoPoint) -> Result<f64> {
        let frame = LocalFrame::new(other.lat, other.lon)?;
        let p = frame.project(self);
        let origin = Point3::new(0.0, 0.0, other.alt);
        Ok((p - origin).norm())
    }
}

pub(crate) fn check_range(parameter: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    // NaN fails both comparisons and is rejected here too.
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(InputError::OutOfRange {
            parameter,
            value,
            min,
            max,
        }
        .into())
    }
}

/// A local tangent-plane frame anchored at a reference point.
///
/// `x` points east, `y` north and `z` is the untouched altitude. Both radii of
/// curvature are evaluated at the reference latitude, which linearizes the
/// ellipsoid around the anchor: coordinates are meaningful only relative to
/// this frame and only within a few tens of kilometers of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalFrame {
    lat_ref: f64,
    lon_ref: f64,
    ellipsoid: Ellipsoid,
}

impl LocalFrame {
    /// Creates a WGS-84 frame anchored at `(lat_ref, lon_ref)` degrees.
    ///
    /// # Errors
    ///
    /// Returns `InputError::ReferenceUnset` if either reference value is not finite.
    pub fn new(lat_ref: f64, lon_ref: f64) -> Result<Self> {
        Self::with_ellipsoid(lat_ref, lon_ref, Ellipsoid::WGS84)
    }

    /// Creates a frame on a custom ellipsoid.
    ///
    /// # Errors
    ///
    /// Returns `InputError::ReferenceUnset` if either reference value is not finite.
    pub fn with_ellipsoid(lat_ref: f64, lon_ref: f64, ellipsoid: Ellipsoid) -> Result<Self> {
        if !lat_ref.is_finite() || !lon_ref.is_finite() {
            return Err(InputError::ReferenceUnset.into());
        }
        Ok(Self {
            lat_ref,
            lon_ref,
            ellipsoid,
        })
    }

    /// Creates a frame anchored at the first of `points`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::ReferenceUnset` if `points` is empty or the first
    /// point is not finite.
    pub fn anchored_at(points: &[GeoPoint], ellipsoid: Ellipsoid) -> Result<Self> {
        let first = points.first().ok_or(InputError::ReferenceUnset)?;
        Self::with_ellipsoid(first.lat, first.lon, ellipsoid)
    }

    /// Reference latitude in degrees.
    #[must_use]
    pub fn lat_ref(&self) -> f64 {
        self.lat_ref
    }

    /// Reference longitude in degrees.
    #[must_use]
    pub fn lon_ref(&self) -> f64 {
        self.lon_ref
    }

    /// The ellipsoid this frame linearizes.
    #[must_use]
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Projects a single geographic point into this frame.
    #[must_use]
    pub fn project(&self, point: &GeoPoint) -> Point3 {
        let r_ew = self.ellipsoid.prime_vertical_radius(self.lat_ref);
        let r_ns = self.ellipsoid.meridian_radius(self.lat_ref);
        let phi = point.lat.to_radians();
        let d_lambda = (point.lon - self.lon_ref).to_radians();
        let d_phi = (point.lat - self.lat_ref).to_radians();
        Point3::new(r_ew * phi.cos() * d_lambda, r_ns * d_phi, point.alt)
    }

    /// Maps a single local point back to geographic coordinates.
    #[must_use]
    pub fn unproject(&self, point: &Point3) -> GeoPoint {
        let r_ew = self.ellipsoid.prime_vertical_radius(self.lat_ref);
        let r_ns = self.ellipsoid.meridian_radius(self.lat_ref);
        let d_phi = point.y / r_ns;
        let phi = d_phi + self.lat_ref.to_radians();
        let d_lambda = point.x / (r_ew * phi.cos());
        GeoPoint::new(phi.to_degrees(), d_lambda.to_degrees() + self.lon_ref, point.z)
    }

    /// Converts geographic points into this frame.
    #[must_use]
    pub fn to_local(&self, points: &[GeoPoint]) -> LocalPath {
        LocalPath {
            frame: *self,
            points: points.iter().map(|p| self.project(p)).collect(),
        }
    }

    /// Converts local points of this frame back to geographic coordinates.
    ///
    /// This is the inverse of [`LocalFrame::to_local`].
    #[must_use]
    pub fn to_global(&self, points: &[Point3]) -> Vec<GeoPoint> {
        points.iter().map(|p| self.unproject(p)).collect()
    }

    /// Lifts planar points to sea level and converts them to geographic coordinates.
    #[must_use]
    pub fn to_global_2d(&self, points: &[Point2]) -> Vec<GeoPoint> {
        points
            .iter()
            .map(|p| self.unproject(&Point3::new(p.x, p.y, 0.0)))
            .collect()
    }
}

/// A sequence of local points together with the frame they are expressed in.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalPath {
    frame: LocalFrame,
    points: Vec<Point3>,
}

impl LocalPath {
    /// Wraps points already expressed in `frame`.
    #[must_use]
    pub fn new(frame: LocalFrame, points: Vec<Point3>) -> Self {
        Self { frame, points }
    }

    /// The frame these points are relative to.
    #[must_use]
    pub fn frame(&self) -> &LocalFrame {
        &self.frame
    }

    /// The local points.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Planar (x, y) projection of the points.
    #[must_use]
    pub fn xy(&self) -> Vec<Point2> {
        self.points.iter().map(|p| Point2::new(p.x, p.y)).collect()
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the path has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Converts the path back to geographic coordinates using its own frame.
    #[must_use]
    pub fn to_global(&self) -> Vec<GeoPoint> {
        self.frame.to_global(&self.points)
    }
}
