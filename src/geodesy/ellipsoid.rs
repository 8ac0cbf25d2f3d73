use serde::{Deserialize, Serialize};

/// Reference ellipsoid parameters.
///
/// Radii are evaluated from the semi-major axis and first eccentricity; the
/// semi-minor axis is derived rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// Semi-major axis (meters).
    pub semi_major_axis: f64,
    /// First eccentricity (dimensionless).
    pub eccentricity: f64,
}

impl Ellipsoid {
    /// The WGS-84 reference ellipsoid.
    pub const WGS84: Self = Self {
        semi_major_axis: 6_378_137.0,
        eccentricity: 0.081_819_190_842_622,
    };

    /// Creates an ellipsoid from its semi-major axis and first eccentricity.
    #[must_use]
    pub const fn new(semi_major_axis: f64, eccentricity: f64) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
        }
    }

    /// First eccentricity squared.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.eccentricity * self.eccentricity
    }

    /// Semi-minor axis: `a * sqrt(1 - e^2)`.
    #[must_use]
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity_squared()).sqrt()
    }

    /// Mean radius `(2a + b) / 3`.
    #[must_use]
    pub fn mean_radius(&self) -> f64 {
        (2.0 * self.semi_major_axis + self.semi_minor_axis()) / 3.0
    }

    /// Radius of curvature in the prime vertical (west-east) at `lat` degrees.
    ///
    /// `R_ew = a / sqrt(1 - e^2 sin^2(lat))`
    #[must_use]
    pub fn prime_vertical_radius(&self, lat: f64) -> f64 {
        let sin_phi = lat.to_radians().sin();
        self.semi_major_axis / (1.0 - self.eccentricity_squared() * sin_phi * sin_phi).sqrt()
    }

    /// Radius of curvature in the meridian (north-south) at `lat` degrees.
    ///
    /// `R_ns = (1 - e^2) / a^2 * R_ew^3`
    #[must_use]
    pub fn meridian_radius(&self, lat: f64) -> f64 {
        let a = self.semi_major_axis;
        (1.0 - self.eccentricity_squared()) / (a * a) * self.prime_vertical_radius(lat).powi(3)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}
