use super::{Ellipsoid, GeoPoint, LocalFrame, LocalPath};
use crate::error::Result;

impl LocalPath {
    /// Distance from each point to its predecessor; the first entry is `0`.
    ///
    /// With `two_dim` the altitude difference is ignored, which also keeps
    /// missing (`NaN`) altitudes out of the result.
    #[must_use]
    pub fn segment_distances(&self, two_dim: bool) -> Vec<f64> {
        let points = self.points();
        let mut out = Vec::with_capacity(points.len());
        for (i, p) in points.iter().enumerate() {
            let prev = &points[i.saturating_sub(1)];
            let dx = p.x - prev.x;
            let dy = p.y - prev.y;
            let dz = if two_dim { 0.0 } else { p.z - prev.z };
            out.push((dx * dx + dy * dy + dz * dz).sqrt());
        }
        out
    }

    /// Cumulative distance along the path, starting at `0`.
    #[must_use]
    pub fn cumulative_distances(&self, two_dim: bool) -> Vec<f64> {
        let mut total = 0.0;
        self.segment_distances(two_dim)
            .into_iter()
            .map(|d| {
                total += d;
                total
            })
            .collect()
    }

    /// Total length of the path; `0` for an empty path.
    #[must_use]
    pub fn length(&self, two_dim: bool) -> f64 {
        self.segment_distances(two_dim).iter().sum()
    }

    /// Slope rate `dh/ds` per segment, with the last value repeated so the
    /// output has one entry per point.
    ///
    /// `s` is the horizontal distance. Paths with fewer than two points have
    /// no slope and return an empty vector.
    #[must_use]
    pub fn slope(&self) -> Vec<f64> {
        let points = self.points();
        if points.len() < 2 {
            return Vec::new();
        }
        let s = self.cumulative_distances(true);
        let mut rates: Vec<f64> = points
            .windows(2)
            .zip(s.windows(2))
            .map(|(p, s)| (p[1].z - p[0].z) / (s[1] - s[0]))
            .collect();
        if let Some(&last) = rates.last() {
            rates.push(last);
        }
        rates
    }

    /// Slope angle in radians, `atan(slope)`.
    #[must_use]
    pub fn slope_angle(&self) -> Vec<f64> {
        self.slope().into_iter().map(f64::atan).collect()
    }
}

/// Projects a geographic path into a frame anchored at its first point.
///
/// # Errors
///
/// Returns `InputError::ReferenceUnset` if `points` is empty.
pub fn project_path(points: &[GeoPoint], ellipsoid: Ellipsoid) -> Result<LocalPath> {
    let frame = LocalFrame::anchored_at(points, ellipsoid)?;
    Ok(frame.to_local(points))
}
