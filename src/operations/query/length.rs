use crate::math::Point2;

/// Computes the cumulative arc length along a polyline.
pub struct ArcLength<'a> {
    points: &'a [Point2],
}

impl<'a> ArcLength<'a> {
    /// Creates a new `ArcLength` query.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the query, returning one cumulative distance per vertex.
    ///
    /// The first entry is `0` and each following entry adds the Euclidean
    /// distance to the previous vertex, so the result is non-decreasing.
    /// An empty polyline yields an empty vector.
    #[must_use]
    pub fn execute(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.points.len());
        if self.points.is_empty() {
            return out;
        }
        let mut total = 0.0;
        out.push(total);
        for w in self.points.windows(2) {
            total += (w[1] - w[0]).norm();
            out.push(total);
        }
        out
    }

    /// Total length of the polyline.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_length_3_4_5() {
        let pts = [Point2::new(0.0, 0.0), Point2::new(3.0, 4.0)];
        let s = ArcLength::new(&pts).execute();
        assert_eq!(s.len(), 2);
        assert!(s[0].abs() < f64::EPSILON);
        assert!((s[1] - 5.0).abs() < 1e-10);
        assert!((ArcLength::new(&pts).total() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn cumulative_over_square_edges() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let s = ArcLength::new(&pts).execute();
        assert_eq!(s, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn repeated_points_add_nothing() {
        let pts = [Point2::new(2.0, 2.0); 3];
        assert_eq!(ArcLength::new(&pts).execute(), vec![0.0; 3]);
    }

    #[test]
    fn empty_polyline() {
        assert!(ArcLength::new(&[]).execute().is_empty());
        assert!(ArcLength::new(&[Point2::new(1.0, 1.0)]).total().abs() < f64::EPSILON);
    }
}
