use crate::error::{InputError, Result};
use crate::math::polygon_2d::menger_curvature;
use crate::math::{is_close, Point2};

/// Computes the discrete (Menger) curvature at every vertex of a polyline.
///
/// For each vertex `b` with neighbours `a` and `c` the curvature is
/// `4 * signed_area(a, b, c) / (|ab| * |bc| * |ca|)`: positive for a left
/// turn, `0` on a straight run, and non-finite where neighbours coincide.
///
/// - Open polylines: interior vertices `1..n-1` are computed and each
///   endpoint copies its neighbour.
/// - Closed polylines: the last vertex must repeat the first; it is dropped,
///   neighbours wrap around, and its entry copies the first one.
pub struct Curvature<'a> {
    points: &'a [Point2],
    closed: bool,
}

impl<'a> Curvature<'a> {
    /// Creates a new `Curvature` query.
    #[must_use]
    pub fn new(points: &'a [Point2], closed: bool) -> Self {
        Self { points, closed }
    }

    /// Executes the query, returning one curvature value per vertex.
    ///
    /// Open polylines with fewer than three vertices yield zeros. Closed
    /// polylines are always computed; too few distinct vertices give
    /// non-finite values for `ClampPolicy` to replace.
    ///
    /// # Errors
    ///
    /// Returns `InputError::ClosedCurveMismatch` for a closed polyline whose
    /// first and last vertices differ.
    pub fn execute(&self) -> Result<Vec<f64>> {
        if self.closed {
            self.closed_curvature()
        } else {
            Ok(self.open_curvature())
        }
    }

    fn open_curvature(&self) -> Vec<f64> {
        let pts = self.points;
        let n = pts.len();
        let mut c = vec![0.0; n];
        if n < 3 {
            return c;
        }
        for i in 1..n - 1 {
            c[i] = menger_curvature(&pts[i - 1], &pts[i], &pts[i + 1]);
        }
        c[0] = c[1];
        c[n - 1] = c[n - 2];
        c
    }

    fn closed_curvature(&self) -> Result<Vec<f64>> {
        let pts = self.points;
        let n = pts.len();
        let mut c = vec![0.0; n];
        let (Some(first), Some(last)) = (pts.first(), pts.last()) else {
            return Ok(c);
        };
        if !(is_close(last.x, first.x) && is_close(last.y, first.y)) {
            return Err(InputError::ClosedCurveMismatch.into());
        }

        // Drop the repeated end point and wrap around the rest.
        let m = n - 1;
        for i in 0..m {
            let a = &pts[(i + m - 1) % m];
            let c_pt = &pts[(i + 1) % m];
            c[i] = menger_curvature(a, &pts[i], c_pt);
        }
        c[m] = c[0];
        Ok(c)
    }
}
