use crate::error::{GeometryError, InputError, Result};
use crate::math::{linspace, Point2};

use super::{Curve, CurveDomain};

/// A planar B-spline curve on a uniform knot vector.
///
/// Open curves use a clamped knot vector and pass through their first and
/// last control points. Closed curves repeat the first `degree` control
/// points at the tail and restrict the domain so the wrap segment is not
/// traversed twice.
#[derive(Debug, Clone)]
pub struct BSpline {
    control: Vec<Point2>,
    knots: Vec<f64>,
    degree: usize,
    domain: CurveDomain,
    closed: bool,
}

impl BSpline {
    /// Builds a curve from control points.
    ///
    /// The effective degree is `min(desired_degree, control_points.len() - 1)`;
    /// a too-high degree is clamped silently. Callers that need a hard failure
    /// must compare `desired_degree` with the input size themselves.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidDegree` if `desired_degree` is zero and
    /// `InputError::TooFewPoints` if fewer than two control points are given.
    pub fn create(control_points: &[Point2], desired_degree: usize, closed: bool) -> Result<Self> {
        if desired_degree < 1 {
            return Err(InputError::InvalidDegree(desired_degree).into());
        }
        if control_points.len() < 2 {
            return Err(InputError::TooFewPoints {
                required: 2,
                actual: control_points.len(),
            }
            .into());
        }

        let degree = desired_degree.min(control_points.len() - 1);
        let mut control = control_points.to_vec();

        if closed {
            // Periodic wrap: the first `degree` points reappear at the tail.
            control.extend_from_slice(&control_points[..degree]);
        }

        let n = control.len();
        let (knots, domain) = if closed {
            let knots = linspace(0.0, 1.0, n + degree + 1);
            let domain = CurveDomain::new(knots[degree], knots[knots.len() - degree - 1]);
            (knots, domain)
        } else {
            let mut knots = vec![0.0; degree];
            knots.extend(linspace(0.0, 1.0, n - degree + 1));
            knots.extend(std::iter::repeat_n(1.0, degree));
            (knots, CurveDomain::new(0.0, 1.0))
        };

        Ok(Self {
            control,
            knots,
            degree,
            domain,
            closed,
        })
    }

    /// Returns the control points, including the wrapped tail of a closed curve.
    #[must_use]
    pub fn control(&self) -> &[Point2] {
        &self.control
    }

    /// Returns the knot vector (`control().len() + degree() + 1` entries).
    #[must_use]
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Returns the effective degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns `count` evenly spaced parameters spanning the domain.
    #[must_use]
    pub fn uniform_u(&self, count: usize) -> Vec<f64> {
        linspace(self.domain.t_min, self.domain.t_max, count)
    }

    /// Evaluates the curve at each parameter in `u`.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is `NaN`.
    pub fn evaluate_many(&self, u: &[f64]) -> Result<Vec<Point2>> {
        u.iter().map(|&t| self.evaluate(t)).collect()
    }

    /// Evaluates the curve at `count` evenly spaced parameters over its domain.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    pub fn evaluate_uniform(&self, count: usize) -> Result<Vec<Point2>> {
        self.evaluate_many(&self.uniform_u(count))
    }

    /// Index `l` of the knot span used for parameter `t`.
    ///
    /// `knots[l] <= t < knots[l + 1]`, restricted to `degree..=n - 1` so that
    /// `t` at the end of the knot vector uses the last span and values outside
    /// it extrapolate the boundary polynomial.
    fn find_span(&self, t: f64) -> usize {
        let lo = self.degree;
        let hi = self.control.len() - 1;
        lo + self.knots[lo + 1..=hi].partition_point(|&k| k <= t)
    }

    /// de Boor's algorithm on span `l`.
    fn de_boor(&self, l: usize, t: f64) -> Point2 {
        let p = self.degree;
        let mut d: Vec<Point2> = self.control[l - p..=l].to_vec();
        for r in 1..=p {
            for j in (r..=p).rev() {
                let left = self.knots[j + l - p];
                let right = self.knots[j + 1 + l - r];
                let denom = right - left;
                let alpha = if denom.abs() > 0.0 {
                    (t - left) / denom
                } else {
                    0.0
                };
                d[j] = Point2::from(d[j - 1].coords * (1.0 - alpha) + d[j].coords * alpha);
            }
        }
        d[p]
    }
}

impl Curve for BSpline {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        if t.is_nan() {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "u",
                value: t,
                min: self.domain.t_min,
                max: self.domain.t_max,
            }
            .into());
        }
        Ok(self.de_boor(self.find_span(t), t))
    }

    fn domain(&self) -> CurveDomain {
        self.domain
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
