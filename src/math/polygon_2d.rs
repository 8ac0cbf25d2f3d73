use super::Point2;

/// Signed area of the triangle `(a, b, c)`.
///
/// Positive when `a -> b -> c` turns left.
#[must_use]
pub fn triangle_signed_area(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    0.5 * (a.x * b.y - b.x * a.y + b.x * c.y - c.x * b.y + c.x * a.y - a.x * c.y)
}

/// Curvature of the circle through `a`, `b` and `c` (Menger curvature).
///
/// `4 * area / (|ab| * |bc| * |ca|)`, signed by the turn direction at `b`.
/// Collinear points give `0`, coincident points give a non-finite value
/// (`NaN` or `±inf`) which callers are expected to clamp.
#[must_use]
pub fn menger_curvature(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let f = (a - b).norm();
    let g = (b - c).norm();
    let h = (c - a).norm();
    4.0 * triangle_signed_area(a, b, c) / (f * g * h)
}
