pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Relative tolerance used by [`is_close`].
pub const CLOSE_RTOL: f64 = 1e-5;

/// Absolute tolerance used by [`is_close`].
pub const CLOSE_ATOL: f64 = 1e-8;

/// Loose equality: `|a - b| <= atol + rtol * |b|`.
///
/// Used where a value has been produced by a long chain of arithmetic
/// (e.g. the end point of a sampled closed curve) and exact equality
/// is not expected.
#[must_use]
pub fn is_close(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= CLOSE_ATOL + CLOSE_RTOL * b.abs()
}

/// Returns `count` evenly spaced values over `[start, end]`, both endpoints included.
#[must_use]
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count)
                .map(|i| {
                    #[allow(clippy::cast_precision_loss)]
                    let i = i as f64;
                    start + step * i
                })
                .collect();
            // Pin the last value so that rounding never leaves it short of `end`.
            values[count - 1] = end;
            values
        }
    }
}
