use crate::field::distance::normalized_distance;
use crate::shape::model::ShapeSet;

/// Max-of-Gaussians height at pixel `(x, y)`.
///
/// Each shape contributes `exp(-2 * dist^2) * brightness`; the result is the largest
/// contribution (never below 0), cut to the inside of the outer shape.
#[inline]
pub fn peak_at(shapes: &ShapeSet, x: f64, y: f64) -> f64 {
    if normalized_distance(shapes.outer(), x, y) > 1.0 {
        return 0.0;
    }
    shapes
        .shapes()
        .iter()
        .map(|s| {
            let d = normalized_distance(s, x, y);
            (-2.0 * d * d).exp() * s.brightness
        })
        .fold(0.0, f64::max)
}
