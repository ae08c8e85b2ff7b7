//! Normalized distance from a shape's center, where `1.0` is the shape boundary.

use crate::field::grid::Field;
use crate::foundation::core::CanvasSize;
use crate::shape::model::{RadiusSpec, Shape};

/// Normalized distance of pixel `(x, y)` from `shape`'s center.
///
/// Circles divide the euclidean distance by the radius; ellipses scale each axis by its
/// semi-axis. Asymmetric ellipses use the left semi-major axis strictly left of the center.
#[inline]
pub fn normalized_distance(shape: &Shape, x: f64, y: f64) -> f64 {
    let dx = x - shape.center.x;
    let dy = y - shape.center.y;
    match shape.radius {
        RadiusSpec::Circle { radius } => dx.hypot(dy) / radius,
        spec => {
            let (a, b) = spec.axes_at(dx);
            (dx / a).hypot(dy / b)
        }
    }
}

/// Radius of `shape` along the ray from its center through `(x, y)`, in pixels.
///
/// At the center itself the ray is undefined; the horizontal semi-axis for `x >= cx` is used.
#[inline]
pub fn ray_radius(shape: &Shape, x: f64, y: f64) -> f64 {
    let dx = x - shape.center.x;
    let dy = y - shape.center.y;
    if let RadiusSpec::Circle { radius } = shape.radius {
        return radius;
    }
    let (a, b) = shape.radius.axes_at(dx);
    let euclid = dx.hypot(dy);
    if euclid == 0.0 {
        return a;
    }
    euclid / (dx / a).hypot(dy / b)
}

/// Full-canvas normalized distance field for one shape.
pub fn distance_field(shape: &Shape, canvas: CanvasSize) -> Field {
    Field::from_fn(canvas, |x, y| normalized_distance(shape, x as f64, y as f64))
}

#[cfg(test)]
#[path = "../../tests/unit/field/distance.rs"]
mod tests;
