use crate::field::distance::ray_radius;
use crate::field::grid::Field;
use crate::shape::model::{Shape, ShapeRole};

/// Unit in which boundary distances are measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryMetric {
    /// Normalized units, `1.0` = the boundary.
    #[default]
    Normalized,
    /// Pixels along the ray from the shape center; exact for circles.
    Pixel,
}

/// Boundary distance for a normalized distance `dist`.
///
/// The outer shape measures `1 - dist` (positive inside it); interior shapes measure
/// `|1 - dist|` so they pull from both sides of their boundary.
#[inline]
pub fn boundary_distance(dist: f64, role: ShapeRole) -> f64 {
    match role {
        ShapeRole::Outer => 1.0 - dist,
        ShapeRole::Interior => (1.0 - dist).abs(),
    }
}

/// Boundary distance of pixel `(x, y)` in the requested metric, given its normalized `dist`.
#[inline]
pub fn boundary_distance_in(
    shape: &Shape,
    role: ShapeRole,
    metric: BoundaryMetric,
    x: f64,
    y: f64,
    dist: f64,
) -> f64 {
    let d = boundary_distance(dist, role);
    match metric {
        BoundaryMetric::Normalized => d,
        BoundaryMetric::Pixel => d * ray_radius(shape, x, y),
    }
}

/// Apply [`boundary_distance`] to every value of a normalized distance field.
pub fn boundary_field(dist: &Field, role: ShapeRole) -> Field {
    let canvas = dist.canvas();
    let data = dist
        .as_slice()
        .iter()
        .map(|&v| boundary_distance(f64::from(v), role) as f32)
        .collect();
    Field::from_vec(canvas, data)
}

#[cfg(test)]
#[path = "../../tests/unit/field/boundary.rs"]
mod tests;
