//! Inverse-proximity blending of per-shape brightness.
//!
//! Every valid pixel gets `sum(b_i * d_i) / sum(d_i)` where `d_i` is the pixel's boundary
//! distance to shape `i`. A pixel on shape `i`'s boundary has `d_i = 0`, so shape `i`
//! contributes nothing there and its neighbours take over. For two concentric circles
//! measured in pixels this is plain linear interpolation along the radius, with each
//! boundary showing the *other* shape's brightness.

use smallvec::SmallVec;

use crate::field::boundary::{BoundaryMetric, boundary_distance_in};
use crate::field::distance::normalized_distance;
use crate::field::mask::{MaskMode, is_valid};
use crate::shape::model::{ShapeRole, ShapeSet};

/// Per-pixel scratch vector; inline storage covers the usual 2 to 5 shapes.
pub type Weights = SmallVec<[f64; 8]>;

/// Normalize boundary distances into weights summing to 1.
///
/// When every distance is 0 the weights are NaN.
pub fn blend_weights(distances: &[f64]) -> Weights {
    let total: f64 = distances.iter().sum();
    distances.iter().map(|d| d / total).collect()
}

/// Weighted sum of `brightness` using [`blend_weights`] of `distances`.
///
/// # Panics
/// When the slices differ in length.
pub fn blend_pixel(distances: &[f64], brightness: &[f64]) -> f64 {
    assert_eq!(
        distances.len(),
        brightness.len(),
        "one brightness per boundary distance"
    );
    blend_weights(distances)
        .iter()
        .zip(brightness)
        .map(|(w, b)| w * b)
        .sum()
}

/// Boundary distances of pixel `(x, y)` to every shape, or `None` outside the valid region.
pub fn boundary_distances_at(
    shapes: &ShapeSet,
    x: f64,
    y: f64,
    metric: BoundaryMetric,
    mask: MaskMode,
) -> Option<Weights> {
    let all = shapes.shapes();
    let last = all.len() - 1;

    // The outer and inner distances decide membership; skip the rest when invalid.
    let d_outer = normalized_distance(&all[0], x, y);
    let d_inner = if last == 0 {
        d_outer
    } else {
        normalized_distance(&all[last], x, y)
    };
    if !is_valid(d_outer, d_inner, mask) {
        return None;
    }

    let ds = all
        .iter()
        .enumerate()
        .map(|(idx, shape)| {
            let dist = if idx == 0 {
                d_outer
            } else if idx == last {
                d_inner
            } else {
                normalized_distance(shape, x, y)
            };
            boundary_distance_in(shape, ShapeRole::for_index(idx), metric, x, y, dist)
        })
        .collect();
    Some(ds)
}

/// Per-shape weights at pixel `(x, y)`, or `None` outside the valid region.
pub fn weights_at(
    shapes: &ShapeSet,
    x: f64,
    y: f64,
    metric: BoundaryMetric,
    mask: MaskMode,
) -> Option<Weights> {
    boundary_distances_at(shapes, x, y, metric, mask).map(|ds| blend_weights(&ds))
}

/// Blended brightness at pixel `(x, y)`; `0.0` outside the valid region.
#[inline]
pub fn blend_at(
    shapes: &ShapeSet,
    x: f64,
    y: f64,
    metric: BoundaryMetric,
    mask: MaskMode,
) -> f64 {
    match boundary_distances_at(shapes, x, y, metric, mask) {
        Some(ds) => {
            let weights = blend_weights(&ds);
            weights
                .iter()
                .zip(shapes.shapes())
                .map(|(w, s)| w * s.brightness)
                .sum()
        }
        None => 0.0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/blend.rs"]
mod tests;
