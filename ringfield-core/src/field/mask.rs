use crate::field::distance::normalized_distance;
use crate::foundation::core::CanvasSize;
use crate::shape::model::ShapeSet;

/// Which pixels take part in the blend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskMode {
    /// Inside the outer shape and outside (or on) the inner shape.
    ///
    /// A lone shape is its own inner bound, so only its boundary pixels qualify.
    #[default]
    Ring,
    /// Inside the outer shape; the inner shape only contributes weight.
    Filled,
}

/// Pixel membership test from the outer and inner normalized distances.
#[inline]
pub fn is_valid(dist_outer: f64, dist_inner: f64, mode: MaskMode) -> bool {
    match mode {
        MaskMode::Ring => dist_outer <= 1.0 && dist_inner >= 1.0,
        MaskMode::Filled => dist_outer <= 1.0,
    }
}

/// Per-pixel validity for one shape set on one canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionMask {
    canvas: CanvasSize,
    valid: Vec<bool>,
}

impl RegionMask {
    /// Evaluate the mask of `shapes` over `canvas`.
    pub fn build(shapes: &ShapeSet, canvas: CanvasSize, mode: MaskMode) -> Self {
        let (outer, inner) = (shapes.outer(), shapes.inner());
        let mut valid = Vec::with_capacity(canvas.pixel_count());
        for y in 0..canvas.height {
            for x in 0..canvas.width {
                let (px, py) = (f64::from(x), f64::from(y));
                let d_outer = normalized_distance(outer, px, py);
                let d_inner = normalized_distance(inner, px, py);
                valid.push(is_valid(d_outer, d_inner, mode));
            }
        }
        Self { canvas, valid }
    }

    /// Whether pixel `(x, y)` is inside the valid region.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        if x >= self.canvas.width || y >= self.canvas.height {
            return false;
        }
        self.valid[(y as usize) * (self.canvas.width as usize) + (x as usize)]
    }

    /// Number of valid pixels.
    pub fn count(&self) -> usize {
        self.valid.iter().filter(|v| **v).count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/mask.rs"]
mod tests;
