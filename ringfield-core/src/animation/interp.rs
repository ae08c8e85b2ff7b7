//! Keyframe interpolation for animation scrubbing.
//!
//! Three keyframes (left, center, right) expand into `2 * steps + 1` shape sets that a driver
//! indexes by an integer offset in `[-steps, steps]`.

use crate::foundation::core::Point;
use crate::foundation::error::{FieldError, FieldResult};
use crate::foundation::math::lerp_trunc_i32;
use crate::shape::model::{Shape, ShapeSet};

/// Steps per side used by the stock ellipse animation.
pub const DEFAULT_STEPS: usize = 15;

/// Integral parameters of one ellipse within a keyframe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct KeyShape {
    /// Center offset in pixels, relative to the driver's origin.
    pub center: (i32, i32),
    /// Horizontal semi-axis in pixels.
    pub semi_major: i32,
    /// Vertical semi-axis in pixels.
    pub semi_minor: i32,
    /// Free-form per-shape tag carried along with the axes.
    pub aux_tag: i32,
}

impl KeyShape {
    /// Shorthand constructor.
    pub const fn new(center: (i32, i32), semi_major: i32, semi_minor: i32, aux_tag: i32) -> Self {
        Self {
            center,
            semi_major,
            semi_minor,
            aux_tag,
        }
    }

    fn lerp(a: &Self, b: &Self, step: usize, steps: usize) -> Self {
        let f = |x: i32, y: i32| lerp_trunc_i32(x, y, step, steps);
        Self {
            center: (f(a.center.0, b.center.0), f(a.center.1, b.center.1)),
            semi_major: f(a.semi_major, b.semi_major),
            semi_minor: f(a.semi_minor, b.semi_minor),
            aux_tag: f(a.aux_tag, b.aux_tag),
        }
    }
}

/// An ordered shape-set configuration at one named animation position.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawKeyframe")]
pub struct ShapeSetKeyframe {
    pub(crate) shapes: Vec<KeyShape>,
}

#[derive(serde::Deserialize)]
struct RawKeyframe {
    shapes: Vec<KeyShape>,
}

impl TryFrom<RawKeyframe> for ShapeSetKeyframe {
    type Error = FieldError;

    fn try_from(raw: RawKeyframe) -> FieldResult<Self> {
        Self::new(raw.shapes)
    }
}

impl ShapeSetKeyframe {
    /// Build a keyframe; at least one shape is required.
    pub fn new(shapes: Vec<KeyShape>) -> FieldResult<Self> {
        if shapes.is_empty() {
            return Err(FieldError::interpolation(
                "keyframe must contain at least 1 shape",
            ));
        }
        Ok(Self { shapes })
    }

    /// Shapes in order.
    pub fn shapes(&self) -> &[KeyShape] {
        &self.shapes
    }

    /// Shape at `index`.
    pub fn shape(&self, index: usize) -> Option<&KeyShape> {
        self.shapes.get(index)
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Always `false` for a constructed keyframe.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Resolve into drawable ellipses offset by `origin`, one brightness per shape.
    pub fn to_shape_set(&self, origin: Point, brightness: &[f64]) -> FieldResult<ShapeSet> {
        if brightness.len() != self.shapes.len() {
            return Err(FieldError::validation(format!(
                "keyframe has {} shapes but {} brightness values were given",
                self.shapes.len(),
                brightness.len()
            )));
        }
        let shapes = self
            .shapes
            .iter()
            .zip(brightness)
            .map(|(k, &b)| {
                let center = Point::new(
                    origin.x + f64::from(k.center.0),
                    origin.y + f64::from(k.center.1),
                );
                Shape::ellipse(center, f64::from(k.semi_major), f64::from(k.semi_minor), b)
            })
            .collect::<FieldResult<Vec<_>>>()?;
        ShapeSet::new(shapes)
    }
}

/// `2 * steps + 1` keyframes addressed by offset in `[-steps, steps]`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct InterpolatedSequence {
    steps: usize,
    frames: Vec<ShapeSetKeyframe>,
}

impl InterpolatedSequence {
    /// Steps per side.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Every keyframe in array order.
    pub fn frames(&self) -> &[ShapeSetKeyframe] {
        &self.frames
    }

    /// Number of keyframes, always `2 * steps + 1`.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Array index for `offset`, or `None` when it is outside `[-steps, steps]`.
    pub fn index_of(&self, offset: i32) -> Option<usize> {
        let idx = i64::from(offset) + self.steps as i64;
        if idx < 0 || idx >= self.frames.len() as i64 {
            return None;
        }
        Some(idx as usize)
    }

    /// Keyframe at animation `offset`.
    pub fn at_offset(&self, offset: i32) -> Option<&ShapeSetKeyframe> {
        self.index_of(offset).map(|i| &self.frames[i])
    }
}

/// Expand three keyframes into an [`InterpolatedSequence`].
///
/// For `i` in `0..steps` the left half holds `lerp(left, center, i / (steps - 1))`, then
/// `center` itself, then `lerp(center, right, i / (steps - 1))`. Every numeric field is
/// interpolated on its own and truncated toward zero.
#[tracing::instrument(skip(left, center, right))]
pub fn build_interpolated_sequence(
    left: &ShapeSetKeyframe,
    center: &ShapeSetKeyframe,
    right: &ShapeSetKeyframe,
    steps: usize,
) -> FieldResult<InterpolatedSequence> {
    if steps < 2 {
        return Err(FieldError::interpolation(format!(
            "steps per side must be >= 2, got {steps}"
        )));
    }
    if left.len() != center.len() || right.len() != center.len() {
        return Err(FieldError::interpolation(format!(
            "keyframes disagree on shape count: left {}, center {}, right {}",
            left.len(),
            center.len(),
            right.len()
        )));
    }

    let mut frames = Vec::with_capacity(2 * steps + 1);
    frames.extend((0..steps).map(|i| interpolate(left, center, i, steps)));
    frames.push(center.clone());
    frames.extend((0..steps).map(|i| interpolate(center, right, i, steps)));

    tracing::debug!(frames = frames.len(), "built interpolated sequence");
    Ok(InterpolatedSequence { steps, frames })
}

fn interpolate(
    a: &ShapeSetKeyframe,
    b: &ShapeSetKeyframe,
    step: usize,
    steps: usize,
) -> ShapeSetKeyframe {
    ShapeSetKeyframe {
        shapes: a
            .shapes
            .iter()
            .zip(&b.shapes)
            .map(|(sa, sb)| KeyShape::lerp(sa, sb, step, steps))
            .collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
