use crate::foundation::core::Point;
use crate::foundation::error::{FieldError, FieldResult};

/// Number of boundary samples used when checking that consecutive shapes nest.
const NESTING_SAMPLES: usize = 256;
const NESTING_EPS: f64 = 1e-9;

/// Radius description of one shape.
///
/// Every axis must be finite and strictly positive; [`Shape::new`] enforces it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusSpec {
    /// A circle of the given radius.
    Circle {
        /// Radius in pixels.
        radius: f64,
    },
    /// An axis-aligned ellipse.
    Ellipse {
        /// Horizontal semi-axis in pixels.
        semi_major: f64,
        /// Vertical semi-axis in pixels.
        semi_minor: f64,
    },
    /// An axis-aligned ellipse whose horizontal semi-axis differs left and right of its center.
    ///
    /// The implied boundary is discontinuous on the vertical line through the center unless
    /// both horizontal semi-axes are equal.
    AsymmetricEllipse {
        /// Horizontal semi-axis for pixels with `x < cx`.
        left_semi_major: f64,
        /// Horizontal semi-axis for pixels with `x >= cx`.
        right_semi_major: f64,
        /// Vertical semi-axis in pixels.
        semi_minor: f64,
    },
}

impl RadiusSpec {
    /// Horizontal and vertical semi-axes that apply at horizontal offset `dx` from the center.
    #[inline]
    pub fn axes_at(self, dx: f64) -> (f64, f64) {
        match self {
            Self::Circle { radius } => (radius, radius),
            Self::Ellipse {
                semi_major,
                semi_minor,
            } => (semi_major, semi_minor),
            Self::AsymmetricEllipse {
                left_semi_major,
                right_semi_major,
                semi_minor,
            } => {
                if dx < 0.0 {
                    (left_semi_major, semi_minor)
                } else {
                    (right_semi_major, semi_minor)
                }
            }
        }
    }

    fn axes(self) -> smallvec::SmallVec<[f64; 3]> {
        match self {
            Self::Circle { radius } => smallvec::smallvec![radius],
            Self::Ellipse {
                semi_major,
                semi_minor,
            } => smallvec::smallvec![semi_major, semi_minor],
            Self::AsymmetricEllipse {
                left_semi_major,
                right_semi_major,
                semi_minor,
            } => smallvec::smallvec![left_semi_major, right_semi_major, semi_minor],
        }
    }

    fn validate(self) -> FieldResult<()> {
        for axis in self.axes() {
            if !axis.is_finite() || axis <= 0.0 {
                return Err(FieldError::validation(format!(
                    "shape radius/axis must be finite and > 0, got {axis}"
                )));
            }
        }
        Ok(())
    }
}

/// Position of a shape in its set, which decides how its boundary distance is measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeRole {
    /// First shape: the outer bound of the valid region.
    Outer,
    /// Any later shape, including the innermost bound.
    Interior,
}

impl ShapeRole {
    /// Role of the shape at `index` in an outer-to-inner ordering.
    pub fn for_index(index: usize) -> Self {
        if index == 0 { Self::Outer } else { Self::Interior }
    }
}

/// One gradient source: a circle or ellipse carrying a brightness at its boundary.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Shape {
    /// Center in pixel space.
    pub center: Point,
    /// Radius description.
    pub radius: RadiusSpec,
    /// Target intensity, normally in `[0, 1]`.
    pub brightness: f64,
}

impl Shape {
    /// Build a validated shape.
    pub fn new(center: Point, radius: RadiusSpec, brightness: f64) -> FieldResult<Self> {
        let shape = Self {
            center,
            radius,
            brightness,
        };
        shape.validate()?;
        Ok(shape)
    }

    /// Circle shorthand for [`Shape::new`].
    pub fn circle(center: Point, radius: f64, brightness: f64) -> FieldResult<Self> {
        Self::new(center, RadiusSpec::Circle { radius }, brightness)
    }

    /// Ellipse shorthand for [`Shape::new`].
    pub fn ellipse(
        center: Point,
        semi_major: f64,
        semi_minor: f64,
        brightness: f64,
    ) -> FieldResult<Self> {
        Self::new(
            center,
            RadiusSpec::Ellipse {
                semi_major,
                semi_minor,
            },
            brightness,
        )
    }

    /// Left/right asymmetric ellipse shorthand for [`Shape::new`].
    pub fn asymmetric_ellipse(
        center: Point,
        left_semi_major: f64,
        right_semi_major: f64,
        semi_minor: f64,
        brightness: f64,
    ) -> FieldResult<Self> {
        Self::new(
            center,
            RadiusSpec::AsymmetricEllipse {
                left_semi_major,
                right_semi_major,
                semi_minor,
            },
            brightness,
        )
    }

    /// Check the rendering preconditions for this shape.
    pub fn validate(&self) -> FieldResult<()> {
        if !self.center.x.is_finite() || !self.center.y.is_finite() {
            return Err(FieldError::validation("shape center must be finite"));
        }
        if !self.brightness.is_finite() {
            return Err(FieldError::validation("shape brightness must be finite"));
        }
        self.radius.validate()
    }

    /// Point on this shape's boundary at angle `theta` (radians, y pointing down).
    pub fn boundary_point(&self, theta: f64) -> Point {
        let (cos, sin) = (theta.cos(), theta.sin());
        let (a, b) = self.radius.axes_at(cos);
        Point::new(self.center.x + a * cos, self.center.y + b * sin)
    }
}

/// Non-empty, outer-to-inner ordered set of validated shapes.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ShapeSet {
    shapes: Vec<Shape>,
}

impl ShapeSet {
    /// Validate and wrap `shapes`.
    ///
    /// Shapes that are not nested inside their predecessor are accepted; each such pair is
    /// reported through `tracing::warn!`.
    pub fn new(shapes: Vec<Shape>) -> FieldResult<Self> {
        if shapes.is_empty() {
            return Err(FieldError::validation(
                "shape set must contain at least 1 shape",
            ));
        }
        for (idx, shape) in shapes.iter().enumerate() {
            shape.validate().map_err(|e| {
                let detail = match e {
                    FieldError::Validation(msg) => msg,
                    other => other.to_string(),
                };
                FieldError::validation(format!("shape {idx}: {detail}"))
            })?;
        }

        let set = Self { shapes };
        for (outer, inner) in set.nesting_violations() {
            tracing::warn!(
                outer,
                inner,
                "shape boundaries intersect; blend weights will not follow nesting depth"
            );
        }
        Ok(set)
    }

    /// Shapes in outer-to-inner order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Always `false`; kept for API symmetry with [`ShapeSet::len`].
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The outer bound.
    pub fn outer(&self) -> &Shape {
        &self.shapes[0]
    }

    /// The inner bound. Same as [`ShapeSet::outer`] for one-shape sets.
    pub fn inner(&self) -> &Shape {
        &self.shapes[self.shapes.len() - 1]
    }

    /// Pairs `(i, i + 1)` where shape `i + 1` reaches outside shape `i`.
    ///
    /// Detection samples the inner boundary, so tangency can go either way.
    pub fn nesting_violations(&self) -> Vec<(usize, usize)> {
        self.shapes
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| !is_nested_within(&pair[1], &pair[0]))
            .map(|(idx, _)| (idx, idx + 1))
            .collect()
    }
}

impl<'de> serde::Deserialize<'de> for ShapeSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            shapes: Vec<Shape>,
        }

        let raw = Raw::deserialize(deserializer)?;
        ShapeSet::new(raw.shapes).map_err(serde::de::Error::custom)
    }
}

fn is_nested_within(inner: &Shape, outer: &Shape) -> bool {
    (0..NESTING_SAMPLES).all(|i| {
        let theta = std::f64::consts::TAU * (i as f64) / (NESTING_SAMPLES as f64);
        let p = inner.boundary_point(theta);
        crate::field::distance::normalized_distance(outer, p.x, p.y) <= 1.0 + NESTING_EPS
    })
}

#[cfg(test)]
#[path = "../../tests/unit/shape/model.rs"]
mod tests;
