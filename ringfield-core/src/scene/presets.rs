//! Built-in scenes.
//!
//! Every preset is a plain [`SceneConfig`]; the animated one additionally carries the three
//! keyframes it interpolates between.

use std::fmt;
use std::str::FromStr;

use crate::animation::interp::{
    DEFAULT_STEPS, InterpolatedSequence, KeyShape, ShapeSetKeyframe, build_interpolated_sequence,
};
use crate::field::boundary::BoundaryMetric;
use crate::field::grid::ToneMap;
use crate::field::ring::RingGradient;
use crate::foundation::core::{CanvasSize, Point};
use crate::foundation::error::{FieldError, FieldResult};
use crate::render::pipeline::{CompositeMode, RenderOpts};
use crate::scene::config::SceneConfig;
use crate::shape::model::{Shape, ShapeSet};

const STILL_CANVAS: CanvasSize = CanvasSize {
    height: 480,
    width: 640,
};
const STILL_CENTER: Point = Point::new(320.0, 240.0);
const FIVE_BRIGHTNESS: [f64; 5] = [0.9, 0.7, 0.5, 0.3, 0.1];
const FIVE_OFFSETS: [f64; 5] = [0.0, 10.0, 15.0, 20.0, 25.0];

/// Named built-in scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Concentric ring fading from 0.3 at r=120 to black at r=150.
    GradientRing,
    /// Bright outer circle with an off-center dark inner circle.
    EccentricRing,
    /// Three progressively shifted circles.
    TripleEccentricRings,
    /// Five progressively shifted ellipses.
    QuintupleEccentricEllipses,
    /// Five shifted ellipses whose left half is wider than the right.
    QuintupleAsymmetricEllipses,
    /// Peak-composited ellipses driven by an animation offset.
    EllipseAnimation,
}

impl Preset {
    /// Every preset, in listing order.
    pub const ALL: [Self; 6] = [
        Self::GradientRing,
        Self::EccentricRing,
        Self::TripleEccentricRings,
        Self::QuintupleEccentricEllipses,
        Self::QuintupleAsymmetricEllipses,
        Self::EllipseAnimation,
    ];

    /// Kebab-case name accepted by [`Preset::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Self::GradientRing => "gradient-ring",
            Self::EccentricRing => "eccentric-ring",
            Self::TripleEccentricRings => "triple-eccentric-rings",
            Self::QuintupleEccentricEllipses => "quintuple-eccentric-ellipses",
            Self::QuintupleAsymmetricEllipses => "quintuple-asymmetric-ellipses",
            Self::EllipseAnimation => "ellipse-animation",
        }
    }

    /// Whether [`Preset::scene_at`] accepts offsets other than 0.
    pub fn is_animated(self) -> bool {
        matches!(self, Self::EllipseAnimation)
    }

    /// How this preset's output maps to gray levels.
    pub fn tone_map(self) -> ToneMap {
        match self {
            Self::EllipseAnimation => ToneMap::Direct,
            _ => ToneMap::Unit,
        }
    }

    /// The direct radial profile, for the one preset that has it.
    pub fn ring(self) -> Option<RingGradient> {
        match self {
            Self::GradientRing => RingGradient::fading(STILL_CENTER, 120.0, 150.0, 0.3).ok(),
            _ => None,
        }
    }

    /// Scene at animation offset 0.
    pub fn scene(self) -> FieldResult<SceneConfig> {
        self.scene_at(0)
    }

    /// Scene at animation `offset`. Still presets only accept 0.
    pub fn scene_at(self, offset: i32) -> FieldResult<SceneConfig> {
        if !self.is_animated() && offset != 0 {
            return Err(FieldError::validation(format!(
                "preset '{}' is not animated; offset must be 0, got {offset}",
                self.name()
            )));
        }
        let pixel = RenderOpts {
            metric: BoundaryMetric::Pixel,
            ..RenderOpts::default()
        };
        let (shapes, opts) = match self {
            // Pixel distances make the two-circle blend linear in the radius.
            Self::GradientRing => (
                vec![
                    Shape::circle(STILL_CENTER, 150.0, 0.3)?,
                    Shape::circle(STILL_CENTER, 120.0, 0.0)?,
                ],
                pixel,
            ),
            Self::EccentricRing => (
                vec![
                    Shape::circle(STILL_CENTER, 150.0, 0.9)?,
                    Shape::circle(Point::new(350.0, 260.0), 100.0, 0.1)?,
                ],
                pixel,
            ),
            Self::TripleEccentricRings => (
                vec![
                    Shape::circle(STILL_CENTER, 150.0, 0.9)?,
                    Shape::circle(Point::new(340.0, 260.0), 110.0, 0.7)?,
                    Shape::circle(Point::new(345.0, 265.0), 70.0, 0.1)?,
                ],
                pixel,
            ),
            Self::QuintupleEccentricEllipses => {
                let axes = [
                    (150.0, 120.0),
                    (120.0, 100.0),
                    (90.0, 75.0),
                    (60.0, 50.0),
                    (30.0, 25.0),
                ];
                let shapes = axes
                    .iter()
                    .zip(FIVE_OFFSETS)
                    .zip(FIVE_BRIGHTNESS)
                    .map(|((&(a, b), off), v)| Shape::ellipse(shifted(off), a, b, v))
                    .collect::<FieldResult<Vec<_>>>()?;
                (shapes, RenderOpts::default())
            }
            Self::QuintupleAsymmetricEllipses => {
                let axes = [
                    (180.0, 120.0, 120.0),
                    (150.0, 100.0, 100.0),
                    (120.0, 80.0, 75.0),
                    (90.0, 60.0, 50.0),
                    (60.0, 40.0, 25.0),
                ];
                let shapes = axes
                    .iter()
                    .zip(FIVE_OFFSETS)
                    .zip(FIVE_BRIGHTNESS)
                    .map(|((&(l, r, b), off), v)| {
                        Shape::asymmetric_ellipse(shifted(off), l, r, b, v)
                    })
                    .collect::<FieldResult<Vec<_>>>()?;
                (shapes, RenderOpts::default())
            }
            Self::EllipseAnimation => {
                let anim = EllipseAnimation::stock();
                let seq = anim.sequence()?;
                return anim.scene_at(&seq, offset);
            }
        };
        Ok(SceneConfig {
            canvas: STILL_CANVAS,
            shapes: ShapeSet::new(shapes)?,
            opts,
        })
    }
}

fn shifted(by: f64) -> Point {
    Point::new(STILL_CENTER.x + by, STILL_CENTER.y + by)
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = FieldError;

    fn from_str(s: &str) -> FieldResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|p| p.name()).collect();
                FieldError::validation(format!(
                    "unknown preset '{s}', expected one of: {}",
                    names.join(", ")
                ))
            })
    }
}

/// Keyframes and drawing parameters of the animated ellipse scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EllipseAnimation {
    /// Keyframe at offset `-steps`.
    pub left: ShapeSetKeyframe,
    /// Keyframe at offset 0.
    pub center: ShapeSetKeyframe,
    /// Keyframe at offset `steps`.
    pub right: ShapeSetKeyframe,
    /// Steps per side.
    pub steps: usize,
    /// Pixel position that keyframe centers are relative to.
    pub origin: Point,
    /// Peak height per shape, outer to inner, in gray levels.
    pub values: Vec<f64>,
    /// Canvas size.
    pub canvas: CanvasSize,
}

impl EllipseAnimation {
    /// The stock five-ellipse animation: shapes drift apart horizontally as the offset grows.
    pub fn stock() -> Self {
        // (semi_major, semi_minor, aux_tag), outer to inner.
        const AXES: [(i32, i32, i32); 5] =
            [(150, 36, 5), (120, 28, 4), (90, 20, 3), (60, 16, 2), (25, 12, 1)];
        const SPREAD: [i32; 5] = [10, 20, 30, 40, 50];

        let frame = |sign: i32| {
            let shapes = AXES
                .iter()
                .zip(SPREAD)
                .map(|(&(a, b, tag), dx)| KeyShape::new((sign * dx, 0), a, b, tag))
                .collect();
            ShapeSetKeyframe { shapes }
        };

        Self {
            left: frame(-1),
            center: frame(0),
            right: frame(1),
            steps: DEFAULT_STEPS,
            origin: Point::new(460.0, 240.0),
            values: vec![3.0, 10.0, 130.0, 180.0, 200.0],
            canvas: CanvasSize {
                height: 800,
                width: 1000,
            },
        }
    }

    /// Interpolate the keyframes.
    pub fn sequence(&self) -> FieldResult<InterpolatedSequence> {
        build_interpolated_sequence(&self.left, &self.center, &self.right, self.steps)
    }

    /// Peak-composited scene for `offset` within `seq`.
    pub fn scene_at(&self, seq: &InterpolatedSequence, offset: i32) -> FieldResult<SceneConfig> {
        let frame = seq.at_offset(offset).ok_or_else(|| {
            FieldError::validation(format!(
                "offset {offset} outside [-{steps}, {steps}]",
                steps = seq.steps()
            ))
        })?;
        Ok(SceneConfig {
            canvas: self.canvas,
            shapes: frame.to_shape_set(self.origin, &self.values)?,
            opts: RenderOpts {
                mode: CompositeMode::Peak,
                ..RenderOpts::default()
            },
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/presets.rs"]
mod tests;
