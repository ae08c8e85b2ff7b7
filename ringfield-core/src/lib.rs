//! Ringfield renders brightness fields from nested circles and ellipses.
//!
//! A frame is described by an ordered [`ShapeSet`] (outer bound first, inner bound last) and
//! turned into a [`Field`] of scalar intensities:
//!
//! 1. **Distance**: every shape yields a normalized distance per pixel (1.0 on its boundary).
//! 2. **Boundary distance**: distances become distances-to-boundary, measured in
//!    normalized units or pixels ([`BoundaryMetric`]).
//! 3. **Mask**: only pixels inside the outer shape and outside the inner shape are kept
//!    ([`MaskMode`]).
//! 4. **Blend**: kept pixels mix the shape brightnesses, each weighted by its
//!    boundary-distance share.
//!
//! Animation is handled separately: three keyframes are interpolated into an
//! [`InterpolatedSequence`] that a driver scrubs through with an [`OffsetState`].
//!
//! The core is synchronous and pure; the only parallelism is the optional rayon row split in
//! [`render_frame_with`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod field;
mod foundation;
mod render;
mod scene;
mod shape;

pub use animation::interp::{
    DEFAULT_STEPS, InterpolatedSequence, KeyShape, ShapeSetKeyframe, build_interpolated_sequence,
};
pub use animation::offset::{DEFAULT_INTERVAL_MS, Direction, OffsetState};
pub use field::blend::{
    Weights, blend_at, blend_pixel, blend_weights, boundary_distances_at, weights_at,
};
pub use field::boundary::{BoundaryMetric, boundary_distance, boundary_distance_in, boundary_field};
pub use field::distance::{distance_field, normalized_distance, ray_radius};
pub use field::grid::{Field, FieldStats, ToneMap};
pub use field::mask::{MaskMode, RegionMask, is_valid};
pub use field::peak::peak_at;
pub use field::ring::RingGradient;
pub use foundation::core::{CanvasSize, Point};
pub use foundation::error::{FieldError, FieldResult};
pub use foundation::math::{approx_eq, lerp};
pub use render::pipeline::{
    CompositeMode, RenderOpts, RenderThreading, render_frame, render_frame_with, render_frames,
};
pub use scene::config::SceneConfig;
pub use scene::presets::{EllipseAnimation, Preset};
pub use shape::model::{RadiusSpec, Shape, ShapeRole, ShapeSet};
