use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::field::grid::Field;
use crate::foundation::core::CanvasSize;
use crate::foundation::error::{FieldError, FieldResult};
use crate::render::pipeline::{RenderOpts, render_frame_with};
use crate::shape::model::{Shape, ShapeSet};

/// JSON-facing description of one frame: canvas, ordered shapes and render options.
///
/// ```json
/// {
///   "canvas": { "height": 480, "width": 640 },
///   "shapes": [
///     { "center": { "x": 320, "y": 240 }, "radius": { "circle": { "radius": 150 } }, "brightness": 0.9 },
///     { "center": { "x": 340, "y": 260 }, "radius": { "circle": { "radius": 110 } }, "brightness": 0.1 }
///   ],
///   "opts": { "metric": "pixel" }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawScene")]
pub struct SceneConfig {
    /// Canvas size.
    pub canvas: CanvasSize,
    /// Outer-to-inner shapes.
    #[serde(serialize_with = "serialize_shapes")]
    pub shapes: ShapeSet,
    /// Render options.
    pub opts: RenderOpts,
}

#[derive(serde::Deserialize)]
struct RawScene {
    canvas: CanvasSize,
    shapes: Vec<Shape>,
    #[serde(default)]
    opts: RenderOpts,
}

impl TryFrom<RawScene> for SceneConfig {
    type Error = FieldError;

    fn try_from(raw: RawScene) -> FieldResult<Self> {
        let canvas = CanvasSize::new(raw.canvas.height, raw.canvas.width)?;
        let shapes = ShapeSet::new(raw.shapes)?;
        Ok(Self {
            canvas,
            shapes,
            opts: raw.opts,
        })
    }
}

fn serialize_shapes<S>(shapes: &ShapeSet, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serde::Serialize::serialize(shapes.shapes(), s)
}

impl SceneConfig {
    /// Parse a scene from JSON text.
    pub fn from_json_str(s: &str) -> FieldResult<Self> {
        serde_json::from_str(s).map_err(|e| FieldError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FieldResult<Self> {
        serde_json::from_reader(r).map_err(|e| FieldError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FieldResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FieldError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize back to pretty JSON.
    pub fn to_json_pretty(&self) -> FieldResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FieldError::serde(e.to_string()))
    }

    /// Render this scene with its own options.
    pub fn render(&self) -> FieldResult<Field> {
        render_frame_with(&self.shapes, self.canvas, &self.opts)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
