use crate::foundation::error::{FieldError, FieldResult};

pub use kurbo::Point;

/// Canvas dimensions in pixels, stored `height` first like the fields it sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    /// Number of pixel rows.
    pub height: u32,
    /// Number of pixel columns.
    pub width: u32,
}

impl CanvasSize {
    /// Build a canvas size, rejecting empty dimensions.
    pub fn new(height: u32, width: u32) -> FieldResult<Self> {
        if height == 0 || width == 0 {
            return Err(FieldError::validation(
                "canvas height and width must be > 0",
            ));
        }
        Ok(Self { height, width })
    }

    /// Total number of pixels.
    pub fn pixel_count(self) -> usize {
        (self.height as usize) * (self.width as usize)
    }

    /// Canvas center in pixel space.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}
