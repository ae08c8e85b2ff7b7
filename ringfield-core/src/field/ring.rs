use crate::field::grid::Field;
use crate::foundation::core::{CanvasSize, Point};
use crate::foundation::error::{FieldError, FieldResult};
use crate::foundation::math::lerp;

/// Direct radial profile between two concentric circles.
///
/// Unlike the weighted blend, each boundary shows its own brightness: `inner_brightness`
/// at `inner_radius`, `outer_brightness` at `outer_radius`, linear in between.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RingGradient {
    /// Shared center of both circles.
    pub center: Point,
    /// Radius where the ring starts.
    pub inner_radius: f64,
    /// Radius where the ring ends.
    pub outer_radius: f64,
    /// Intensity on the inner circle.
    pub inner_brightness: f64,
    /// Intensity on the outer circle.
    #[serde(default)]
    pub outer_brightness: f64,
}

impl RingGradient {
    /// Ring fading from `brightness` at the inner circle to black at the outer one.
    pub fn fading(
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        brightness: f64,
    ) -> FieldResult<Self> {
        let ring = Self {
            center,
            inner_radius,
            outer_radius,
            inner_brightness: brightness,
            outer_brightness: 0.0,
        };
        ring.validate()?;
        Ok(ring)
    }

    /// Require `0 <= inner_radius < outer_radius` and finite values.
    pub fn validate(&self) -> FieldResult<()> {
        let values = [
            self.center.x,
            self.center.y,
            self.inner_radius,
            self.outer_radius,
            self.inner_brightness,
            self.outer_brightness,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(FieldError::validation("ring gradient values must be finite"));
        }
        if self.inner_radius < 0.0 || self.inner_radius >= self.outer_radius {
            return Err(FieldError::validation(
                "ring gradient needs 0 <= inner_radius < outer_radius",
            ));
        }
        Ok(())
    }

    /// Intensity at pixel `(x, y)`; `0.0` outside the ring.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let r = (x - self.center.x).hypot(y - self.center.y);
        if r < self.inner_radius || r > self.outer_radius {
            return 0.0;
        }
        let t = (r - self.inner_radius) / (self.outer_radius - self.inner_radius);
        lerp(self.inner_brightness, self.outer_brightness, t)
    }

    /// Render the ring over `canvas`.
    #[tracing::instrument(skip(self))]
    pub fn render(&self, canvas: CanvasSize) -> Field {
        Field::from_fn(canvas, |x, y| self.sample(f64::from(x), f64::from(y)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/ring.rs"]
mod tests;
