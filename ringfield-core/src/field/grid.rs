use crate::foundation::core::CanvasSize;

/// Row-major 2D scalar buffer, one value per pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    canvas: CanvasSize,
    data: Vec<f32>,
}

/// How a [`Field`] is mapped to 8-bit gray levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneMap {
    /// Values in `[0, 1]` map to `0..=255`.
    #[default]
    Unit,
    /// Values are already gray levels; they are truncated and clamped to `0..=255`.
    Direct,
    /// The field's finite min/max are stretched to `0..=255`.
    Stretch,
}

/// Summary statistics of a field.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FieldStats {
    /// Smallest finite value.
    pub min: f32,
    /// Largest finite value.
    pub max: f32,
    /// Mean of finite values.
    pub mean: f64,
    /// Pixels holding a non-zero finite value.
    pub nonzero: usize,
    /// Pixels holding NaN or infinity.
    pub non_finite: usize,
}

impl Field {
    /// All-zero field.
    pub fn zeros(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            data: vec![0.0; canvas.pixel_count()],
        }
    }

    /// Field sampled from `f(x, y)` at every integer pixel coordinate.
    pub fn from_fn(canvas: CanvasSize, mut f: impl FnMut(u32, u32) -> f64) -> Self {
        let mut data = Vec::with_capacity(canvas.pixel_count());
        for y in 0..canvas.height {
            for x in 0..canvas.width {
                data.push(f(x, y) as f32);
            }
        }
        Self { canvas, data }
    }

    pub(crate) fn from_vec(canvas: CanvasSize, data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), canvas.pixel_count());
        Self { canvas, data }
    }

    /// Canvas this field covers.
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.canvas.height
    }

    /// Value at column `x`, row `y`.
    ///
    /// # Panics
    /// When `(x, y)` is outside the canvas.
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.data[self.index(x, y)]
    }

    /// Overwrite the value at column `x`, row `y`.
    pub fn set(&mut self, x: u32, y: u32, v: f32) {
        let idx = self.index(x, y);
        self.data[idx] = v;
    }

    /// One row of values.
    pub fn row(&self, y: u32) -> &[f32] {
        let w = self.canvas.width as usize;
        let start = (y as usize) * w;
        &self.data[start..start + w]
    }

    /// Raw row-major values.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Consume the field and return its row-major values.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Multiply every value by `factor`, e.g. to pre-scale `[0, 1]` output to `[0, 255]`.
    pub fn scaled(mut self, factor: f32) -> Self {
        for v in &mut self.data {
            *v *= factor;
        }
        self
    }

    /// Min/max/mean over finite values plus non-zero and non-finite counts.
    pub fn stats(&self) -> FieldStats {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut sum = 0.0f64;
        let mut finite = 0usize;
        let mut nonzero = 0usize;
        for &v in &self.data {
            if !v.is_finite() {
                continue;
            }
            finite += 1;
            min = min.min(v);
            max = max.max(v);
            sum += f64::from(v);
            if v != 0.0 {
                nonzero += 1;
            }
        }
        if finite == 0 {
            min = 0.0;
            max = 0.0;
        }
        FieldStats {
            min,
            max,
            mean: if finite == 0 { 0.0 } else { sum / finite as f64 },
            nonzero,
            non_finite: self.data.len() - finite,
        }
    }

    /// Tone-map to an 8-bit grayscale image. Non-finite values become black.
    pub fn to_gray_image(&self, tone: ToneMap) -> image::GrayImage {
        let (offset, scale) = match tone {
            ToneMap::Unit => (0.0, 255.0),
            ToneMap::Direct => (0.0, 1.0),
            ToneMap::Stretch => {
                let s = self.stats();
                let span = s.max - s.min;
                if span > 0.0 {
                    (s.min, 255.0 / span)
                } else {
                    (s.min, 0.0)
                }
            }
        };
        let bytes = self
            .data
            .iter()
            .map(|&v| {
                if !v.is_finite() {
                    return 0;
                }
                let level = (v - offset) * scale;
                // Gray-level fields keep only the integer part.
                let level = if tone == ToneMap::Direct {
                    level.trunc()
                } else {
                    level.round()
                };
                level.clamp(0.0, 255.0) as u8
            })
            .collect();
        // Length always matches width * height.
        image::GrayImage::from_raw(self.canvas.width, self.canvas.height, bytes)
            .unwrap_or_else(|| image::GrayImage::new(self.canvas.width, self.canvas.height))
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.canvas.width && y < self.canvas.height,
            "pixel ({x}, {y}) outside {}x{} field",
            self.canvas.width,
            self.canvas.height
        );
        (y as usize) * (self.canvas.width as usize) + (x as usize)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/grid.rs"]
mod tests;
