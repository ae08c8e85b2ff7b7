use rayon::prelude::*;

use crate::{
    field::blend::blend_at,
    field::boundary::BoundaryMetric,
    field::grid::Field,
    field::mask::MaskMode,
    field::peak::peak_at,
    foundation::core::CanvasSize,
    foundation::error::{FieldError, FieldResult},
    shape::model::ShapeSet,
};

/// How per-shape contributions are combined into one value per pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeMode {
    /// Inverse-proximity weighted blend inside the ring mask.
    #[default]
    WeightedBlend,
    /// Max-of-Gaussians height field inside the outer shape.
    Peak,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Row-level threading controls.
pub struct RenderThreading {
    /// Split rows across a rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Options for [`render_frame_with`].
pub struct RenderOpts {
    /// Composite rule.
    pub mode: CompositeMode,
    /// Valid-region rule for the weighted blend.
    pub mask: MaskMode,
    /// Unit of boundary distances for the weighted blend.
    pub metric: BoundaryMetric,
    /// Threading configuration.
    pub threading: RenderThreading,
}

/// Render one frame with default options: weighted blend, ring mask, normalized distances.
///
/// This is a pure function of its inputs; every call allocates a fresh [`Field`]. A canvas
/// with no pixels yields an empty field.
pub fn render_frame(shapes: &ShapeSet, canvas: CanvasSize) -> Field {
    if canvas.pixel_count() == 0 {
        return Field::from_vec(canvas, Vec::new());
    }
    let opts = RenderOpts::default();
    let mut data = vec![0.0f32; canvas.pixel_count()];
    fill_rows(&mut data, shapes, canvas, &opts, 0);
    Field::from_vec(canvas, data)
}

/// Render one frame with explicit options.
///
/// Output does not depend on `opts.threading`.
#[tracing::instrument(skip(shapes), fields(shapes = shapes.len()))]
pub fn render_frame_with(
    shapes: &ShapeSet,
    canvas: CanvasSize,
    opts: &RenderOpts,
) -> FieldResult<Field> {
    if canvas.pixel_count() == 0 {
        return Ok(Field::from_vec(canvas, Vec::new()));
    }
    let width = canvas.width as usize;
    let mut data = vec![0.0f32; canvas.pixel_count()];

    if opts.threading.parallel {
        let pool = build_thread_pool(opts.threading.threads)?;
        pool.install(|| {
            data.par_chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| fill_rows(row, shapes, canvas, opts, y as u32));
        });
    } else {
        fill_rows(&mut data, shapes, canvas, opts, 0);
    }

    let field = Field::from_vec(canvas, data);
    tracing::debug!(
        nonzero = field.stats().nonzero,
        "rendered {}x{} field",
        canvas.width,
        canvas.height
    );
    Ok(field)
}

/// Render several shape sets on the same canvas, e.g. every step of an animation.
///
/// With `opts.threading.parallel` frames are rendered concurrently; each frame is serial.
pub fn render_frames(
    sets: &[ShapeSet],
    canvas: CanvasSize,
    opts: &RenderOpts,
) -> FieldResult<Vec<Field>> {
    if sets.is_empty() {
        return Err(FieldError::validation(
            "render_frames needs at least 1 shape set",
        ));
    }
    let serial = RenderOpts {
        threading: RenderThreading::default(),
        ..opts.clone()
    };
    if !opts.threading.parallel {
        return sets
            .iter()
            .map(|s| render_frame_with(s, canvas, &serial))
            .collect();
    }

    let pool = build_thread_pool(opts.threading.threads)?;
    pool.install(|| {
        sets.par_iter()
            .map(|s| render_frame_with(s, canvas, &serial))
            .collect()
    })
}

/// Evaluate `rows` (a whole number of canvas rows starting at `first_row`).
fn fill_rows(
    rows: &mut [f32],
    shapes: &ShapeSet,
    canvas: CanvasSize,
    opts: &RenderOpts,
    first_row: u32,
) {
    let width = canvas.width as usize;
    for (dy, row) in rows.chunks_exact_mut(width).enumerate() {
        let y = f64::from(first_row) + dy as f64;
        for (x, px) in row.iter_mut().enumerate() {
            let x = x as f64;
            let v = match opts.mode {
                CompositeMode::WeightedBlend => blend_at(shapes, x, y, opts.metric, opts.mask),
                CompositeMode::Peak => peak_at(shapes, x, y),
            };
            *px = v as f32;
        }
    }
}

fn build_thread_pool(threads: Option<usize>) -> FieldResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(FieldError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        FieldError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
