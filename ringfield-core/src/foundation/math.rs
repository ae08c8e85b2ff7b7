//! Scalar interpolation helpers.

/// Linear interpolation between `a` and `b`, unclamped.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Interpolate between two integers at `step / (steps - 1)` and truncate toward zero.
///
/// `steps` must be at least 2. `step == steps - 1` returns `b` exactly.
pub(crate) fn lerp_trunc_i32(a: i32, b: i32, step: usize, steps: usize) -> i32 {
    let last = (steps - 1) as f64;
    // Multiply before dividing so integral results stay exact.
    let delta = (f64::from(b) - f64::from(a)) * step as f64 / last;
    (f64::from(a) + delta).trunc() as i32
}

/// `true` when `a` and `b` differ by at most `eps`.
#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
