//! Escape-time iteration for the Mandelbrot set, with smooth (continuous)
//! iteration counts for band-free coloring.

use crate::view::ViewParams;

/// Outcome of iterating a single point under `z <- z^2 + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Escape {
    /// The orbit stayed within the escape radius for the whole budget.
    Interior,
    /// The orbit left the escape radius; `zx`/`zy` is the first iterate
    /// outside it, kept for smoothing.
    Escaped { iterations: u32, zx: f64, zy: f64 },
}

/// Maps a pixel coordinate to its point on the complex plane.
///
/// The view is centered on `(offset_x, offset_y)` and `zoom_depth` is the
/// plane distance covered by one pixel.
pub fn pixel_to_plane(hx: u32, hy: u32, width: u32, height: u32, params: &ViewParams) -> (f64, f64) {
    let re = (hx as f64 - width as f64 / 2.0) * params.zoom_depth + params.offset_x;
    let im = (hy as f64 - height as f64 / 2.0) * params.zoom_depth + params.offset_y;
    (re, im)
}

/// Iterates `z <- z^2 + c` from `z = 0` for `c = re + im*i`.
///
/// The complex square is unrolled into real arithmetic:
/// `next_x = x*x - y*y + re`, `y = 2*x*y + im`. Escape is `x*x + y*y > 4.0`,
/// equivalent to |z| > 2; past that radius the orbit diverges.
pub fn escape_time(re: f64, im: f64, max_iterations: u32) -> Escape {
    let mut x = 0.0_f64;
    let mut y = 0.0_f64;
    let mut iterations = 0_u32;
    while x * x + y * y <= 4.0 && iterations < max_iterations {
        let next_x = x * x - y * y + re;
        y = 2.0 * x * y + im;
        x = next_x;
        iterations += 1;
    }
    if iterations < max_iterations {
        Escape::Escaped { iterations, zx: x, zy: y }
    } else {
        Escape::Interior
    }
}

/// Continuous iteration count for an escaped orbit:
/// `n - log2(log2(|z|)) + log2(log2(2))`.
///
/// Falls back to the integer count when the logs are not finite, which can
/// happen for |z| barely past the escape radius.
pub fn smooth_iterations(iterations: u32, zx: f64, zy: f64) -> f64 {
    let log_base = 1.0 / std::f64::consts::LN_2;
    let log_half_base = 0.5_f64.ln() * log_base;
    let modulus = (zx * zx + zy * zy).sqrt();
    let smooth = iterations as f64 - log_half_base - modulus.ln().ln() * log_base;
    if smooth.is_finite() {
        smooth
    } else {
        iterations as f64
    }
}
