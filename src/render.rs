//! Full-frame rasterizer: recomputes every pixel of an RGBA8 buffer from a
//! [`ViewParams`] snapshot.

use rayon::prelude::*;

use crate::mandelbrot::{escape_time, pixel_to_plane, smooth_iterations, Escape};
use crate::view::ViewParams;

/// Renders a complete frame into `frame` (`width * height * 4` bytes, RGBA).
///
/// Output is a pure function of `params` and the dimensions: the same
/// snapshot always produces a bit-identical buffer. Dense passes split the
/// work per row; rows are independent, so the split can't change the result.
pub fn render_frame(params: &ViewParams, frame: &mut [u8], width: u32, height: u32) {
    debug_assert_eq!(frame.len(), (width * height * 4) as usize);
    let stride = params.stride.max(1);
    if stride == 1 {
        frame
            .par_chunks_exact_mut((width * 4) as usize)
            .enumerate()
            .for_each(|(hy, row)| render_row(params, hy as u32, row, width, height));
    } else {
        // Sparse pass; too little work per row to be worth the fork/join.
        render_strided(params, stride, frame, width, height);
    }
}

fn render_row(params: &ViewParams, hy: u32, row: &mut [u8], width: u32, height: u32) {
    for hx in 0..width {
        let rgb = shade_pixel(params, hx, hy, width, height);
        let idx = (hx * 4) as usize;
        row[idx] = rgb[0];
        row[idx + 1] = rgb[1];
        row[idx + 2] = rgb[2];
        row[idx + 3] = 0xFF;
    }
}

/// Samples on the stride grid and fills the whole stride-by-stride block with
/// the sample's color, so no pixel keeps a previous frame's value.
fn render_strided(params: &ViewParams, stride: u32, frame: &mut [u8], width: u32, height: u32) {
    let mut hy = 0;
    while hy < height {
        let mut hx = 0;
        while hx < width {
            let rgb = shade_pixel(params, hx, hy, width, height);
            for py in hy..(hy + stride).min(height) {
                for px in hx..(hx + stride).min(width) {
                    let idx = ((py * width + px) * 4) as usize;
                    frame[idx] = rgb[0];
                    frame[idx + 1] = rgb[1];
                    frame[idx + 2] = rgb[2];
                    frame[idx + 3] = 0xFF;
                }
            }
            hx += stride;
        }
        hy += stride;
    }
}

fn shade_pixel(params: &ViewParams, hx: u32, hy: u32, width: u32, height: u32) -> [u8; 3] {
    let (re, im) = pixel_to_plane(hx, hy, width, height, params);
    let iterations = match escape_time(re, im, params.max_iterations) {
        Escape::Interior => params.max_iterations as f64,
        Escape::Escaped { iterations, zx, zy } => smooth_iterations(iterations, zx, zy),
    };
    params.scheme.shade(iterations, params.max_iterations)
}
