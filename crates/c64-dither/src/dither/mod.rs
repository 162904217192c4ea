//! Quantization strategies.
//!
//! Two strategies implement the [`Dither`] trait:
//!
//! - [`ExactMatch`]: table lookup only, misses map to index 0
//! - [`FloydSteinberg`]: classic error diffusion in scan order
//!
//! [`DitherStrategy`] selects one of them once, from a configuration flag,
//! and hands out the implementation as a `&'static dyn Dither`.

mod exact;
mod floyd_steinberg;
mod kernel;

use std::fmt;

pub use exact::ExactMatch;
pub use floyd_steinberg::FloydSteinberg;
pub use kernel::*;

use crate::color::Rgba;
use crate::palette::Palette;

/// Strategy selection for the [`Quantizer`](crate::Quantizer) builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitherStrategy {
    /// Exact palette lookup, no error diffusion.
    #[default]
    Exact,

    /// Floyd-Steinberg error diffusion (100% propagation, 4 neighbors).
    FloydSteinberg,
}

impl DitherStrategy {
    /// Map an on/off dithering flag to a strategy.
    pub fn from_flag(dither: bool) -> Self {
        if dither {
            DitherStrategy::FloydSteinberg
        } else {
            DitherStrategy::Exact
        }
    }

    /// The implementation for this strategy.
    pub fn ditherer(self) -> &'static dyn Dither {
        match self {
            DitherStrategy::Exact => &ExactMatch,
            DitherStrategy::FloydSteinberg => &FloydSteinberg,
        }
    }
}

impl fmt::Display for DitherStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DitherStrategy::Exact => write!(f, "exact"),
            DitherStrategy::FloydSteinberg => write!(f, "floyd-steinberg"),
        }
    }
}

/// Trait for palette quantization algorithms.
pub trait Dither {
    /// Quantize an image to palette indices.
    ///
    /// # Arguments
    ///
    /// * `image` - Input pixels, row-major
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `palette` - Palette to quantize against
    ///
    /// # Returns
    ///
    /// One index per pixel, row-major, each in `0..palette.len()`.
    /// Callers guarantee `image.len() == width * height`.
    fn dither(&self, image: &[Rgba], width: usize, height: usize, palette: &Palette) -> Vec<u8>;
}

/// Error buffer for error diffusion.
///
/// Holds only the rows the kernel can reach (`max_dy + 1`). Errors are
/// stored as weighted sums; readers divide by the kernel divisor.
#[derive(Debug)]
pub struct ErrorBuffer {
    /// Error rows: rows[0] is current row, rows[1] is next, etc.
    rows: Vec<Vec<[i32; 3]>>,
    width: usize,
}

impl ErrorBuffer {
    /// Create a buffer of `row_depth` zeroed rows.
    pub fn new(width: usize, row_depth: usize) -> Self {
        Self {
            rows: (0..row_depth).map(|_| vec![[0; 3]; width]).collect(),
            width,
        }
    }

    /// Accumulated weighted error for a pixel in the current row.
    #[inline]
    pub fn get_accumulated(&self, x: usize) -> [i32; 3] {
        self.rows[0][x]
    }

    /// Add weighted error to a future pixel.
    ///
    /// Silently ignores out-of-bounds coordinates, so error falling off the
    /// image edge is dropped.
    #[inline]
    pub fn add_error(&mut self, x: usize, row_offset: usize, error: [i32; 3]) {
        if x < self.width && row_offset < self.rows.len() {
            for c in 0..3 {
                self.rows[row_offset][x][c] += error[c];
            }
        }
    }

    /// Advance to the next row.
    pub fn advance_row(&mut self) {
        // Rotate left: [0,1] -> [1,0]
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill([0; 3]);
        }
    }
}

/// Error diffusion loop parameterized by kernel.
///
/// Pixels are visited left to right, top to bottom. Each pixel's value is
/// the premultiplied source plus `accumulated / divisor`, clamped to
/// 0..=255 per channel, then matched with [`Palette::find_nearest`]. The
/// remaining difference is spread to unvisited neighbors per the kernel.
pub(crate) fn dither_with_kernel(
    image: &[Rgba],
    width: usize,
    height: usize,
    palette: &Palette,
    kernel: &Kernel,
) -> Vec<u8> {
    let mut output = vec![0u8; width * height];
    let mut error_buf = ErrorBuffer::new(width, kernel.max_dy + 1);
    let divisor = kernel.divisor as i32;

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let [r, g, b] = image[idx].premultiplied().rgb();
            let acc = error_buf.get_accumulated(x);

            let value = [
                (r as i32 + acc[0] / divisor).clamp(0, 255),
                (g as i32 + acc[1] / divisor).clamp(0, 255),
                (b as i32 + acc[2] / divisor).clamp(0, 255),
            ];

            let best = palette.find_nearest(value);
            output[idx] = best;

            let chosen = palette.color(best as usize).rgb();
            let error = [
                value[0] - chosen[0] as i32,
                value[1] - chosen[1] as i32,
                value[2] - chosen[2] as i32,
            ];
            if error == [0; 3] {
                continue;
            }

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i32 + dx;
                if nx < 0 {
                    continue;
                }
                let w = weight as i32;
                error_buf.add_error(
                    nx as usize,
                    dy as usize,
                    [error[0] * w, error[1] * w, error[2] * w],
                );
            }
        }
        error_buf.advance_row();
    }

    output
}
