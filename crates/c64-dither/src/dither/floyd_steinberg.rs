//! Floyd-Steinberg error diffusion dithering algorithm.

use crate::color::Rgba;
use crate::palette::Palette;

use super::{dither_with_kernel, Dither, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// Visits pixels in plain scan order (no serpentine) and distributes 100%
/// of the quantization error to 4 neighbors:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
///
/// # Example
///
/// ```
/// use c64_dither::{Dither, FloydSteinberg, Palette, Rgba};
///
/// let palette = Palette::c64();
/// let pixels = vec![Rgba::from_u8(128, 128, 128); 4];
/// let indices = FloydSteinberg.dither(&pixels, 2, 2, &palette);
/// assert_eq!(indices.len(), 4);
/// ```
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, image: &[Rgba], width: usize, height: usize, palette: &Palette) -> Vec<u8> {
        dither_with_kernel(image, width, height, palette, &FLOYD_STEINBERG)
    }
}
