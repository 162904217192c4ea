//! Exact-match quantization.

use crate::color::Rgba;
use crate::palette::Palette;

use super::Dither;

/// Exact palette lookup without error diffusion.
///
/// Every pixel goes through the palette's color-to-index table. A pixel
/// that is not byte-identical to a palette entry (alpha included) maps to
/// index 0. There is deliberately no nearest-color fallback: input art is
/// expected to already use palette colors.
pub struct ExactMatch;

impl Dither for ExactMatch {
    fn dither(&self, image: &[Rgba], width: usize, height: usize, palette: &Palette) -> Vec<u8> {
        image
            .iter()
            .take(width * height)
            .map(|&pixel| palette.index_or_default(pixel))
            .collect()
    }
}
