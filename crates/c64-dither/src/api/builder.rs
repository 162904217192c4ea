//! Quantizer builder -- the entry point for the crate.

use crate::color::Rgba;
use crate::dither::DitherStrategy;
use crate::output::IndexedImage;
use crate::palette::Palette;

use super::QuantizeError;

/// Palette quantizer with a fixed strategy.
///
/// Configuration methods consume and return `self`;
/// [`quantize()`](Self::quantize) takes `&self`, so one quantizer can be
/// reused across images.
///
/// # Example
///
/// ```
/// use c64_dither::{DitherStrategy, Palette, Quantizer, Rgba};
///
/// let quantizer = Quantizer::new(Palette::c64());
/// assert_eq!(quantizer.strategy_kind(), DitherStrategy::Exact);
///
/// let image = quantizer.quantize(&[Rgba::from_u8(0xff, 0xff, 0xff)], 1, 1).unwrap();
/// assert_eq!(image.indices(), &[1]);
/// ```
#[derive(Debug, Clone)]
pub struct Quantizer {
    palette: Palette,
    strategy: DitherStrategy,
}

impl Quantizer {
    /// Create a quantizer using exact matching.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            strategy: DitherStrategy::Exact,
        }
    }

    /// Select the quantization strategy.
    #[inline]
    pub fn strategy(mut self, strategy: DitherStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The selected strategy.
    #[inline]
    pub fn strategy_kind(&self) -> DitherStrategy {
        self.strategy
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Quantize row-major pixels to an [`IndexedImage`].
    ///
    /// # Errors
    ///
    /// [`QuantizeError::BufferSize`] if `pixels.len() != width * height`.
    pub fn quantize(
        &self,
        pixels: &[Rgba],
        width: usize,
        height: usize,
    ) -> Result<IndexedImage, QuantizeError> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(QuantizeError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }

        let indices = self
            .strategy
            .ditherer()
            .dither(pixels, width, height, &self.palette);

        Ok(IndexedImage::new(indices, width, height, self.palette.clone()))
    }
}
