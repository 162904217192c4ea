//! IndexedImage: palette indices with dimensions and palette.

use crate::color::Rgba;
use crate::palette::Palette;

/// The output of quantization.
///
/// Stores one `u8` palette index per pixel in row-major order, along with
/// the image dimensions and the palette the indices refer to.
///
/// # Example
///
/// ```
/// use c64_dither::{IndexedImage, Palette};
///
/// let image = IndexedImage::new(vec![0, 1, 1, 0], 2, 2, Palette::c64());
///
/// assert_eq!(image.get(1, 0), Some(1));
/// assert_eq!(image.to_rgba().len(), 2 * 2 * 4);
/// ```
#[derive(Debug, Clone)]
pub struct IndexedImage {
    indices: Vec<u8>,
    width: usize,
    height: usize,
    palette: Palette,
}

impl IndexedImage {
    /// Create a new `IndexedImage`.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height`.
    pub fn new(indices: Vec<u8>, width: usize, height: usize, palette: Palette) -> Self {
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match width * height ({}x{}={})",
            indices.len(),
            width,
            height,
            width * height,
        );
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    /// Palette indices, row-major.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Index at (x, y), or `None` outside the image.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.indices[y * self.width + x])
    }

    /// Iterate over rows of indices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.indices.chunks(self.width.max(1))
    }

    /// Materialize as palette colors.
    pub fn to_colors(&self) -> Vec<Rgba> {
        self.indices
            .iter()
            .map(|&idx| self.palette.color(idx as usize))
            .collect()
    }

    /// Materialize as flat `[R, G, B, A, ...]` bytes.
    ///
    /// The returned buffer has length `width * height * 4`.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.indices.len() * 4);
        for &idx in &self.indices {
            rgba.extend_from_slice(&self.palette.color(idx as usize).to_bytes());
        }
        rgba
    }
}
