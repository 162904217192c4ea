//! Palette struct with exact lookup and nearest-color matching.
//!
//! The color-to-index table is built once at construction and never
//! mutated, so a `Palette` can be shared by reference across the whole
//! pipeline.

use std::collections::HashMap;

use super::c64::C64_PALETTE;
use super::error::PaletteError;
use crate::color::Rgba;

/// Maximum number of palette entries (indices are `u8`).
pub const MAX_COLORS: usize = 256;

/// An ordered color palette with an O(1) exact-match lookup table.
///
/// Each color's position is its index. Two lookups are offered:
///
/// - [`index_of()`](Palette::index_of): byte-exact match through the
///   precomputed table, `None` on a miss
/// - [`find_nearest()`](Palette::find_nearest): smallest squared RGB
///   distance, used by error diffusion where the accumulated value is
///   rarely an exact palette color
///
/// # Example
///
/// ```
/// use c64_dither::{Palette, Rgba};
///
/// let palette = Palette::c64();
/// assert_eq!(palette.len(), 16);
/// assert_eq!(palette.index_of(Rgba::from_u8(0xff, 0xff, 0xff)), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Rgba>,
    lookup: HashMap<Rgba, u8>,
}

impl Palette {
    /// Create a palette from an ordered list of colors.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `colors` is empty
    /// - [`PaletteError::TooManyColors`] if there are more than [`MAX_COLORS`]
    /// - [`PaletteError::DuplicateColor`] if a color appears twice, since the
    ///   lookup table could only map it to one index
    pub fn new(colors: &[Rgba]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if colors.len() > MAX_COLORS {
            return Err(PaletteError::TooManyColors {
                count: colors.len(),
            });
        }

        let mut lookup = HashMap::with_capacity(colors.len());
        for (i, &color) in colors.iter().enumerate() {
            if lookup.insert(color, i as u8).is_some() {
                return Err(PaletteError::DuplicateColor { index: i });
            }
        }

        Ok(Self {
            colors: colors.to_vec(),
            lookup,
        })
    }

    /// The fixed 16-color C64 palette.
    pub fn c64() -> Self {
        let colors: Vec<Rgba> = C64_PALETTE.iter().map(|&(_, c)| c).collect();
        let lookup = colors
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i as u8))
            .collect();
        Self { colors, lookup }
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgba {
        self.colors[idx]
    }

    /// All colors in index order.
    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// The color-to-index table.
    #[inline]
    pub fn lookup(&self) -> &HashMap<Rgba, u8> {
        &self.lookup
    }

    /// Byte-exact lookup of a color's index.
    #[inline]
    pub fn index_of(&self, color: Rgba) -> Option<u8> {
        self.lookup.get(&color).copied()
    }

    /// Exact lookup where a miss maps to index 0.
    #[inline]
    pub fn index_or_default(&self, color: Rgba) -> u8 {
        self.index_of(color).unwrap_or(0)
    }

    /// Find the palette entry closest to an RGB value.
    ///
    /// Distance is squared Euclidean over the RGB channels. Ties resolve to
    /// the lowest index. Channels may lie outside 0..=255 when carrying
    /// diffused error.
    pub fn find_nearest(&self, rgb: [i32; 3]) -> u8 {
        let mut best_idx = 0usize;
        let mut best_dist = i32::MAX;

        for (i, color) in self.colors.iter().enumerate() {
            let [r, g, b] = color.rgb();
            let dr = rgb[0] - r as i32;
            let dg = rgb[1] - g as i32;
            let db = rgb[2] - b as i32;
            let dist = dr * dr + dg * dg + db * db;
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        best_idx as u8
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::c64()
    }
}
