//! Unified error type for the c64-dither public API.

use crate::palette::PaletteError;
use std::fmt;

/// Unified error type for the c64-dither public API.
///
/// # Example
///
/// ```
/// use c64_dither::{Palette, QuantizeError, Rgba};
///
/// fn two_tone() -> Result<Palette, QuantizeError> {
///     let palette = Palette::new(&[Rgba::from_u8(0, 0, 0), Rgba::from_u8(255, 255, 255)])?;
///     Ok(palette)
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum QuantizeError {
    /// Palette validation error
    Palette(PaletteError),
    /// Pixel buffer length does not match width * height
    BufferSize {
        /// width * height
        expected: usize,
        /// Number of pixels supplied
        actual: usize,
    },
}

impl fmt::Display for QuantizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantizeError::Palette(err) => write!(f, "palette error: {}", err),
            QuantizeError::BufferSize { expected, actual } => write!(
                f,
                "pixel buffer holds {} pixels, expected {}",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for QuantizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuantizeError::Palette(err) => Some(err),
            QuantizeError::BufferSize { .. } => None,
        }
    }
}

impl From<PaletteError> for QuantizeError {
    fn from(err: PaletteError) -> Self {
        QuantizeError::Palette(err)
    }
}
