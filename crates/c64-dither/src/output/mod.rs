//! Output types for the quantization pipeline.
//!
//! [`IndexedImage`] is the canonical result of every strategy: palette
//! indices plus the palette needed to turn them back into colors.

mod indexed_image;

pub use indexed_image::IndexedImage;
