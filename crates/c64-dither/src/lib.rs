#![allow(clippy::module_inception, clippy::needless_range_loop)]

//! c64-dither: palette quantization for C64 block graphics
//!
//! This library maps RGBA pixels onto the fixed 16-color C64 palette,
//! either by exact byte-level lookup or by Floyd-Steinberg error diffusion.
//!
//! # Quick Start
//!
//! The [`Quantizer`] builder is the primary entry point:
//!
//! ```
//! use c64_dither::{DitherStrategy, Palette, Quantizer, Rgba};
//!
//! let quantizer = Quantizer::new(Palette::c64()).strategy(DitherStrategy::FloydSteinberg);
//! let pixels = vec![Rgba::from_u8(128, 128, 128); 4];
//! let image = quantizer.quantize(&pixels, 2, 2).unwrap();
//!
//! assert_eq!(image.width(), 2);
//! assert_eq!(image.indices().len(), 4);
//! ```
//!
//! # Strategies
//!
//! - [`DitherStrategy::Exact`]: every pixel is looked up in the palette's
//!   color-to-index table. A color that is not byte-identical to a palette
//!   entry maps to index 0. No nearest-color search happens on this path.
//! - [`DitherStrategy::FloydSteinberg`]: classic error diffusion in scan
//!   order, matching against the nearest palette color by squared RGB
//!   distance.
//!
//! # Output
//!
//! Both strategies produce an [`IndexedImage`]: row-major palette indices
//! plus the palette, which can be materialized back into RGBA bytes.

pub mod api;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;


pub use api::{QuantizeError, Quantizer};
pub use color::Rgba;
pub use dither::{Dither, DitherStrategy, ExactMatch, FloydSteinberg};
pub use output::IndexedImage;
pub use palette::{Palette, PaletteError, C64_PALETTE};
