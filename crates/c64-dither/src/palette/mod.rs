//! Palette types
//!
//! This module provides the [`Palette`] type with its color-to-index lookup
//! table, the fixed C64 color set, and palette validation errors.

mod c64;
mod error;
mod palette;

pub use c64::{color_name, C64_PALETTE};
pub use error::PaletteError;
pub use palette::{Palette, MAX_COLORS};
