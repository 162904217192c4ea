//! Color types
//!
//! All pixel data in this crate is 8-bit RGBA. Error diffusion works on
//! widened `i32` channels internally and never leaves this representation.

mod rgba;

pub use rgba::Rgba;
