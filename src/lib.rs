//! Blockart - C64 block graphics from 40x25 images
//!
//! Converts a 40x25 image into a palette-quantized PNG preview and a BASIC
//! program that paints the same picture into C64 color RAM.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
