//! Image decoding with an up-front dimension check.
//!
//! The header is read first so a wrong-sized input is rejected before the
//! full pixel decode. Format is sniffed from the file content, not the
//! extension; PNG, JPEG and GIF are compiled in.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use c64_dither::Rgba;
use image::ImageReader;

use crate::error::ConvertError;
use crate::models::ScreenSpec;

/// A decoded image as row-major RGBA pixels.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgba>,
}

fn open_reader(path: &Path) -> Result<ImageReader<BufReader<File>>, ConvertError> {
    let file = File::open(path).map_err(|e| ConvertError::from_open(e, path))?;
    let reader = ImageReader::new(BufReader::new(file)).with_guessed_format()?;
    if reader.format().is_none() {
        return Err(ConvertError::Decode("image: unknown format".to_string()));
    }
    Ok(reader)
}

/// Read only the header and return (width, height).
pub fn read_dimensions(path: &Path) -> Result<(u32, u32), ConvertError> {
    Ok(open_reader(path)?.into_dimensions()?)
}

/// Decode `path`, requiring its dimensions to match `screen`.
pub fn decode_image(path: &Path, screen: &ScreenSpec) -> Result<DecodedImage, ConvertError> {
    let (width, height) = read_dimensions(path)?;
    tracing::debug!(path = %path.display(), width, height, "Read image header");
    screen.validate_dimensions(width, height)?;

    let decoded = open_reader(path)?.decode()?;
    let rgba = decoded.to_rgba8();
    let pixels = rgba.pixels().map(|p| Rgba::from_bytes(p.0)).collect();

    Ok(DecodedImage {
        width: rgba.width(),
        height: rgba.height(),
        pixels,
    })
}
