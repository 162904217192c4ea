//! Indexed PNG output.
//!
//! The preview is always written as PNG, whatever extension the output path
//! carries. Bit depth follows the palette size (4-bit for the C64 palette)
//! and the palette itself goes into the PLTE chunk, so decoding the file
//! gives back exactly the palette colors.

use std::io::Cursor;
use std::path::Path;

use c64_dither::{IndexedImage, Palette};

use crate::error::ConvertError;

/// Encode an indexed image as PNG bytes.
pub fn encode_png(image: &IndexedImage) -> Result<Vec<u8>, ConvertError> {
    let palette = image.palette();
    let (depth, bits) = match palette.len() {
        0..=2 => (png::BitDepth::One, 1),
        3..=4 => (png::BitDepth::Two, 2),
        5..=16 => (png::BitDepth::Four, 4),
        _ => (png::BitDepth::Eight, 8),
    };
    let width = image.width() as u32;
    let packed = if bits == 8 {
        image.indices().to_vec()
    } else {
        pack_nbits(image.indices(), width, bits)
    };

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, image.height() as u32);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(depth);
        encoder.set_compression(png::Compression::Default);
        encoder.set_palette(plte(palette));
        if let Some(trns) = trns(palette) {
            encoder.set_trns(trns);
        }
        let mut writer = encoder
            .write_header()
            .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&packed)
            .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Encode and write to `path`. Nothing is written if encoding fails.
pub fn write_png(image: &IndexedImage, path: &Path) -> Result<(), ConvertError> {
    let bytes = encode_png(image)?;
    std::fs::write(path, &bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "Wrote preview image");
    Ok(())
}

fn plte(palette: &Palette) -> Vec<u8> {
    palette.colors().iter().flat_map(|c| c.rgb()).collect()
}

/// tRNS chunk, only when some palette entry is not fully opaque.
fn trns(palette: &Palette) -> Option<Vec<u8>> {
    let alpha: Vec<u8> = palette.colors().iter().map(|c| c.a).collect();
    alpha.iter().any(|&a| a != 0xff).then_some(alpha)
}

/// Pack pixel values into N-bit PNG row data (1, 2, or 4 bits per pixel).
fn pack_nbits(indices: &[u8], width: u32, bits: u8) -> Vec<u8> {
    if width == 0 {
        return Vec::new();
    }
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = (width as usize).div_ceil(pixels_per_byte);
    let height = indices.len() / width as usize;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width as usize) {
        let mut byte = 0u8;
        for (i, &idx) in row.iter().enumerate() {
            let shift = (8 - bits) - (i % pixels_per_byte) as u8 * bits;
            byte |= (idx & mask) << shift;

            if (i % pixels_per_byte) == pixels_per_byte - 1 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}
