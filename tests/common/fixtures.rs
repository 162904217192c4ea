//! Test fixtures and constants.

use std::path::{Path, PathBuf};

use c64_dither::C64_PALETTE;
use image::{DynamicImage, ImageFormat, RgbaImage};

pub const WIDTH: u32 = 40;
pub const HEIGHT: u32 = 25;

/// Color of a palette index as an `image` pixel
pub fn palette_pixel(index: u8) -> image::Rgba<u8> {
    image::Rgba(C64_PALETTE[index as usize].1.to_bytes())
}

/// 40x25 image cycling through all 16 palette colors, row-major
pub fn palette_cycle() -> RgbaImage {
    RgbaImage::from_fn(WIDTH, HEIGHT, |x, y| palette_pixel(expected_cycle_index(x, y)))
}

/// Index `palette_cycle` places at (x, y)
pub fn expected_cycle_index(x: u32, y: u32) -> u8 {
    ((y * WIDTH + x) % 16) as u8
}

/// Indices of `palette_cycle` in row-major order
pub fn expected_cycle_indices() -> Vec<u8> {
    (0..HEIGHT)
        .flat_map(|y| (0..WIDTH).map(move |x| expected_cycle_index(x, y)))
        .collect()
}

/// 40x25 horizontal gray ramp, none of it on the palette except the ends
pub fn gray_ramp() -> RgbaImage {
    RgbaImage::from_fn(WIDTH, HEIGHT, |x, _| {
        let v = (x * 255 / (WIDTH - 1)) as u8;
        image::Rgba([v, v, v, 255])
    })
}

/// Solid image of the given size and color
pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, image::Rgba(rgba))
}

/// Save `img` as `name` inside `dir` using `format`
pub fn save(img: &RgbaImage, dir: &Path, name: &str, format: ImageFormat) -> PathBuf {
    let path = dir.join(name);
    let result = if format == ImageFormat::Jpeg {
        // JPEG has no alpha channel
        DynamicImage::ImageRgba8(img.clone())
            .to_rgb8()
            .save_with_format(&path, format)
    } else {
        img.save_with_format(&path, format)
    };
    result.expect("Failed to write fixture image");
    path
}
