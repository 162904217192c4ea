//! Assertion helpers for tests.

use std::path::Path;

use c64_dither::Palette;
use pretty_assertions::assert_eq;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Assert the file at `path` holds PNG data
pub fn assert_png_file(path: &Path) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected PNG at {}: {e}", path.display()));
    assert!(
        bytes.starts_with(&PNG_SIGNATURE),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Decode `path` and map every pixel back to its exact palette index
pub fn decode_indices(path: &Path) -> Vec<u8> {
    let palette = Palette::c64();
    // Sniff the format: the preview is PNG whatever its extension
    let img = image::ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .expect("Failed to open image")
        .decode()
        .unwrap_or_else(|e| panic!("Failed to decode {}: {e}", path.display()))
        .to_rgba8();
    img.pixels()
        .map(|p| {
            palette
                .index_of(c64_dither::Rgba::from_bytes(p.0))
                .unwrap_or_else(|| panic!("Pixel {:?} is not a palette color", p.0))
        })
        .collect()
}

/// Parse the DATA values out of a listing, in order
pub fn program_data(program: &str) -> Vec<u8> {
    program
        .lines()
        .filter_map(|l| l.split_once(" data "))
        .flat_map(|(_, values)| values.split(','))
        .map(|v| v.trim().parse().expect("DATA value is not a number"))
        .collect()
}

/// Assert a full-screen listing: header, 50 DATA lines, 1000..=1490
pub fn assert_full_program(program: &str) {
    let lines: Vec<&str> = program.lines().collect();
    assert_eq!(lines.len(), 8 + 50, "Unexpected line count:\n{program}");
    assert_eq!(lines[0], "10 for y = 0 to 24");
    assert_eq!(lines[7], "70 goto 70");
    for (i, line) in lines[8..].iter().enumerate() {
        let expected = format!("{} data ", 1000 + i * 10);
        assert!(
            line.starts_with(&expected),
            "Line {i} should start with {expected:?}: {line:?}"
        );
    }
    assert!(program.ends_with('\n'));
}
