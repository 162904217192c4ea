use c64_dither::DitherStrategy;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Base name of the output image when `-o` is not given
pub const DEFAULT_OUTPUT_STEM: &str = "out";

/// Output program path when `-f` is not given
pub const DEFAULT_PROGRAM_FILE: &str = "img.basic";

/// Resolved settings for one conversion run
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertConfig {
    /// Source image (PNG, JPEG or GIF)
    pub input: PathBuf,

    /// Where the quantized preview is written. Always PNG content.
    pub output_image: PathBuf,

    /// Where the BASIC listing is written
    pub output_program: PathBuf,

    /// Exact lookup or Floyd-Steinberg
    pub strategy: DitherStrategy,
}

impl ConvertConfig {
    /// Build a config, filling in defaults for omitted outputs
    pub fn new(
        input: PathBuf,
        output_image: Option<PathBuf>,
        output_program: Option<PathBuf>,
        dither: bool,
    ) -> Self {
        let output_image = output_image.unwrap_or_else(|| default_output_image(&input));
        let output_program =
            output_program.unwrap_or_else(|| PathBuf::from(DEFAULT_PROGRAM_FILE));
        Self {
            input,
            output_image,
            output_program,
            strategy: DitherStrategy::from_flag(dither),
        }
    }
}

/// `out` plus the input's extension, e.g. `photo.jpg` -> `out.jpg`
pub fn default_output_image(input: &Path) -> PathBuf {
    let mut name = OsString::from(DEFAULT_OUTPUT_STEM);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    PathBuf::from(name)
}
