//! End-to-end conversion: decode, quantize, write preview, write program.

use c64_dither::{IndexedImage, Quantizer};

use crate::error::ConvertError;
use crate::models::{Context, ConvertConfig};
use crate::rendering::{decode_image, write_png};
use crate::services::basic_program::write_program;

/// Run one conversion.
///
/// Input is fully validated (readable, decodable, exact screen size) before
/// any output file is created, so a rejected input leaves nothing behind.
pub fn process_image(
    config: &ConvertConfig,
    context: &Context,
) -> Result<IndexedImage, ConvertError> {
    let decoded = decode_image(&config.input, &context.screen)?;
    tracing::debug!(
        width = decoded.width,
        height = decoded.height,
        dither = %config.strategy,
        "Decoded input"
    );

    let image = Quantizer::new(context.palette.clone())
        .strategy(config.strategy)
        .quantize(
            &decoded.pixels,
            decoded.width as usize,
            decoded.height as usize,
        )?;

    write_png(&image, &config.output_image)?;
    write_program(image.indices(), &config.output_program)?;

    Ok(image)
}
