use std::path::PathBuf;

use c64_dither::QuantizeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{0} flag is required. Type -help for help")]
    MissingArgument(&'static str),

    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Wrong image size. Expected {expected_width}x{expected_height}, got: {width}x{height}")]
    SizeMismatch {
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
    },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Quantize error: {0}")]
    Quantize(#[from] QuantizeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// Map a failure opening `path`, keeping not-found distinct from other IO errors.
    pub fn from_open(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            ConvertError::FileNotFound { path: path.into() }
        } else {
            ConvertError::Io(err)
        }
    }

    /// Errors caused by the command line rather than the input data.
    pub fn is_usage(&self) -> bool {
        matches!(self, ConvertError::MissingArgument(_))
    }
}

impl From<image::ImageError> for ConvertError {
    fn from(e: image::ImageError) -> Self {
        ConvertError::Decode(e.to_string())
    }
}
