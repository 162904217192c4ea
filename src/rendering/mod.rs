pub mod decode;
pub mod png_encode;

pub use decode::{decode_image, read_dimensions, DecodedImage};
pub use png_encode::{encode_png, write_png};
