pub mod basic_program;
pub mod pipeline;

pub use basic_program::{render_program, split_into_rows, write_program};
pub use pipeline::process_image;
