pub mod config;
pub mod context;
pub mod screen_spec;

pub use config::{ConvertConfig, DEFAULT_OUTPUT_STEM, DEFAULT_PROGRAM_FILE};
pub use context::Context;
pub use screen_spec::ScreenSpec;
