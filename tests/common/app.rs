//! Test application wrapper: a scratch directory plus ways to run a conversion.

use std::path::{Path, PathBuf};
use std::process::Command;

use blockart::error::ConvertError;
use blockart::models::{Context, ConvertConfig};
use blockart::services::process_image;
use c64_dither::IndexedImage;
use image::{ImageFormat, RgbaImage};
use tempfile::TempDir;

use super::fixtures;

/// Output of a CLI run
pub struct CliOutput {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Scratch workspace for one test
pub struct TestApp {
    pub dir: TempDir,
    pub context: Context,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
            context: Context::c64(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a fixture image into the workspace
    pub fn write_image(&self, img: &RgbaImage, name: &str, format: ImageFormat) -> PathBuf {
        fixtures::save(img, self.dir.path(), name, format)
    }

    /// Config with both outputs inside the workspace
    pub fn config(&self, input: &Path, dither: bool) -> ConvertConfig {
        ConvertConfig::new(
            input.to_path_buf(),
            Some(self.path("out.png")),
            Some(self.path("img.basic")),
            dither,
        )
    }

    /// Run the library pipeline
    pub fn convert(&self, input: &Path, dither: bool) -> Result<IndexedImage, ConvertError> {
        process_image(&self.config(input, dither), &self.context)
    }

    /// Run the binary with the workspace as working directory
    pub fn run_cli(&self, args: &[&str]) -> CliOutput {
        let output = Command::new(env!("CARGO_BIN_EXE_blockart"))
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to spawn blockart");
        CliOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Names of all files in the workspace, sorted
    pub fn files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.dir.path())
            .expect("Failed to list temp dir")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
