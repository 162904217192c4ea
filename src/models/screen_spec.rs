use crate::error::ConvertError;

/// Geometry of the target text screen, one pixel per character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSpec {
    pub width: u32,
    pub height: u32,
}

impl ScreenSpec {
    /// C64 text screen: 40x25 cells
    pub const C64: Self = Self {
        width: 40,
        height: 25,
    };

    /// Number of cells, which is also the number of DATA values emitted
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Validate that decoded dimensions match the screen exactly
    pub fn validate_dimensions(&self, width: u32, height: u32) -> Result<(), ConvertError> {
        if width != self.width || height != self.height {
            Err(ConvertError::SizeMismatch {
                expected_width: self.width,
                expected_height: self.height,
                width,
                height,
            })
        } else {
            Ok(())
        }
    }
}

impl Default for ScreenSpec {
    fn default() -> Self {
        Self::C64
    }
}
