use c64_dither::Palette;

use super::ScreenSpec;

/// Read-only state shared by every pipeline stage.
///
/// Built once at startup and passed by reference; the palette's
/// color-to-index table is computed here and never changes afterwards.
#[derive(Debug, Clone)]
pub struct Context {
    pub palette: Palette,
    pub screen: ScreenSpec,
}

impl Context {
    pub fn c64() -> Self {
        let palette = Palette::c64();
        tracing::debug!(colors = palette.len(), "Built palette lookup table");
        Self {
            palette,
            screen: ScreenSpec::C64,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::c64()
    }
}
