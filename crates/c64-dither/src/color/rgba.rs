//! 8-bit RGBA color type

use std::fmt;

/// A color with 8-bit red, green, blue and alpha channels.
///
/// Equality and hashing are byte-exact, which is what the palette's
/// color-to-index table relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Alpha channel (0 = transparent, 255 = opaque)
    pub a: u8,
}

impl Rgba {
    /// Create a color from all four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color.
    ///
    /// # Example
    /// ```
    /// use c64_dither::Rgba;
    /// let red = Rgba::from_u8(0x9f, 0x4e, 0x44);
    /// assert_eq!(red.a, 0xff);
    /// ```
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xff)
    }

    /// Create a color from a byte array [R, G, B, A].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a byte array [R, G, B, A].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns the color channels as [R, G, B].
    #[inline]
    pub const fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Returns the color with RGB scaled by alpha and alpha forced opaque.
    ///
    /// A fully transparent pixel becomes black.
    #[inline]
    pub fn premultiplied(self) -> Self {
        if self.a == 0xff {
            return self;
        }
        let scale = |c: u8| ((c as u16 * self.a as u16 + 127) / 255) as u8;
        Self::from_u8(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}
