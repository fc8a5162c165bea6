//! RGBA8888 texel used by the four-channel BC4 entry points.

/// Represents a single RGBA8888 texel.
///
/// The layout matches interleaved `R, G, B, A` bytes in memory, so a slice of 4 bytes can be
/// read straight into this type.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color8888 {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Color8888 {
    /// Constructs a new [`Color8888`] from the specified red, green, blue, and alpha components.
    ///
    /// # Examples
    ///
    /// ```
    /// use bc4_codec_common::color_8888::Color8888;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.a, 255);
    /// ```
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Constructs a texel with every channel set to `value`.
    ///
    /// This is how a decoded single-channel sample is presented to four-channel consumers.
    ///
    /// # Examples
    ///
    /// ```
    /// use bc4_codec_common::color_8888::Color8888;
    ///
    /// assert_eq!(Color8888::splat(42), Color8888::new(42, 42, 42, 42));
    /// ```
    pub const fn splat(value: u8) -> Self {
        Self::new(value, value, value, value)
    }

    /// Builds a texel from `[R, G, B, A]` bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Returns the texel as `[R, G, B, A]` bytes.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
