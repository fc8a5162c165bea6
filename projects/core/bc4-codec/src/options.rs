//! Encoder options.
//!
//! [`Bc4Options`] carries the quality scalar accepted by the encoder. The value is validated and
//! threaded through every encode call, but the current block fitter produces the same bytes for
//! every quality. It is kept as the extension point for rate/quality trade-offs.

/// Quality assigned to freshly created options.
pub const DEFAULT_QUALITY: f32 = 1.0;

/// Options accepted by the BC4 encoder.
///
/// The quality is clamped into `[0.0, 1.0]` on every write, so a constructed [`Bc4Options`]
/// always holds a valid value.
///
/// # Examples
///
/// ```
/// use bc4_codec::Bc4Options;
///
/// let mut options = Bc4Options::default();
/// assert_eq!(options.quality(), 1.0);
///
/// options.set_quality(2.0);
/// assert_eq!(options.quality(), 1.0);
///
/// options.set_quality(-1.0);
/// assert_eq!(options.quality(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bc4Options {
    quality: f32,
}

impl Default for Bc4Options {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
        }
    }
}

impl Bc4Options {
    /// Creates options with the default quality.
    pub const fn new() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
        }
    }

    /// Returns these options with the quality replaced by `quality` (clamped to `[0.0, 1.0]`).
    pub fn with_quality(mut self, quality: f32) -> Self {
        self.set_quality(quality);
        self
    }

    /// The stored quality, always within `[0.0, 1.0]`.
    #[inline]
    pub const fn quality(&self) -> f32 {
        self.quality
    }

    /// Clamps `quality` into `[0.0, 1.0]` and stores it.
    ///
    /// NaN is stored as `0.0`.
    #[inline]
    pub fn set_quality(&mut self, quality: f32) {
        self.quality = clamp_quality(quality);
    }
}

/// Clamps a quality value into `[0.0, 1.0]`, mapping NaN to `0.0`.
#[inline]
pub fn clamp_quality(quality: f32) -> f32 {
    if quality > 1.0 {
        1.0
    } else if quality >= 0.0 {
        quality
    } else {
        0.0
    }
}
