//! Builder pattern implementation for BC4 encoder options.

use bc4_codec::Bc4Options;

/// Builder for [`Bc4Options`] with convenient configuration methods.
///
/// Unset values fall back to the [`Bc4Options`] defaults when [`build`](Self::build) is called.
///
/// # Examples
///
/// ```
/// use bc4_codec_api::Bc4OptionsBuilder;
///
/// let options = Bc4OptionsBuilder::new().quality(0.25).build();
/// assert_eq!(options.quality(), 0.25);
///
/// // Out of range values are clamped.
/// let options = Bc4OptionsBuilder::new().quality(3.0).build();
/// assert_eq!(options.quality(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bc4OptionsBuilder {
    quality: Option<f32>,
}

impl Bc4OptionsBuilder {
    /// Create a new options builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the encoder quality. Clamped into `[0.0, 1.0]` when built.
    ///
    /// The current encoder produces identical output for every quality.
    pub fn quality(mut self, quality: f32) -> Self {
        self.quality = Some(quality);
        self
    }

    /// Set the quality in place. Used by the C API, which mutates a stored builder.
    pub fn set_quality(&mut self, quality: f32) {
        self.quality = Some(quality);
    }

    /// The quality the built options will carry.
    pub fn get_quality(&self) -> f32 {
        self.build().quality()
    }

    /// Build the options using the configured values or defaults.
    pub fn build(&self) -> Bc4Options {
        match self.quality {
            Some(quality) => Bc4Options::new().with_quality(quality),
            None => Bc4Options::default(),
        }
    }
}

impl From<Bc4Options> for Bc4OptionsBuilder {
    fn from(options: Bc4Options) -> Self {
        Self {
            quality: Some(options.quality()),
        }
    }
}
