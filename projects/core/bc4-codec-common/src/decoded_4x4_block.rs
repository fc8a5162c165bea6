//! # Decoded 4x4 Block
//!
//! This module provides the [`Decoded4x4Block`] structure for representing 4x4 tiles of RGBA
//! texels, as consumed by the four-channel BC4 entry points and produced by the replicating
//! decoder.
//!
//! ## Usage
//!
//! ```
//! use bc4_codec_common::color_8888::Color8888;
//! use bc4_codec_common::decoded_4x4_block::Decoded4x4Block;
//!
//! // Create a block filled with grey texels
//! let block = Decoded4x4Block::new(Color8888::splat(128));
//! assert!(block.is_greyscale());
//! ```
//!
//! ## Memory Layout
//!
//! The pixels are stored in row-major order:
//! ```text
//! [ 0] [ 1] [ 2] [ 3]
//! [ 4] [ 5] [ 6] [ 7]
//! [ 8] [ 9] [10] [11]
//! [12] [13] [14] [15]
//! ```

use crate::color_8888::Color8888;

/// Represents a 4x4 block of RGBA8888 texels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded4x4Block {
    /// The 16 pixels in the block (row-major order)
    /// (i.e. `pixels[0]` is top-left, `pixels[3]` is top-right, etc.)
    pub pixels: [Color8888; 16],
}

impl Default for Decoded4x4Block {
    fn default() -> Self {
        Self::new(Color8888::default())
    }
}

impl Decoded4x4Block {
    /// Constructs a new block initialised with 16 copies of the provided pixel.
    ///
    /// # Examples
    ///
    /// ```
    /// use bc4_codec_common::color_8888::Color8888;
    /// use bc4_codec_common::decoded_4x4_block::Decoded4x4Block;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// let block = Decoded4x4Block::new(pixel);
    /// assert!(block.pixels.iter().all(|&p| p == pixel));
    /// ```
    pub const fn new(pixel: Color8888) -> Self {
        Self {
            pixels: [pixel; 16],
        }
    }

    /// Checks whether every texel has identical R, G, B and A components.
    ///
    /// Blocks produced by the replicating BC4 decoder always satisfy this.
    #[inline]
    pub fn is_greyscale(&self) -> bool {
        self.pixels
            .iter()
            .all(|p| p.r == p.g && p.g == p.b && p.b == p.a)
    }
}
