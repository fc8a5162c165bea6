//! Error types for BC4 image operations.

use bc4_codec_common::allocate::AllocateError;
use thiserror::Error;

/// Errors that can occur during BC4 image compression and decompression.
#[derive(Debug, Error)]
pub enum Bc4Error {
    /// Width or height is zero, or the image size overflows `usize`.
    #[error("Invalid image dimensions: {width}x{height}.")]
    InvalidDimensions {
        /// Image width in pixels
        width: usize,
        /// Image height in pixels
        height: usize,
    },

    /// The dimensions are not multiples of 4 and [`crate::EdgePolicy::Error`] was requested.
    #[error("Image dimensions {width}x{height} are not multiples of 4 (BC4 tile size).")]
    UnalignedDimensions {
        /// Image width in pixels
        width: usize,
        /// Image height in pixels
        height: usize,
    },

    /// The image is smaller than one tile in some direction and [`crate::EdgePolicy::Drop`]
    /// leaves nothing to process.
    #[error("Image dimensions {width}x{height} contain no complete 4x4 tile.")]
    NoCompleteTiles {
        /// Image width in pixels
        width: usize,
        /// Image height in pixels
        height: usize,
    },

    /// The input buffer is too small for the given dimensions.
    #[error("Input buffer too small: need {needed} bytes, but only {actual} bytes available.")]
    InputBufferTooSmall {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// The output buffer is too small for the operation.
    #[error("Output buffer too small: need {needed} bytes, but only {actual} bytes available.")]
    OutputBufferTooSmall {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// Memory allocation failed.
    #[error("Memory allocation failed: {0}")]
    AllocationFailed(#[from] AllocateError),
}
