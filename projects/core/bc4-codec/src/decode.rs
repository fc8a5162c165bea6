//! BC4 (ATI1) decoding implementation.
//!
//! The single-channel decoder ([`decode_bc4_block`]) produces a [`Decoded4x4Channel`]. The
//! four-channel decoder ([`decode_bc4_block_rgba`]) replicates each decoded sample into all four
//! channels of a [`Decoded4x4Block`], for pipelines that store full texels.

use crate::block::Bc4Block;
use crate::extract::replicate_channel;
use bc4_codec_common::{
    decoded_4x4_block::Decoded4x4Block, decoded_4x4_channel::Decoded4x4Channel,
};

/// Decodes a BC4 block into its 16 samples
///
/// # Parameters
///
/// - `src`: Pointer to the source BC4 block (must point to at least 8 bytes of valid memory)
///
/// # Returns
///
/// A [`Decoded4x4Channel`] containing all 16 decoded samples
///
/// # Safety
///
/// The caller must ensure that `src` points to at least 8 bytes of valid memory.
///
/// # Example
///
/// ```
/// use bc4_codec::decode_bc4_block;
///
/// let bc4_block = [10u8, 10, 0, 0, 0, 0, 0, 0];
///
/// unsafe {
///     let decoded = decode_bc4_block(bc4_block.as_ptr());
///     assert_eq!(decoded.samples, [10; 16]);
/// }
/// ```
#[inline(always)]
pub unsafe fn decode_bc4_block(src: *const u8) -> Decoded4x4Channel {
    let block = Bc4Block::from_bytes(src.cast::<[u8; 8]>().read_unaligned());
    decode_block(&block)
}

/// Safely wraps the unsafe [`decode_bc4_block`] function for use with slices
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is too short.
#[inline(always)]
pub fn decode_bc4_block_from_slice(src: &[u8]) -> Option<Decoded4x4Channel> {
    Bc4Block::from_slice(src).map(|block| decode_block(&block))
}

/// Decodes a BC4 block and replicates each sample into R, G, B and A.
///
/// # Safety
///
/// The caller must ensure that `src` points to at least 8 bytes of valid memory.
#[inline(always)]
pub unsafe fn decode_bc4_block_rgba(src: *const u8) -> Decoded4x4Block {
    replicate_channel(&decode_bc4_block(src))
}

/// Safely wraps the unsafe [`decode_bc4_block_rgba`] function for use with slices
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is too short.
#[inline(always)]
pub fn decode_bc4_block_rgba_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    decode_bc4_block_from_slice(src).map(|block| replicate_channel(&block))
}

impl Bc4Block {
    /// Decodes this block into its 16 samples.
    #[inline(always)]
    pub fn decode(&self) -> Decoded4x4Channel {
        decode_block(self)
    }
}

#[inline(always)]
fn decode_block(block: &Bc4Block) -> Decoded4x4Channel {
    let palette = block.palette();
    let bits = block.index_bits();

    let mut result = Decoded4x4Channel::default();
    // Compiler unrolls this!
    for (x, sample) in result.samples.iter_mut().enumerate() {
        *sample = palette[((bits >> (x * 3)) & 0b111) as usize];
    }

    result
}
