//! Adapters between image memory and the 4x4 blocks the codec works on.
//!
//! Single-channel images are read and written with a row stride in bytes. Four-channel images
//! are treated as tightly packed [`Color8888`] texels; only the red channel is compressed and
//! decoding replicates the value into all four channels.

use bc4_codec_common::{
    color_8888::Color8888, decoded_4x4_block::Decoded4x4Block,
    decoded_4x4_channel::Decoded4x4Channel,
};

/// Number of bytes a strided 4x4 single-channel read or write touches.
#[inline(always)]
pub const fn strided_block_extent(stride: usize) -> usize {
    stride * 3 + 4
}

/// Reads a 4x4 block of samples; row `r` starts at `src + r * stride`.
///
/// # Safety
///
/// `src` must be valid for reads of [`strided_block_extent`]`(stride)` bytes.
#[inline(always)]
pub unsafe fn read_channel_block_strided(src: *const u8, stride: usize) -> Decoded4x4Channel {
    let mut result = Decoded4x4Channel::default();
    for row in 0..4 {
        let row_src = src.add(row * stride).cast::<[u8; 4]>().read_unaligned();
        result.samples[row * 4..row * 4 + 4].copy_from_slice(&row_src);
    }
    result
}

/// Safely wraps [`read_channel_block_strided`].
///
/// # Returns
///
/// The block, else [`None`] if `src` is shorter than [`strided_block_extent`]`(stride)`.
#[inline]
pub fn read_channel_block_strided_from_slice(
    src: &[u8],
    stride: usize,
) -> Option<Decoded4x4Channel> {
    if src.len() < strided_block_extent(stride) {
        return None;
    }
    Some(unsafe { read_channel_block_strided(src.as_ptr(), stride) })
}

/// Writes a 4x4 block of samples; row `r` starts at `dst + r * stride`.
///
/// # Safety
///
/// `dst` must be valid for writes of [`strided_block_extent`]`(stride)` bytes.
#[inline(always)]
pub unsafe fn write_channel_block_strided(block: &Decoded4x4Channel, dst: *mut u8, stride: usize) {
    for row in 0..4 {
        let mut row_bytes = [0u8; 4];
        row_bytes.copy_from_slice(&block.samples[row * 4..row * 4 + 4]);
        dst.add(row * stride)
            .cast::<[u8; 4]>()
            .write_unaligned(row_bytes);
    }
}

/// Takes the red channel of each texel.
#[inline]
pub fn extract_red_channel(block: &Decoded4x4Block) -> Decoded4x4Channel {
    Decoded4x4Channel::from_samples(core::array::from_fn(|x| block.pixels[x].r))
}

/// Expands every sample into a greyscale texel (R = G = B = A).
#[inline]
pub fn replicate_channel(block: &Decoded4x4Channel) -> Decoded4x4Block {
    Decoded4x4Block {
        pixels: core::array::from_fn(|x| Color8888::splat(block.samples[x])),
    }
}
