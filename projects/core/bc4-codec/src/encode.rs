//! BC4 (ATI1) encoding implementation.
//!
//! The encoder fits both interpolation modes to a block and keeps the one with the lower total
//! squared error:
//!
//! - 8-level: `A = max`, `B = min` of the whole block.
//! - 6-level: `A = min`, `B = max` of the samples that are neither `0` nor `255`. The fixed table
//!   entries cover the extremes, so the interpolated range can stay narrow. Only tried when such
//!   samples exist.
//!
//! On equal error the 8-level fit is kept. Each sample is then assigned the nearest table entry,
//! with ties going to the lowest code.

use crate::block::Bc4Block;
use crate::extract::{
    extract_red_channel, read_channel_block_strided, read_channel_block_strided_from_slice,
};
use crate::options::Bc4Options;
use crate::palette::{build_palette, nearest_index};
use bc4_codec_common::{
    decoded_4x4_block::Decoded4x4Block, decoded_4x4_channel::Decoded4x4Channel,
};

/// Encodes 16 samples into a BC4 block.
///
/// # Parameters
///
/// - `block`: The samples to encode, in row-major order
/// - `options`: Encoder options. Quality is accepted but does not currently change the output.
///
/// # Example
///
/// ```
/// use bc4_codec::{encode_bc4_block, Bc4Options};
/// use bc4_codec_common::decoded_4x4_channel::Decoded4x4Channel;
///
/// let block = encode_bc4_block(&Decoded4x4Channel::new(10), &Bc4Options::default());
/// assert_eq!(block.as_bytes(), &[10, 10, 0, 0, 0, 0, 0, 0]);
/// ```
#[inline]
pub fn encode_bc4_block(block: &Decoded4x4Channel, options: &Bc4Options) -> Bc4Block {
    let _quality = options.quality();

    let (lo, hi) = block.min_max();
    if lo == hi {
        return Bc4Block::from_parts(lo, lo, &[0; 16]);
    }

    let eight_level = fit_indices(block, hi, lo);
    if let Some((six_lo, six_hi)) = interior_min_max(block) {
        let six_level = fit_indices(block, six_lo, six_hi);
        if six_level.error < eight_level.error {
            return Bc4Block::from_parts(six_lo, six_hi, &six_level.indices);
        }
    }

    Bc4Block::from_parts(hi, lo, &eight_level.indices)
}

/// Reads a 4x4 block with the given row stride (in bytes) and encodes it.
///
/// # Safety
///
/// `src` must be valid for reads of `stride * 3 + 4` bytes.
#[inline]
pub unsafe fn encode_bc4_block_strided(
    src: *const u8,
    stride: usize,
    options: &Bc4Options,
) -> Bc4Block {
    let block = read_channel_block_strided(src, stride);
    encode_bc4_block(&block, options)
}

/// Safely wraps the unsafe [`encode_bc4_block_strided`] function for use with slices
///
/// # Returns
///
/// The encoded block, else [`None`] if `src` is too short for 4 rows at `stride`.
#[inline]
pub fn encode_bc4_block_strided_from_slice(
    src: &[u8],
    stride: usize,
    options: &Bc4Options,
) -> Option<Bc4Block> {
    read_channel_block_strided_from_slice(src, stride).map(|block| encode_bc4_block(&block, options))
}

/// Encodes the red channel of 16 texels. Green, blue and alpha are ignored.
#[inline]
pub fn encode_bc4_block_rgba(block: &Decoded4x4Block, options: &Bc4Options) -> Bc4Block {
    encode_bc4_block(&extract_red_channel(block), options)
}

struct IndexFit {
    indices: [u8; 16],
    error: u32,
}

#[inline(always)]
fn fit_indices(block: &Decoded4x4Channel, endpoint_a: u8, endpoint_b: u8) -> IndexFit {
    let palette = build_palette(endpoint_a, endpoint_b);
    let mut indices = [0u8; 16];
    let mut error = 0u32;
    for (index, &sample) in indices.iter_mut().zip(block.samples.iter()) {
        let (nearest, dist) = nearest_index(&palette, sample);
        *index = nearest;
        error += dist * dist;
    }
    IndexFit { indices, error }
}

/// Min and max of the samples strictly between 0 and 255.
#[inline(always)]
fn interior_min_max(block: &Decoded4x4Channel) -> Option<(u8, u8)> {
    block
        .samples
        .iter()
        .filter(|&&s| s != 0 && s != 255)
        .fold(None, |acc, &s| match acc {
            None => Some((s, s)),
            Some((lo, hi)) => Some((lo.min(s), hi.max(s))),
        })
}
