//! Whole-image BC4 compression and decompression.
//!
//! Images are cut into 4x4 tiles in row-major order. Tile `(x, y)` reads its samples starting at
//! `4 * (y * width + x)` (in samples or texels) and its compressed block lives at
//! `x * 8 + y * tiles_x * 8`. Tiles are independent, so with the `multithreaded` feature each row
//! of tiles is processed on the rayon thread pool. The output is byte-identical either way.
//!
//! What happens at the right and bottom edges when a dimension is not a multiple of 4 is chosen
//! with [`EdgePolicy`].

use crate::error::Bc4Error;
use bc4_codec::{
    decode_bc4_block, decode_bc4_block_rgba, encode_bc4_block, encode_bc4_block_rgba,
    encode_bc4_block_strided,
    extract::{strided_block_extent, write_channel_block_strided},
    Bc4Options, BC4_BLOCK_SIZE,
};
use bc4_codec_common::{
    allocate::allocate_align_64, color_8888::Color8888, decoded_4x4_block::Decoded4x4Block,
    decoded_4x4_channel::Decoded4x4Channel,
};
use core::{fmt, str::FromStr};
use safe_allocator_api::RawAlloc;
use thiserror::Error;
use tracing::debug;

/// Bytes per texel of a four-channel (RGBA8888) image.
pub const RGBA_BYTES_PER_TEXEL: usize = 4;

/// Handling of partial 4x4 tiles at the right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgePolicy {
    /// Skip partial tiles. The output covers `floor(width / 4) x floor(height / 4)` blocks.
    #[default]
    Drop,
    /// Fill partial tiles by repeating the nearest in-bounds sample. The output covers
    /// `ceil(width / 4) x ceil(height / 4)` blocks. Decompression writes only in-bounds pixels.
    Pad,
    /// Reject dimensions that are not multiples of 4.
    Error,
}

/// Error returned when parsing an unknown [`EdgePolicy`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown edge policy, expected one of: drop, pad, error")]
pub struct ParseEdgePolicyError;

impl FromStr for EdgePolicy {
    type Err = ParseEdgePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drop" => Ok(EdgePolicy::Drop),
            "pad" => Ok(EdgePolicy::Pad),
            "error" => Ok(EdgePolicy::Error),
            _ => Err(ParseEdgePolicyError),
        }
    }
}

impl fmt::Display for EdgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EdgePolicy::Drop => "drop",
            EdgePolicy::Pad => "pad",
            EdgePolicy::Error => "error",
        })
    }
}

/// Maps image coordinates to tile source and destination offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles_x: usize,
    tiles_y: usize,
}

impl TileGrid {
    /// Lays out the tiles of a `width x height` image under `policy`.
    ///
    /// # Errors
    ///
    /// - [`Bc4Error::InvalidDimensions`] if either dimension is zero or the image is too large
    /// - [`Bc4Error::UnalignedDimensions`] for [`EdgePolicy::Error`] with unaligned dimensions
    /// - [`Bc4Error::NoCompleteTiles`] for [`EdgePolicy::Drop`] when a dimension is below 4
    pub fn new(width: usize, height: usize, policy: EdgePolicy) -> Result<Self, Bc4Error> {
        let invalid = Bc4Error::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }

        // Reject anything whose RGBA buffer would not be addressable.
        let too_large = width
            .checked_mul(height)
            .and_then(|texels| texels.checked_mul(RGBA_BYTES_PER_TEXEL))
            .is_none();
        if too_large {
            return Err(invalid);
        }

        let (tiles_x, tiles_y) = match policy {
            EdgePolicy::Drop => (width / 4, height / 4),
            EdgePolicy::Pad => (width.div_ceil(4), height.div_ceil(4)),
            EdgePolicy::Error => {
                if width % 4 != 0 || height % 4 != 0 {
                    return Err(Bc4Error::UnalignedDimensions { width, height });
                }
                (width / 4, height / 4)
            }
        };

        if tiles_x == 0 || tiles_y == 0 {
            return Err(Bc4Error::NoCompleteTiles { width, height });
        }

        Ok(Self {
            width,
            height,
            tiles_x,
            tiles_y,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of tile columns.
    pub fn tiles_x(&self) -> usize {
        self.tiles_x
    }

    /// Number of tile rows.
    pub fn tiles_y(&self) -> usize {
        self.tiles_y
    }

    /// Total number of compressed blocks.
    pub fn block_count(&self) -> usize {
        self.tiles_x * self.tiles_y
    }

    /// Size of the compressed output in bytes.
    pub fn compressed_size(&self) -> usize {
        self.block_count() * BC4_BLOCK_SIZE
    }

    /// Number of samples (or texels) in the uncompressed image.
    pub fn sample_count(&self) -> usize {
        self.width * self.height
    }

    /// Byte offset of the compressed block for tile `(x, y)`.
    #[inline]
    pub fn destination_offset(&self, x: usize, y: usize) -> usize {
        x * BC4_BLOCK_SIZE + y * self.tiles_x * BC4_BLOCK_SIZE
    }

    /// Offset, in samples or texels, of the top-left pixel of tile `(x, y)`.
    #[inline]
    pub fn source_offset(&self, x: usize, y: usize) -> usize {
        4 * (y * self.width + x)
    }

    /// Whether all 16 pixels of tile `(x, y)` are inside the image.
    #[inline]
    pub fn is_full_tile(&self, x: usize, y: usize) -> bool {
        x * 4 + 4 <= self.width && y * 4 + 4 <= self.height
    }

    /// Position of pixel `(col, row)` of tile `(x, y)`, clamped into the image.
    #[inline]
    fn clamped_pixel_index(&self, x: usize, y: usize, col: usize, row: usize) -> usize {
        let px = (x * 4 + col).min(self.width - 1);
        let py = (y * 4 + row).min(self.height - 1);
        py * self.width + px
    }
}

/// Size in bytes of the compressed output for a `width x height` image.
///
/// # Errors
///
/// The same errors as [`TileGrid::new`].
///
/// # Examples
///
/// ```
/// use bc4_codec_api::{bc4_compressed_size, EdgePolicy};
///
/// assert_eq!(bc4_compressed_size(8, 8, EdgePolicy::Drop).unwrap(), 32);
/// assert_eq!(bc4_compressed_size(6, 5, EdgePolicy::Drop).unwrap(), 8);
/// assert_eq!(bc4_compressed_size(6, 5, EdgePolicy::Pad).unwrap(), 32);
/// assert!(bc4_compressed_size(6, 5, EdgePolicy::Error).is_err());
/// ```
pub fn bc4_compressed_size(
    width: usize,
    height: usize,
    policy: EdgePolicy,
) -> Result<usize, Bc4Error> {
    Ok(TileGrid::new(width, height, policy)?.compressed_size())
}

/// Compress a single-channel 8-bit image into BC4 blocks.
///
/// # Parameters
///
/// - `input`: `width * height` samples, row-major, no padding between rows
/// - `width`, `height`: Image dimensions in pixels
/// - `output`: Receives the compressed blocks; see [`bc4_compressed_size`]
/// - `options`: Encoder options
/// - `policy`: Handling of partial edge tiles
///
/// # Errors
///
/// - Any [`TileGrid::new`] error
/// - [`Bc4Error::InputBufferTooSmall`] if `input` holds fewer than `width * height` samples
/// - [`Bc4Error::OutputBufferTooSmall`] if `output` is smaller than the compressed size
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use bc4_codec::Bc4Options;
/// use bc4_codec_api::{compress_bc4_image, EdgePolicy};
///
/// let image = vec![42u8; 8 * 4];
/// let mut output = vec![0u8; 16];
/// compress_bc4_image(&image, 8, 4, &mut output, &Bc4Options::default(), EdgePolicy::Drop)?;
/// assert_eq!(&output[..2], &[42, 42]);
/// # Ok(())
/// # }
/// ```
pub fn compress_bc4_image(
    input: &[u8],
    width: usize,
    height: usize,
    output: &mut [u8],
    options: &Bc4Options,
    policy: EdgePolicy,
) -> Result<(), Bc4Error> {
    let grid = TileGrid::new(width, height, policy)?;
    validate_buffers(input.len(), grid.sample_count(), output.len(), grid.compressed_size())?;

    debug!(width, height, %policy, blocks = grid.block_count(), "compressing BC4 image");
    let row_len = grid.tiles_x() * BC4_BLOCK_SIZE;
    for_each_row(&mut output[..grid.compressed_size()], row_len, |ty, row| {
        compress_channel_row(input, &grid, ty, row, options)
    });
    Ok(())
}

/// Compress the red channel of an RGBA8888 image into BC4 blocks.
///
/// `input` holds `width * height` texels of 4 bytes each. Green, blue and alpha are ignored.
///
/// # Errors
///
/// The same as [`compress_bc4_image`], with the input size measured in texel bytes.
pub fn compress_bc4_image_rgba(
    input: &[u8],
    width: usize,
    height: usize,
    output: &mut [u8],
    options: &Bc4Options,
    policy: EdgePolicy,
) -> Result<(), Bc4Error> {
    let grid = TileGrid::new(width, height, policy)?;
    validate_buffers(
        input.len(),
        grid.sample_count() * RGBA_BYTES_PER_TEXEL,
        output.len(),
        grid.compressed_size(),
    )?;

    debug!(width, height, %policy, blocks = grid.block_count(), "compressing BC4 image from RGBA");
    let row_len = grid.tiles_x() * BC4_BLOCK_SIZE;
    for_each_row(&mut output[..grid.compressed_size()], row_len, |ty, row| {
        compress_rgba_row(input, &grid, ty, row, options)
    });
    Ok(())
}

/// Decompress BC4 blocks into a single-channel 8-bit image.
///
/// `output` receives `width * height` samples. With [`EdgePolicy::Drop`], pixels outside the
/// complete tiles are left untouched.
///
/// # Errors
///
/// - Any [`TileGrid::new`] error
/// - [`Bc4Error::InputBufferTooSmall`] if `input` is smaller than the compressed size
/// - [`Bc4Error::OutputBufferTooSmall`] if `output` holds fewer than `width * height` samples
pub fn decompress_bc4_image(
    input: &[u8],
    width: usize,
    height: usize,
    output: &mut [u8],
    policy: EdgePolicy,
) -> Result<(), Bc4Error> {
    let grid = TileGrid::new(width, height, policy)?;
    validate_buffers(input.len(), grid.compressed_size(), output.len(), grid.sample_count())?;

    debug!(width, height, %policy, blocks = grid.block_count(), "decompressing BC4 image");
    let row_len = width * 4;
    let covered = (grid.tiles_y() * row_len).min(grid.sample_count());
    for_each_row(&mut output[..covered], row_len, |ty, rows| {
        decompress_channel_row(input, &grid, ty, rows)
    });
    Ok(())
}

/// Decompress BC4 blocks into an RGBA8888 image, replicating each value into all four channels.
///
/// # Errors
///
/// The same as [`decompress_bc4_image`], with the output size measured in texel bytes.
pub fn decompress_bc4_image_rgba(
    input: &[u8],
    width: usize,
    height: usize,
    output: &mut [u8],
    policy: EdgePolicy,
) -> Result<(), Bc4Error> {
    let grid = TileGrid::new(width, height, policy)?;
    let output_size = grid.sample_count() * RGBA_BYTES_PER_TEXEL;
    validate_buffers(input.len(), grid.compressed_size(), output.len(), output_size)?;

    debug!(width, height, %policy, blocks = grid.block_count(), "decompressing BC4 image to RGBA");
    let row_len = width * 4 * RGBA_BYTES_PER_TEXEL;
    let covered = (grid.tiles_y() * row_len).min(output_size);
    for_each_row(&mut output[..covered], row_len, |ty, rows| {
        decompress_rgba_row(input, &grid, ty, rows)
    });
    Ok(())
}

/// Compress a single-channel image into a new 64-byte aligned buffer.
///
/// # Errors
///
/// - The errors of [`compress_bc4_image`], except for the output size check
/// - [`Bc4Error::AllocationFailed`] if memory allocation fails
pub fn compress_bc4_image_allocating(
    input: &[u8],
    width: usize,
    height: usize,
    options: &Bc4Options,
    policy: EdgePolicy,
) -> Result<RawAlloc, Bc4Error> {
    let mut output = allocate_align_64(bc4_compressed_size(width, height, policy)?)?;
    compress_bc4_image(input, width, height, output.as_mut_slice(), options, policy)?;
    Ok(output)
}

/// Compress the red channel of an RGBA8888 image into a new 64-byte aligned buffer.
///
/// # Errors
///
/// See [`compress_bc4_image_allocating`].
pub fn compress_bc4_image_rgba_allocating(
    input: &[u8],
    width: usize,
    height: usize,
    options: &Bc4Options,
    policy: EdgePolicy,
) -> Result<RawAlloc, Bc4Error> {
    let mut output = allocate_align_64(bc4_compressed_size(width, height, policy)?)?;
    compress_bc4_image_rgba(input, width, height, output.as_mut_slice(), options, policy)?;
    Ok(output)
}

/// Decompress BC4 blocks into a new 64-byte aligned single-channel image.
///
/// With [`EdgePolicy::Drop`] the uncovered edge pixels are zero.
///
/// # Errors
///
/// - The errors of [`decompress_bc4_image`], except for the output size check
/// - [`Bc4Error::AllocationFailed`] if memory allocation fails
pub fn decompress_bc4_image_allocating(
    input: &[u8],
    width: usize,
    height: usize,
    policy: EdgePolicy,
) -> Result<RawAlloc, Bc4Error> {
    let grid = TileGrid::new(width, height, policy)?;
    let mut output = allocate_align_64(grid.sample_count())?;
    if policy == EdgePolicy::Drop {
        output.as_mut_slice().fill(0);
    }
    decompress_bc4_image(input, width, height, output.as_mut_slice(), policy)?;
    Ok(output)
}

/// Decompress BC4 blocks into a new 64-byte aligned RGBA8888 image.
///
/// # Errors
///
/// See [`decompress_bc4_image_allocating`].
pub fn decompress_bc4_image_rgba_allocating(
    input: &[u8],
    width: usize,
    height: usize,
    policy: EdgePolicy,
) -> Result<RawAlloc, Bc4Error> {
    let grid = TileGrid::new(width, height, policy)?;
    let mut output = allocate_align_64(grid.sample_count() * RGBA_BYTES_PER_TEXEL)?;
    if policy == EdgePolicy::Drop {
        output.as_mut_slice().fill(0);
    }
    decompress_bc4_image_rgba(input, width, height, output.as_mut_slice(), policy)?;
    Ok(output)
}

fn validate_buffers(
    input_len: usize,
    input_needed: usize,
    output_len: usize,
    output_needed: usize,
) -> Result<(), Bc4Error> {
    if input_len < input_needed {
        return Err(Bc4Error::InputBufferTooSmall {
            needed: input_needed,
            actual: input_len,
        });
    }

    if output_len < output_needed {
        return Err(Bc4Error::OutputBufferTooSmall {
            needed: output_needed,
            actual: output_len,
        });
    }

    Ok(())
}

/// Runs `f(row_index, chunk)` for each `row_len` sized chunk of `buffer`.
#[cfg(feature = "multithreaded")]
fn for_each_row<F>(buffer: &mut [u8], row_len: usize, f: F)
where
    F: Fn(usize, &mut [u8]) + Sync + Send,
{
    use rayon::prelude::*;
    buffer
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(index, chunk)| f(index, chunk));
}

/// Runs `f(row_index, chunk)` for each `row_len` sized chunk of `buffer`.
#[cfg(not(feature = "multithreaded"))]
fn for_each_row<F>(buffer: &mut [u8], row_len: usize, f: F)
where
    F: Fn(usize, &mut [u8]),
{
    buffer
        .chunks_mut(row_len)
        .enumerate()
        .for_each(|(index, chunk)| f(index, chunk));
}

fn compress_channel_row(
    input: &[u8],
    grid: &TileGrid,
    ty: usize,
    row: &mut [u8],
    options: &Bc4Options,
) {
    for (tx, dst) in row.chunks_exact_mut(BC4_BLOCK_SIZE).enumerate() {
        let block = if grid.is_full_tile(tx, ty) {
            // Safety: the tile lies inside the image and `input` holds at least
            // `width * height` samples.
            unsafe {
                encode_bc4_block_strided(
                    input.as_ptr().add(grid.source_offset(tx, ty)),
                    grid.width(),
                    options,
                )
            }
        } else {
            let samples = core::array::from_fn(|x| {
                input[grid.clamped_pixel_index(tx, ty, x % 4, x / 4)]
            });
            encode_bc4_block(&Decoded4x4Channel::from_samples(samples), options)
        };
        dst.copy_from_slice(block.as_bytes());
    }
}

fn compress_rgba_row(
    input: &[u8],
    grid: &TileGrid,
    ty: usize,
    row: &mut [u8],
    options: &Bc4Options,
) {
    for (tx, dst) in row.chunks_exact_mut(BC4_BLOCK_SIZE).enumerate() {
        let pixels = core::array::from_fn(|x| {
            let offset = grid.clamped_pixel_index(tx, ty, x % 4, x / 4) * RGBA_BYTES_PER_TEXEL;
            let mut texel = [0u8; RGBA_BYTES_PER_TEXEL];
            texel.copy_from_slice(&input[offset..offset + RGBA_BYTES_PER_TEXEL]);
            Color8888::from_bytes(texel)
        });
        let block = encode_bc4_block_rgba(&Decoded4x4Block { pixels }, options);
        dst.copy_from_slice(block.as_bytes());
    }
}

/// Decodes tile row `ty` into `rows`, which starts at image row `ty * 4`.
fn decompress_channel_row(input: &[u8], grid: &TileGrid, ty: usize, rows: &mut [u8]) {
    let width = grid.width();
    for tx in 0..grid.tiles_x() {
        // Safety: `input` holds at least `compressed_size` bytes.
        let block = unsafe { decode_bc4_block(input.as_ptr().add(grid.destination_offset(tx, ty))) };

        let dst_offset = tx * 4;
        if grid.is_full_tile(tx, ty) && rows.len() >= dst_offset + strided_block_extent(width) {
            // Safety: bounds checked above.
            unsafe { write_channel_block_strided(&block, rows.as_mut_ptr().add(dst_offset), width) };
            continue;
        }

        for (x, &sample) in block.samples.iter().enumerate() {
            let (col, row) = (dst_offset + x % 4, x / 4);
            if col < width {
                if let Some(dst) = rows.get_mut(row * width + col) {
                    *dst = sample;
                }
            }
        }
    }
}

/// Decodes tile row `ty` into `rows` of RGBA texels, which starts at image row `ty * 4`.
fn decompress_rgba_row(input: &[u8], grid: &TileGrid, ty: usize, rows: &mut [u8]) {
    let width = grid.width();
    let row_bytes = width * RGBA_BYTES_PER_TEXEL;
    for tx in 0..grid.tiles_x() {
        // Safety: `input` holds at least `compressed_size` bytes.
        let block =
            unsafe { decode_bc4_block_rgba(input.as_ptr().add(grid.destination_offset(tx, ty))) };

        for (x, pixel) in block.pixels.iter().enumerate() {
            let (col, row) = (tx * 4 + x % 4, x / 4);
            if col >= width {
                continue;
            }
            let offset = row * row_bytes + col * RGBA_BYTES_PER_TEXEL;
            if let Some(dst) = rows.get_mut(offset..offset + RGBA_BYTES_PER_TEXEL) {
                dst.copy_from_slice(&pixel.to_bytes());
            }
        }
    }
}
