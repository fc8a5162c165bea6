//! Block-level compression and decompression for the BC4 C API.
//!
//! Every function accepts a null options handle, meaning default options for that call.
//! Data pointers are checked for null; their sizes are the caller's responsibility.

use super::error::Bc4ErrorCode;
use super::options::{resolve_options, Bc4COptions};
use bc4_codec::{
    decode_bc4_block, decode_bc4_block_rgba, encode_bc4_block_strided, BC4_BLOCK_SIZE,
};

/// Compress one 4x4 block of 8-bit samples.
///
/// Row `r` of the block is read from `src + r * stride`.
///
/// # Parameters
/// - `src`: Top-left sample of the block
/// - `stride`: Distance in bytes between the starts of consecutive rows
/// - `compressed`: Receives the 8-byte compressed block
/// - `options`: Encoder options, or null for defaults
///
/// # Returns
/// [`Bc4ErrorCode::InvalidPointer`] if `src` or `compressed` is null.
///
/// # Safety
/// - `src` must be valid for reads of `stride * 3 + 4` bytes
/// - `compressed` must be valid for writes of 8 bytes
/// - `options` must be null or a live handle from [`super::options::bc4_create_options()`]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bc4_compress_block(
    src: *const u8,
    stride: usize,
    compressed: *mut u8,
    options: *const Bc4COptions,
) -> Bc4ErrorCode {
    if src.is_null() || compressed.is_null() {
        return Bc4ErrorCode::InvalidPointer;
    }

    unsafe {
        let options = resolve_options(options);
        let block = encode_bc4_block_strided(src, stride, &options);
        compressed
            .cast::<[u8; BC4_BLOCK_SIZE]>()
            .write_unaligned(block.bytes);
    }
    Bc4ErrorCode::Success
}

/// Decompress one BC4 block into 16 single-channel samples (row-major).
///
/// # Returns
/// [`Bc4ErrorCode::InvalidPointer`] if `compressed` or `dst` is null.
///
/// # Safety
/// - `compressed` must be valid for reads of 8 bytes
/// - `dst` must be valid for writes of 16 bytes
///
/// The options handle is accepted for symmetry with [`bc4_compress_block`]; decoding has no
/// options.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bc4_decompress_block(
    compressed: *const u8,
    dst: *mut u8,
    _options: *const Bc4COptions,
) -> Bc4ErrorCode {
    if compressed.is_null() || dst.is_null() {
        return Bc4ErrorCode::InvalidPointer;
    }

    unsafe {
        let block = decode_bc4_block(compressed);
        dst.cast::<[u8; 16]>().write_unaligned(block.samples);
    }
    Bc4ErrorCode::Success
}

/// Decompress one BC4 block into 16 RGBA8888 texels with R = G = B = A.
///
/// # Returns
/// [`Bc4ErrorCode::InvalidPointer`] if `compressed` or `dst` is null.
///
/// # Safety
/// - `compressed` must be valid for reads of 8 bytes
/// - `dst` must be valid for writes of 64 bytes
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bc4_decompress_block_rgba(
    compressed: *const u8,
    dst: *mut u8,
    _options: *const Bc4COptions,
) -> Bc4ErrorCode {
    if compressed.is_null() || dst.is_null() {
        return Bc4ErrorCode::InvalidPointer;
    }

    unsafe {
        let block = decode_bc4_block_rgba(compressed);
        for (x, pixel) in block.pixels.iter().enumerate() {
            dst.add(x * 4)
                .cast::<[u8; 4]>()
                .write_unaligned(pixel.to_bytes());
        }
    }
    Bc4ErrorCode::Success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::c_api::options::{bc4_create_options, bc4_destroy_options, bc4_set_quality};
    use core::ptr;

    #[test]
    fn flat_block_round_trips_with_default_options() {
        let samples = [10u8; 16];
        let mut compressed = [0xFFu8; 8];
        let mut restored = [0u8; 16];
        unsafe {
            assert_eq!(
                bc4_compress_block(samples.as_ptr(), 4, compressed.as_mut_ptr(), ptr::null()),
                Bc4ErrorCode::Success
            );
            assert_eq!(compressed, [10, 10, 0, 0, 0, 0, 0, 0]);
            assert_eq!(
                bc4_decompress_block(compressed.as_ptr(), restored.as_mut_ptr(), ptr::null()),
                Bc4ErrorCode::Success
            );
        }
        assert_eq!(restored, samples);
    }

    #[test]
    fn compress_honours_stride() {
        // 4x4 block inside an 8 wide image, left half holds alternating extremes.
        let mut image = [7u8; 32];
        for row in 0..4 {
            for col in 0..4 {
                image[row * 8 + col] = if (row * 4 + col) % 2 == 0 { 0 } else { 255 };
            }
        }

        let mut compressed = [0u8; 8];
        let mut restored = [0u8; 16];
        unsafe {
            bc4_compress_block(image.as_ptr(), 8, compressed.as_mut_ptr(), ptr::null());
            bc4_decompress_block(compressed.as_ptr(), restored.as_mut_ptr(), ptr::null());
        }
        assert_eq!(&compressed[..2], &[255, 0]);
        for (x, &sample) in restored.iter().enumerate() {
            assert_eq!(sample, if x % 2 == 0 { 0 } else { 255 });
        }
    }

    #[test]
    fn explicit_options_give_same_bytes_as_defaults() {
        let samples: [u8; 16] = core::array::from_fn(|x| (x * 13) as u8);
        let mut with_defaults = [0u8; 8];
        let mut with_handle = [0u8; 8];

        unsafe {
            let mut options: *mut Bc4COptions = ptr::null_mut();
            bc4_create_options(&mut options);
            bc4_set_quality(options, 0.0);

            bc4_compress_block(samples.as_ptr(), 4, with_defaults.as_mut_ptr(), ptr::null());
            bc4_compress_block(samples.as_ptr(), 4, with_handle.as_mut_ptr(), options);
            bc4_destroy_options(options);
        }
        assert_eq!(with_defaults, with_handle);
    }

    #[test]
    fn rgba_decompress_replicates_channels() {
        let compressed = [200u8, 20, 0x88, 0xC6, 0xFA, 0x11, 0x22, 0x33];
        let mut single = [0u8; 16];
        let mut rgba = [0u8; 64];
        unsafe {
            bc4_decompress_block(compressed.as_ptr(), single.as_mut_ptr(), ptr::null());
            assert_eq!(
                bc4_decompress_block_rgba(compressed.as_ptr(), rgba.as_mut_ptr(), ptr::null()),
                Bc4ErrorCode::Success
            );
        }
        for (texel, &sample) in rgba.chunks_exact(4).zip(single.iter()) {
            assert_eq!(texel, &[sample; 4]);
        }
    }

    #[test]
    fn null_data_pointers_are_rejected() {
        let mut buffer = [0u8; 64];
        unsafe {
            assert_eq!(
                bc4_compress_block(ptr::null(), 4, buffer.as_mut_ptr(), ptr::null()),
                Bc4ErrorCode::InvalidPointer
            );
            assert_eq!(
                bc4_compress_block(buffer.as_ptr(), 4, ptr::null_mut(), ptr::null()),
                Bc4ErrorCode::InvalidPointer
            );
            assert_eq!(
                bc4_decompress_block(ptr::null(), buffer.as_mut_ptr(), ptr::null()),
                Bc4ErrorCode::InvalidPointer
            );
            assert_eq!(
                bc4_decompress_block_rgba(buffer.as_ptr(), ptr::null_mut(), ptr::null()),
                Bc4ErrorCode::InvalidPointer
            );
        }
    }
}
