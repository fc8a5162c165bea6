#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

/// The compressed 8-byte block and its interpolation mode.
pub mod block;
pub mod decode;
pub mod encode;
pub mod extract;
pub mod options;
pub mod palette;

pub use block::{Bc4Block, Bc4Mode, BC4_BLOCK_SIZE};
pub use decode::{
    decode_bc4_block, decode_bc4_block_from_slice, decode_bc4_block_rgba,
    decode_bc4_block_rgba_from_slice,
};
pub use encode::{
    encode_bc4_block, encode_bc4_block_rgba, encode_bc4_block_strided,
    encode_bc4_block_strided_from_slice,
};
pub use options::Bc4Options;

#[cfg(test)]
pub mod test_prelude;
