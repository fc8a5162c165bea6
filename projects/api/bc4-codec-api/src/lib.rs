#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "c-exports")]
extern crate alloc;

// Module declarations
pub mod error;
pub mod image;
pub mod options_builder;

/// C API functions for BC4 compression (enabled with c-exports feature)
#[cfg(feature = "c-exports")]
pub mod c_api;

// Re-export main functionality at crate root
pub use error::Bc4Error;
pub use image::{
    bc4_compressed_size, compress_bc4_image, compress_bc4_image_allocating,
    compress_bc4_image_rgba, compress_bc4_image_rgba_allocating, decompress_bc4_image,
    decompress_bc4_image_allocating, decompress_bc4_image_rgba,
    decompress_bc4_image_rgba_allocating, EdgePolicy, TileGrid,
};
pub use options_builder::Bc4OptionsBuilder;
