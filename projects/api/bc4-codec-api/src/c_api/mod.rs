//! # C API (FFI) Documentation
//!
//! *Note: The C API is only available when the `c-exports` feature is enabled.*
//!
//! All functions are prefixed with `bc4_` and report their outcome through [`Bc4ErrorCode`]:
//!
//! | Code | Value | Meaning                          |
//! |------|-------|----------------------------------|
//! | `Success`        | `0`  | Operation succeeded       |
//! | `Fail`           | `-1` | Generic failure           |
//! | `OutOfMemory`    | `1`  | Options allocation failed |
//! | `InvalidPointer` | `2`  | Null pointer provided     |
//!
//! ## Example Usage
//!
//! ```c
//! uint8_t samples[16] = { 0 };
//! uint8_t compressed[8];
//! uint8_t restored[16];
//!
//! Bc4COptions* options = NULL;
//! if (bc4_create_options(&options) != 0) {
//!     return;
//! }
//! bc4_set_quality(options, 0.5f);
//!
//! bc4_compress_block(samples, 4, compressed, options);
//! bc4_decompress_block(compressed, restored, NULL);
//!
//! bc4_destroy_options(options);
//! ```
//!
//! ## Options
//!
//! - **`bc4_create_options(&options)`** - Allocate options with quality 1.0
//! - **`bc4_destroy_options(options)`** - Free options
//! - **`bc4_set_quality(options, quality)`** - Set quality, clamped into `[0, 1]`
//! - **`bc4_get_quality(options, &quality)`** - Read back the stored quality
//!
//! ## Block Operations
//!
//! Passing `NULL` for options uses the defaults for that call.
//!
//! - **`bc4_compress_block(src, stride, compressed, options)`** - Compress 4 rows of 4 samples
//! - **`bc4_decompress_block(compressed, dst, options)`** - Decompress into 16 samples
//! - **`bc4_decompress_block_rgba(compressed, dst, options)`** - Decompress into 16 RGBA texels
//!
//! ## Error Messages
//!
//! - **`bc4_error_message(code)`** - Static, null-terminated description of a code

pub mod block;
pub mod error;
pub mod options;

pub use error::Bc4ErrorCode;
pub use options::Bc4COptions;
