//! C API error handling for BC4 operations.

use crate::error::Bc4Error;
use core::ffi::c_char;

/// C-compatible error codes for BC4 operations.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bc4ErrorCode {
    /// Operation succeeded
    Success = 0,
    /// Generic failure
    Fail = -1,
    /// Memory allocation failed
    OutOfMemory = 1,
    /// Null or otherwise invalid pointer provided
    InvalidPointer = 2,
}

impl From<Bc4Error> for Bc4ErrorCode {
    fn from(error: Bc4Error) -> Self {
        match error {
            Bc4Error::AllocationFailed(_) => Bc4ErrorCode::OutOfMemory,
            Bc4Error::InvalidDimensions { .. }
            | Bc4Error::UnalignedDimensions { .. }
            | Bc4Error::NoCompleteTiles { .. }
            | Bc4Error::InputBufferTooSmall { .. }
            | Bc4Error::OutputBufferTooSmall { .. } => Bc4ErrorCode::Fail,
        }
    }
}

/// Get a null-terminated string description of the error code.
///
/// The returned string is a static string literal that does not need to be freed.
///
/// # Safety
/// This function is safe to call with any error code value.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bc4_error_message(error_code: Bc4ErrorCode) -> *const c_char {
    match error_code {
        Bc4ErrorCode::Success => c"Success".as_ptr(),
        Bc4ErrorCode::Fail => c"Operation failed".as_ptr(),
        Bc4ErrorCode::OutOfMemory => c"Memory allocation failed".as_ptr(),
        Bc4ErrorCode::InvalidPointer => c"Null or invalid pointer provided".as_ptr(),
    }
}
