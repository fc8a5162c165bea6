//! Options lifecycle for the BC4 C API.
//!
//! Options are an opaque handle owned by the caller. Reads may happen from several threads at
//! once; writes ([`bc4_set_quality`], [`bc4_destroy_options`]) need external synchronization.

use super::error::Bc4ErrorCode;
use crate::options_builder::Bc4OptionsBuilder;
use alloc::alloc::{alloc, dealloc, Layout};
use bc4_codec::Bc4Options;
use core::ptr;
use tracing::trace;

/// Opaque options handle for BC4 block operations.
///
/// - Created with [`bc4_create_options()`]
/// - Configured with [`bc4_set_quality()`]
/// - Freed with [`bc4_destroy_options()`]
#[repr(C)]
pub struct Bc4COptions {
    // Private field to ensure it's opaque
    _private: [u8; 0],
}

/// Internal representation of the options handle
pub(crate) struct Bc4COptionsInner {
    pub(crate) builder: Bc4OptionsBuilder,
}

/// Create a new options handle with default settings (quality 1.0).
///
/// On success `*options` receives the handle, which must be freed with
/// [`bc4_destroy_options()`].
///
/// # Returns
/// - [`Bc4ErrorCode::InvalidPointer`] if `options` is null
/// - [`Bc4ErrorCode::OutOfMemory`] if allocation fails; `*options` is set to null
///
/// # Safety
/// - `options` must be null or valid for writes of one pointer
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bc4_create_options(options: *mut *mut Bc4COptions) -> Bc4ErrorCode {
    if options.is_null() {
        return Bc4ErrorCode::InvalidPointer;
    }

    let layout = Layout::new::<Bc4COptionsInner>();
    // Safety: the layout is non-zero sized.
    let inner = unsafe { alloc(layout) } as *mut Bc4COptionsInner;
    if inner.is_null() {
        unsafe { *options = ptr::null_mut() };
        return Bc4ErrorCode::OutOfMemory;
    }

    unsafe {
        inner.write(Bc4COptionsInner {
            builder: Bc4OptionsBuilder::new(),
        });
        *options = inner as *mut Bc4COptions;
    }
    trace!("created BC4 options handle");
    Bc4ErrorCode::Success
}

/// Free an options handle.
///
/// # Returns
/// [`Bc4ErrorCode::InvalidPointer`] if `options` is null.
///
/// # Safety
/// - `options` must be null or a handle returned by [`bc4_create_options()`]
/// - `options` must not have been freed already
/// - After calling this function, `options` becomes invalid
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bc4_destroy_options(options: *mut Bc4COptions) -> Bc4ErrorCode {
    if options.is_null() {
        return Bc4ErrorCode::InvalidPointer;
    }

    let inner = options as *mut Bc4COptionsInner;
    unsafe {
        ptr::drop_in_place(inner);
        dealloc(inner as *mut u8, Layout::new::<Bc4COptionsInner>());
    }
    trace!("destroyed BC4 options handle");
    Bc4ErrorCode::Success
}

/// Set the encoder quality, clamped into `[0.0, 1.0]`. NaN is stored as `0.0`.
///
/// # Returns
/// [`Bc4ErrorCode::InvalidPointer`] if `options` is null.
///
/// # Safety
/// - `options` must be null or a live handle from [`bc4_create_options()`]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bc4_set_quality(options: *mut Bc4COptions, quality: f32) -> Bc4ErrorCode {
    if options.is_null() {
        return Bc4ErrorCode::InvalidPointer;
    }

    let inner = unsafe { &mut *(options as *mut Bc4COptionsInner) };
    inner.builder.set_quality(quality);
    Bc4ErrorCode::Success
}

/// Read back the stored encoder quality.
///
/// # Returns
/// [`Bc4ErrorCode::InvalidPointer`] if either pointer is null.
///
/// # Safety
/// - `options` must be null or a live handle from [`bc4_create_options()`]
/// - `quality` must be null or valid for writes of one `f32`
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bc4_get_quality(
    options: *const Bc4COptions,
    quality: *mut f32,
) -> Bc4ErrorCode {
    if options.is_null() || quality.is_null() {
        return Bc4ErrorCode::InvalidPointer;
    }

    let inner = unsafe { &*(options as *const Bc4COptionsInner) };
    unsafe { *quality = inner.builder.get_quality() };
    Bc4ErrorCode::Success
}

/// Resolve a possibly null handle into options for a single call.
///
/// A null handle yields [`Bc4Options::default()`].
///
/// # Safety
/// - `options` must be null or a live handle from [`bc4_create_options()`]
pub(crate) unsafe fn resolve_options(options: *const Bc4COptions) -> Bc4Options {
    if options.is_null() {
        return Bc4Options::default();
    }

    let inner = unsafe { &*(options as *const Bc4COptionsInner) };
    inner.builder.build()
}
