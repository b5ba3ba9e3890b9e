//! Lattice creation, destruction, and counter queries.

use std::ffi::c_char;
use std::ptr;

use super::{str_arg, VL_ERR_NULL, VL_OK};
use crate::config::LatticeConfig;
use crate::state::Lattice;

/// Creates an all-dead lattice with the default rule and returns an opaque pointer.
///
/// # Returns
/// A pointer to a new Lattice, or null if any dimension is not positive.
///
/// # Safety
/// The returned pointer must eventually be freed with `vl_destroy()`.
#[no_mangle]
pub extern "C" fn vl_create(width: i32, height: i32, depth: i32) -> *mut Lattice {
    match Lattice::new(width, height, depth) {
        Ok(lattice) => Box::into_raw(Box::new(lattice)),
        Err(_) => ptr::null_mut(),
    }
}

/// Creates a lattice from a JSON configuration (see `LatticeConfig`).
///
/// # Safety
/// - `config` must be null or a NUL-terminated UTF-8 string
/// - The returned pointer must eventually be freed with `vl_destroy()`
///
/// # Returns
/// A pointer to a new Lattice, or null on a null or invalid configuration.
#[no_mangle]
pub unsafe extern "C" fn vl_create_from_config(config: *const c_char) -> *mut Lattice {
    let Some(text) = str_arg(config) else {
        return ptr::null_mut();
    };

    match LatticeConfig::from_json(text).and_then(|config| config.build()) {
        Ok(lattice) => Box::into_raw(Box::new(lattice)),
        Err(_) => ptr::null_mut(),
    }
}

/// Destroys a lattice and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `vl_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn vl_destroy(ptr: *mut Lattice) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the current generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn vl_get_generation(ptr: *const Lattice) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

/// Gets the number of live cells.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
///
/// # Returns
/// The live cell count, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn vl_get_live_count(ptr: *const Lattice) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).live_count() as u64
}

/// Writes the lattice dimensions to `out[0..3]`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
/// - `out` must be null or point to at least 3 writable `i32`s
#[no_mangle]
pub unsafe extern "C" fn vl_get_size(ptr: *const Lattice, out: *mut i32) -> i32 {
    if ptr.is_null() || out.is_null() {
        return VL_ERR_NULL;
    }

    let out = std::slice::from_raw_parts_mut(out, 3);
    out.copy_from_slice(&(*ptr).size());
    VL_OK
}
