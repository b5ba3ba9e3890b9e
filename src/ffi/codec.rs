//! Payload encoding, decoding, and live cell paste.

use std::ffi::{c_char, CString};
use std::ptr;

use super::{into_c_string, str_arg, VL_ERR_FORMAT, VL_ERR_NULL, VL_OK};
use crate::automaton;
use crate::state::Lattice;

/// Encodes the lattice as a JSON payload (`size`, `liveCells`, `rules`).
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
///
/// # Returns
/// An owned NUL-terminated string to be freed with `vl_free_string()`,
/// or null if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn vl_encode(ptr: *const Lattice) -> *mut c_char {
    if ptr.is_null() {
        return ptr::null_mut();
    }

    match automaton::to_json(&*ptr) {
        Ok(json) => into_c_string(json),
        Err(_) => ptr::null_mut(),
    }
}

/// Replaces the lattice with a decoded JSON payload.
///
/// The lattice is only replaced if the whole payload is valid.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
/// - `json` must be null or a NUL-terminated string
///
/// # Returns
/// `VL_OK`, `VL_ERR_NULL`, `VL_ERR_CONFIG` for bad dimensions, or
/// `VL_ERR_FORMAT` for anything else wrong with the payload.
#[no_mangle]
pub unsafe extern "C" fn vl_decode(ptr: *mut Lattice, json: *const c_char) -> i32 {
    if ptr.is_null() || json.is_null() {
        return VL_ERR_NULL;
    }
    let Some(text) = str_arg(json) else {
        return VL_ERR_FORMAT;
    };

    match (*ptr).load_json(text) {
        Ok(()) => VL_OK,
        Err(err) => err.status(),
    }
}

/// Sets cells alive from pasted text such as `[2,2,1],[2,3,2]`.
///
/// Malformed or out-of-range entries are skipped.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
/// - `text` must be null or a NUL-terminated string
///
/// # Returns
/// The number of cells applied, or a negated status code on error.
#[no_mangle]
pub unsafe extern "C" fn vl_paste_live_cells(ptr: *mut Lattice, text: *const c_char) -> i64 {
    if ptr.is_null() || text.is_null() {
        return -i64::from(VL_ERR_NULL);
    }
    let Some(text) = str_arg(text) else {
        return -i64::from(VL_ERR_FORMAT);
    };

    match automaton::paste_live_cells(&mut *ptr, text) {
        Ok(applied) => applied as i64,
        Err(err) => -i64::from(err.status()),
    }
}

/// Encodes the next-step forecast as JSON:
/// `{"survive": [[x,y,z],...], "die": [...], "born": [...]}`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
///
/// # Returns
/// An owned string to be freed with `vl_free_string()`, or null.
#[no_mangle]
pub unsafe extern "C" fn vl_forecast(ptr: *const Lattice) -> *mut c_char {
    if ptr.is_null() {
        return ptr::null_mut();
    }

    match serde_json::to_string(&automaton::forecast(&*ptr)) {
        Ok(json) => into_c_string(json),
        Err(_) => ptr::null_mut(),
    }
}

/// Frees a string returned by this library.
///
/// # Safety
/// - `s` must be null or a pointer returned by `vl_encode`, `vl_forecast`
///   or `vl_get_rule`, not yet freed
#[no_mangle]
pub unsafe extern "C" fn vl_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
