//! C FFI layer for host integration.
//!
//! This module exports C ABI functions for use from C or LuaJIT FFI.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `automaton` module. These functions are thin wrappers
//! that handle null checks, pointer safety, and C-to-Rust conversions.
//!
//! Status-returning functions use the `VL_*` codes below.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

pub mod cells;
pub mod codec;
pub mod grid;
pub mod lifecycle;
pub mod rule;

pub use cells::vl_live_cells;
pub use codec::{vl_decode, vl_encode, vl_forecast, vl_free_string, vl_paste_live_cells};
pub use grid::{
    vl_clear, vl_count_neighbors, vl_get_cell, vl_move_cell, vl_randomize, vl_resize,
    vl_set_cell, vl_step,
};
pub use lifecycle::{
    vl_create, vl_create_from_config, vl_destroy, vl_get_generation, vl_get_live_count,
    vl_get_size,
};
pub use rule::{vl_get_rule, vl_set_rule};

pub const VL_OK: i32 = 0;
pub const VL_ERR_NULL: i32 = 1;
pub const VL_ERR_CONFIG: i32 = 2;
pub const VL_ERR_FORMAT: i32 = 3;

/// Borrow a NUL-terminated UTF-8 string.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that outlives `'a`.
unsafe fn str_arg<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Hand a string to the caller. Free with `vl_free_string`.
fn into_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}
