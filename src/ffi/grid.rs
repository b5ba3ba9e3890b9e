//! Cell access, bulk mutation, and stepping.

use super::{VL_ERR_NULL, VL_OK};
use crate::state::Lattice;

/// Sets a cell to alive (non-zero) or dead (0).
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
///
/// Out-of-bounds coordinates are silently ignored.
#[no_mangle]
pub unsafe extern "C" fn vl_set_cell(ptr: *mut Lattice, x: i32, y: i32, z: i32, alive: u8) {
    if ptr.is_null() {
        return;
    }

    (*ptr).set(x, y, z, alive != 0);
}

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
///
/// # Returns
/// 0 if out of bounds, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn vl_get_cell(ptr: *const Lattice, x: i32, y: i32, z: i32) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    u8::from((*ptr).get(x, y, z))
}

/// Counts the live neighbors of a cell (0..=26).
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
#[no_mangle]
pub unsafe extern "C" fn vl_count_neighbors(ptr: *const Lattice, x: i32, y: i32, z: i32) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    (*ptr).count_live_neighbors(x, y, z)
}

/// Kills every cell and resets the generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
#[no_mangle]
pub unsafe extern "C" fn vl_clear(ptr: *mut Lattice) {
    if ptr.is_null() {
        return;
    }

    (*ptr).clear();
}

/// Fills the lattice at random; each cell is alive with probability `density`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
///
/// # Returns
/// `VL_OK`, `VL_ERR_NULL`, or `VL_ERR_CONFIG` if density is outside 0..=1.
#[no_mangle]
pub unsafe extern "C" fn vl_randomize(ptr: *mut Lattice, density: f64) -> i32 {
    if ptr.is_null() {
        return VL_ERR_NULL;
    }

    match (*ptr).randomize(density) {
        Ok(()) => VL_OK,
        Err(err) => err.status(),
    }
}

/// Advances the cellular automaton by one generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
#[no_mangle]
pub unsafe extern "C" fn vl_step(ptr: *mut Lattice) {
    if ptr.is_null() {
        return;
    }

    (*ptr).step();
}

/// Replaces the lattice with an empty one of the given size, keeping the rule.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
///
/// # Returns
/// `VL_OK`, `VL_ERR_NULL`, or `VL_ERR_CONFIG` for non-positive dimensions.
#[no_mangle]
pub unsafe extern "C" fn vl_resize(ptr: *mut Lattice, width: i32, height: i32, depth: i32) -> i32 {
    if ptr.is_null() {
        return VL_ERR_NULL;
    }

    match (*ptr).resize(width, height, depth) {
        Ok(()) => VL_OK,
        Err(err) => err.status(),
    }
}

/// Moves a live cell from one position to another.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
///
/// # Returns
/// 1 if moved; 0 if the source was dead, the target out of bounds, or ptr null.
#[no_mangle]
pub unsafe extern "C" fn vl_move_cell(
    ptr: *mut Lattice,
    from_x: i32,
    from_y: i32,
    from_z: i32,
    to_x: i32,
    to_y: i32,
    to_z: i32,
) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    u8::from((*ptr).move_cell([from_x, from_y, from_z], [to_x, to_y, to_z]))
}
