//! Live cell enumeration for driving a view.

use crate::state::Lattice;

/// Writes live cell coordinates into a flat output buffer.
///
/// # Layout
/// Each live cell is written as three consecutive `i32`s `x, y, z`. Cells
/// are listed in z,y,x order (z changes slowest, x changes fastest), the
/// same order as `liveCells` in encoded payloads.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
/// - `out_buf` must point to a buffer of at least `3 * capacity` `i32`s
///
/// # Returns
/// Number of cells written (at most `capacity`), or 0 on error. Call
/// `vl_get_live_count` first to size the buffer.
#[no_mangle]
pub unsafe extern "C" fn vl_live_cells(
    ptr: *const Lattice,
    out_buf: *mut i32,
    capacity: u64,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let lattice = &*ptr;
    let capacity = (capacity as usize).min(lattice.live_count());
    let buf_slice = std::slice::from_raw_parts_mut(out_buf, capacity * 3);

    let mut written = 0;
    for (slot, cell) in buf_slice.chunks_exact_mut(3).zip(lattice.live_cells()) {
        slot.copy_from_slice(&cell);
        written += 1;
    }

    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::grid::vl_set_cell;
    use crate::ffi::lifecycle::{vl_create, vl_destroy, vl_get_live_count};
    use std::ptr;

    #[test]
    fn test_live_cells() {
        unsafe {
            let lattice = vl_create(8, 8, 8);

            vl_set_cell(lattice, 3, 2, 2, 1);
            vl_set_cell(lattice, 2, 2, 2, 1);
            vl_set_cell(lattice, 0, 0, 7, 1);

            let count = vl_get_live_count(lattice);
            let mut buffer = vec![-1i32; count as usize * 3];
            let written = vl_live_cells(lattice, buffer.as_mut_ptr(), count);

            assert_eq!(written, 3);
            assert_eq!(buffer, vec![2, 2, 2, 3, 2, 2, 0, 0, 7]);

            vl_destroy(lattice);
        }
    }

    #[test]
    fn test_live_cells_truncates_to_capacity() {
        unsafe {
            let lattice = vl_create(4, 4, 4);
            vl_set_cell(lattice, 0, 0, 0, 1);
            vl_set_cell(lattice, 1, 0, 0, 1);
            vl_set_cell(lattice, 2, 0, 0, 1);

            let mut buffer = vec![-1i32; 9];
            let written = vl_live_cells(lattice, buffer.as_mut_ptr(), 2);

            assert_eq!(written, 2);
            assert_eq!(&buffer[..6], &[0, 0, 0, 1, 0, 0]);
            // Past capacity is untouched
            assert_eq!(&buffer[6..], &[-1, -1, -1]);

            vl_destroy(lattice);
        }
    }

    #[test]
    fn test_empty_lattice() {
        unsafe {
            let lattice = vl_create(4, 4, 4);
            let mut buffer = vec![0i32; 12];
            assert_eq!(vl_live_cells(lattice, buffer.as_mut_ptr(), 4), 0);
            vl_destroy(lattice);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            let mut buffer = vec![0i32; 12];
            assert_eq!(vl_live_cells(ptr::null(), buffer.as_mut_ptr(), 4), 0);

            let lattice = vl_create(4, 4, 4);
            assert_eq!(vl_live_cells(lattice, ptr::null_mut(), 4), 0);
            vl_destroy(lattice);
        }
    }
}
