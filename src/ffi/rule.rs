//! Rule queries and updates in `B/S` notation.

use std::ffi::c_char;
use std::ptr;

use super::{into_c_string, str_arg, VL_ERR_FORMAT, VL_ERR_NULL, VL_OK};
use crate::automaton::Rule;
use crate::state::Lattice;

/// Replaces the lattice's rule, e.g. with `"B6/S5,6"`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
/// - `notation` must be null or a NUL-terminated string
///
/// # Returns
/// `VL_OK`, `VL_ERR_NULL`, or `VL_ERR_FORMAT` if the notation doesn't parse.
/// On error the rule is unchanged.
#[no_mangle]
pub unsafe extern "C" fn vl_set_rule(ptr: *mut Lattice, notation: *const c_char) -> i32 {
    if ptr.is_null() || notation.is_null() {
        return VL_ERR_NULL;
    }
    let Some(notation) = str_arg(notation) else {
        return VL_ERR_FORMAT;
    };

    match notation.parse::<Rule>() {
        Ok(rule) => {
            (*ptr).set_rule(rule);
            VL_OK
        }
        Err(err) => err.status(),
    }
}

/// Gets the lattice's rule in `B/S` notation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Lattice, or null
///
/// # Returns
/// An owned string to be freed with `vl_free_string()`, or null.
#[no_mangle]
pub unsafe extern "C" fn vl_get_rule(ptr: *const Lattice) -> *mut c_char {
    if ptr.is_null() {
        return ptr::null_mut();
    }

    into_c_string((*ptr).rule().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::codec::vl_free_string;
    use crate::ffi::lifecycle::{vl_create, vl_destroy};
    use std::ffi::{CStr, CString};

    unsafe fn rule_of(lattice: *const Lattice) -> String {
        let s = vl_get_rule(lattice);
        let owned = CStr::from_ptr(s).to_str().unwrap().to_owned();
        vl_free_string(s);
        owned
    }

    #[test]
    fn test_get_and_set_rule() {
        unsafe {
            let lattice = vl_create(4, 4, 4);
            assert_eq!(rule_of(lattice), "B6/S5,6");

            let notation = CString::new("B4/S3,4").unwrap();
            assert_eq!(vl_set_rule(lattice, notation.as_ptr()), VL_OK);
            assert_eq!(rule_of(lattice), "B4/S3,4");

            let bad = CString::new("B4").unwrap();
            assert_eq!(vl_set_rule(lattice, bad.as_ptr()), VL_ERR_FORMAT);
            assert_eq!(rule_of(lattice), "B4/S3,4");

            vl_destroy(lattice);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            let notation = CString::new("B6/S5,6").unwrap();
            assert_eq!(vl_set_rule(ptr::null_mut(), notation.as_ptr()), VL_ERR_NULL);
            assert!(vl_get_rule(ptr::null()).is_null());

            let lattice = vl_create(2, 2, 2);
            assert_eq!(vl_set_rule(lattice, ptr::null()), VL_ERR_NULL);
            vl_destroy(lattice);
        }
    }
}
