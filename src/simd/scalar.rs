//! Portable contiguous swap.

use std::ptr;

/// Exchanges `len` consecutive `f64` slots between `x` and `y`, one
/// (real, imaginary) pair per iteration.
///
/// # Safety
///
/// Both pointers must be valid for reads and writes of `len` slots and the two
/// ranges must not overlap.
#[inline(always)]
pub unsafe fn swap_slots(x: *mut f64, y: *mut f64, len: usize) {
    let pairs = len / 2;

    for p in 0..pairs {
        let i = 2 * p;
        // SAFETY: i + 1 < len, in bounds per the caller contract.
        unsafe {
            ptr::swap(x.add(i), y.add(i));
            ptr::swap(x.add(i + 1), y.add(i + 1));
        }
    }

    if len % 2 == 1 {
        let i = len - 1;
        // SAFETY: i < len.
        unsafe { ptr::swap(x.add(i), y.add(i)) };
    }
}
