//! C ABI entry points.
//!
//! Buffers are `void *` pointers to interleaved `(re, im)` pairs of `double`,
//! the layout used by C99 `double complex` and by array runtimes that hand
//! complex storage across a language boundary.
//!
//! The crate also builds as a `staticlib` (`libzswap.a`), so C code can link
//! `c_zswap` and `c_zswap_ndarray` directly.

use std::ffi::{c_int, c_void};

use crate::linalg::blas::zswap::{zswap_ndarray_unchecked, zswap_unchecked};

/// Interchanges two complex double-precision vectors.
///
/// ```c
/// void c_zswap(const int N, void *X, const int strideX, void *Y, const int strideY);
/// ```
///
/// # Safety
///
/// See [`zswap_unchecked`]: both buffers must cover every element the strides
/// address and must not overlap. `N <= 0` never dereferences the pointers.
#[no_mangle]
pub unsafe extern "C" fn c_zswap(
    n: c_int,
    x: *mut c_void,
    stride_x: c_int,
    y: *mut c_void,
    stride_y: c_int,
) {
    unsafe {
        zswap_unchecked(
            n as isize,
            x.cast::<f64>(),
            stride_x as isize,
            y.cast::<f64>(),
            stride_y as isize,
        )
    }
}

/// Interchanges two complex double-precision vectors using explicit starting
/// element offsets.
///
/// ```c
/// void c_zswap_ndarray(const int N, void *X, const int strideX, const int offsetX,
///                      void *Y, const int strideY, const int offsetY);
/// ```
///
/// # Safety
///
/// See [`zswap_ndarray_unchecked`].
#[no_mangle]
pub unsafe extern "C" fn c_zswap_ndarray(
    n: c_int,
    x: *mut c_void,
    stride_x: c_int,
    offset_x: c_int,
    y: *mut c_void,
    stride_y: c_int,
    offset_y: c_int,
) {
    unsafe {
        zswap_ndarray_unchecked(
            n as isize,
            x.cast::<f64>(),
            stride_x as isize,
            offset_x as isize,
            y.cast::<f64>(),
            stride_y as isize,
            offset_y as isize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_c_zswap_contiguous() {
        let mut x = [1.0, 2.0, 3.0, 4.0];
        let mut y = [5.0, 6.0, 7.0, 8.0];
        unsafe {
            c_zswap(
                2,
                x.as_mut_ptr().cast(),
                1,
                y.as_mut_ptr().cast(),
                1,
            )
        };
        assert_eq!(x, [5.0, 6.0, 7.0, 8.0]);
        assert_eq!(y, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_c_zswap_non_positive_n_ignores_null() {
        unsafe {
            c_zswap(0, ptr::null_mut(), 1, ptr::null_mut(), 1);
            c_zswap(-3, ptr::null_mut(), -1, ptr::null_mut(), 2);
        }
    }

    #[test]
    fn test_c_zswap_ndarray_reversed() {
        let mut x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut y = [0.0, 0.0, 0.0, 0.0];
        // x elements 2, 1 <-> y elements 0, 1
        unsafe {
            c_zswap_ndarray(
                2,
                x.as_mut_ptr().cast(),
                -1,
                2,
                y.as_mut_ptr().cast(),
                1,
                0,
            )
        };
        assert_eq!(x, [1.0, 2.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(y, [5.0, 6.0, 3.0, 4.0]);
    }
}
