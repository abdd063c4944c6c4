//! Swapping one-dimensional `ndarray` arrays and views.
//!
//! A 1-D `ndarray` view is exactly a strided complex vector: a pointer to its
//! first logical element plus a signed element stride. Reversed (`s![..;-1]`)
//! or stepped (`s![..;2]`) views are swapped in logical order through the
//! offset-addressed kernel without copying.

use ndarray::{ArrayBase, DataMut, Ix1};
use num::complex::Complex64;

use crate::error::{validation_error, Result};
use crate::linalg::blas::zswap::zswap_ndarray_unchecked;

/// Interchanges the elements of two equal-length complex arrays or views.
///
/// # Errors
///
/// [`ZswapError::ValidationError`](crate::ZswapError::ValidationError) if the
/// lengths differ; nothing is touched in that case.
///
/// # Examples
///
/// ```
/// use ndarray::{array, s};
/// use zswap::{zswap_view, Complex64};
///
/// let c = |v: f64| Complex64::new(v, 0.0);
/// let mut x = array![c(1.0), c(2.0), c(3.0)];
/// let mut y = array![c(4.0), c(5.0), c(6.0)];
///
/// zswap_view(&mut x.slice_mut(s![..;-1]), &mut y).unwrap();
///
/// assert_eq!(x, array![c(6.0), c(5.0), c(4.0)]);
/// assert_eq!(y, array![c(3.0), c(2.0), c(1.0)]);
/// ```
pub fn zswap_view<S1, S2>(x: &mut ArrayBase<S1, Ix1>, y: &mut ArrayBase<S2, Ix1>) -> Result<()>
where
    S1: DataMut<Elem = Complex64>,
    S2: DataMut<Elem = Complex64>,
{
    if x.len() != y.len() {
        return Err(validation_error(format!(
            "vectors must have the same length (x: {}, y: {})",
            x.len(),
            y.len()
        )));
    }

    let n = x.len() as isize;
    if n == 0 {
        return Ok(());
    }

    let stride_x = x.strides()[0];
    let stride_y = y.strides()[0];

    // SAFETY: `as_mut_ptr` points at logical element 0 and every element
    // `i * stride` from it belongs to the array. `Complex64` is
    // `#[repr(C)] { re, im }`. Two `&mut` arrays with `DataMut` storage cannot
    // share elements.
    unsafe {
        zswap_ndarray_unchecked(
            n,
            x.as_mut_ptr().cast::<f64>(),
            stride_x,
            0,
            y.as_mut_ptr().cast::<f64>(),
            stride_y,
            0,
        )
    };
    Ok(())
}
