use std::ptr;

use num::complex::Complex64;

use crate::error::{index_out_of_bounds, insufficient_length, validation_error, Result};
use crate::simd;

/// Starting slot of a strided complex vector in the BLAS convention.
///
/// A negative stride starts at the last logical element and walks backwards,
/// so that logical element 0 is always the one a positive-stride caller would
/// address first. Non-negative strides start at slot 0.
///
/// The result is in `f64` slots (two per complex element).
///
/// # Examples
///
/// ```
/// use zswap::start_offset;
///
/// assert_eq!(start_offset(1, 4), 0);
/// assert_eq!(start_offset(-1, 4), 6);
/// assert_eq!(start_offset(-2, 3), 8);
/// ```
#[inline(always)]
pub fn start_offset(stride: isize, n: isize) -> isize {
    if stride < 0 {
        2 * (1 - n) * stride
    } else {
        0
    }
}

/// Interchanges two complex double-precision vectors stored as interleaved
/// `(re, im)` pairs of `f64`.
///
/// This performs `x[i] <-> y[i]` for `n` elements, where logical element `i`
/// of `x` lives at slot `start_offset(stride_x, n) + 2 * i * stride_x` (and
/// likewise for `y`). It mirrors the reference BLAS `zswap` routine, including
/// its trust model: nothing is validated.
///
/// * `n <= 0` returns immediately without touching either buffer.
/// * If both strides are 1 the vectors are exchanged as two flat runs of
///   `2 * n` slots, using the SIMD kernel selected at build time.
/// * Any other stride combination, including negative or zero strides, walks
///   both vectors element by element.
///
/// # Safety
///
/// * For `n > 0`, `x` and `y` must be valid for reads and writes of every
///   slot the access pattern above touches.
/// * The two vectors must not overlap. Overlapping storage is not detected
///   and the result is unspecified.
/// * No other thread may access either buffer during the call.
#[inline]
pub unsafe fn zswap_unchecked(
    n: isize,
    x: *mut f64,
    stride_x: isize,
    y: *mut f64,
    stride_y: isize,
) {
    if n <= 0 {
        return;
    }
    debug_assert!(!x.is_null() && !y.is_null(), "zswap: null vector pointer");

    if stride_x == 1 && stride_y == 1 {
        // SAFETY: both vectors span 2 * n contiguous slots from their base.
        unsafe { swap_contiguous(n as usize, x, y) };
        return;
    }

    let ix = start_offset(stride_x, n);
    let iy = start_offset(stride_y, n);

    // SAFETY: forwarded caller contract.
    unsafe { swap_strided(n as usize, x, stride_x, ix, y, stride_y, iy) };
}

/// Interchanges two complex double-precision vectors using explicit starting
/// offsets instead of the BLAS start-offset convention.
///
/// Logical element `i` of `x` lives at slot `2 * (offset_x + i * stride_x)`.
/// The offset is always the first logical element, whatever the sign of the
/// stride; this is the addressing used by strided array libraries, where a
/// reversed view points at its last element in memory and steps backwards.
///
/// `n <= 0` is a no-op. Unit strides take the contiguous path starting at the
/// offsets.
///
/// # Safety
///
/// Same contract as [`zswap_unchecked`]: every touched slot must be valid for
/// reads and writes and the vectors must not overlap.
#[inline]
#[allow(clippy::too_many_arguments)]
pub unsafe fn zswap_ndarray_unchecked(
    n: isize,
    x: *mut f64,
    stride_x: isize,
    offset_x: isize,
    y: *mut f64,
    stride_y: isize,
    offset_y: isize,
) {
    if n <= 0 {
        return;
    }
    debug_assert!(!x.is_null() && !y.is_null(), "zswap: null vector pointer");

    let ix = 2 * offset_x;
    let iy = 2 * offset_y;

    if stride_x == 1 && stride_y == 1 {
        // SAFETY: both vectors span 2 * n contiguous slots from their offset.
        unsafe { swap_contiguous(n as usize, x.offset(ix), y.offset(iy)) };
        return;
    }

    // SAFETY: forwarded caller contract.
    unsafe { swap_strided(n as usize, x, stride_x, ix, y, stride_y, iy) };
}

/// Contiguous fast path: `n` complex elements are `2 * n` adjacent slots.
#[inline(always)]
unsafe fn swap_contiguous(n: usize, x: *mut f64, y: *mut f64) {
    unsafe { simd::swap_slots(x, y, 2 * n) };
}

/// General path. `ix` and `iy` are starting slots; each vector advances by
/// twice its own stride after every element.
///
/// The step and the offset past the last element are never dereferenced, so
/// they wrap instead of overflowing (a single element with a huge stride is a
/// valid request).
#[inline(always)]
unsafe fn swap_strided(
    n: usize,
    x: *mut f64,
    stride_x: isize,
    mut ix: isize,
    y: *mut f64,
    stride_y: isize,
    mut iy: isize,
) {
    let sx = stride_x.wrapping_mul(2);
    let sy = stride_y.wrapping_mul(2);

    for _ in 0..n {
        unsafe {
            ptr::swap(x.offset(ix), y.offset(iy));
            ptr::swap(x.offset(ix + 1), y.offset(iy + 1));
        }
        ix = ix.wrapping_add(sx);
        iy = iy.wrapping_add(sy);
    }
}

// Number of complex elements spanned by `n >= 1` elements at `stride`.
fn required_len(n: isize, stride: isize) -> Option<usize> {
    ((n - 1) as usize)
        .checked_mul(stride.unsigned_abs())?
        .checked_add(1)
}

fn check_extent(vector: &'static str, len: usize, n: isize, stride: isize) -> Result<()> {
    let required = required_len(n, stride).ok_or_else(|| {
        validation_error(format!(
            "{vector}: extent of n={n} elements with stride={stride} overflows usize"
        ))
    })?;

    if len < required {
        return Err(insufficient_length(vector, len, required, n, stride));
    }
    Ok(())
}

// With a fixed stride every index lies between the first and the last one.
fn check_indexed(
    vector: &'static str,
    len: usize,
    n: isize,
    stride: isize,
    offset: usize,
) -> Result<()> {
    let overflow = || {
        validation_error(format!(
            "{vector}: index arithmetic overflows isize (n={n}, stride={stride}, offset={offset})"
        ))
    };

    let first = isize::try_from(offset).map_err(|_| overflow())?;
    let last = (n - 1)
        .checked_mul(stride)
        .and_then(|span| span.checked_add(first))
        .ok_or_else(overflow)?;

    for index in [first, last] {
        if index < 0 || index as usize >= len {
            return Err(index_out_of_bounds(vector, index, len));
        }
    }
    Ok(())
}

/// Interchanges elements of two complex double-precision vectors, `x` and `y`,
/// returning an error instead of touching memory when the slices are too short.
///
/// This is the checked form of [`zswap_unchecked`] over `Complex64` slices:
///
/// * `n <= 0` is a no-op and always succeeds.
/// * Otherwise each slice must hold at least `1 + (n - 1) * |inc|` elements.
///   A zero increment only needs one element.
///
/// Because `x` and `y` are exclusive borrows they can never overlap.
///
/// # Errors
///
/// * [`ZswapError::InsufficientLength`](crate::ZswapError::InsufficientLength)
///   if either slice is shorter than its access pattern.
/// * [`ZswapError::ValidationError`](crate::ZswapError::ValidationError) if the
///   extent computation overflows.
///
/// # Examples
///
/// ```
/// use zswap::{try_zswap, Complex64};
///
/// let mut x = vec![Complex64::new(1.0, 2.0), Complex64::new(3.0, 4.0)];
/// let mut y = vec![Complex64::new(5.0, 6.0), Complex64::new(7.0, 8.0)];
///
/// try_zswap(2, &mut x, 1, &mut y, 1).unwrap();
///
/// assert_eq!(x, [Complex64::new(5.0, 6.0), Complex64::new(7.0, 8.0)]);
/// assert_eq!(y, [Complex64::new(1.0, 2.0), Complex64::new(3.0, 4.0)]);
/// ```
pub fn try_zswap(
    n: isize,
    x: &mut [Complex64],
    incx: isize,
    y: &mut [Complex64],
    incy: isize,
) -> Result<()> {
    if n <= 0 {
        return Ok(());
    }

    check_extent("x", x.len(), n, incx)?;
    check_extent("y", y.len(), n, incy)?;

    // SAFETY: `Complex64` is `#[repr(C)] { re, im }`, so each slice is an
    // interleaved run of `f64` slots; the extents were checked above and
    // distinct `&mut` borrows cannot overlap.
    unsafe {
        zswap_unchecked(
            n,
            x.as_mut_ptr().cast::<f64>(),
            incx,
            y.as_mut_ptr().cast::<f64>(),
            incy,
        )
    };
    Ok(())
}

/// Interchanges elements of two complex double-precision vectors, `x` and `y`.
///
/// This function performs the operation `x[i] <-> y[i]` for `n` elements,
/// considering strides `incx` and `incy`. A negative increment walks the
/// vector backwards starting from its last logical element.
///
/// It mirrors the functionality of the BLAS `zswap` routine.
///
/// # Panics
///
/// This function will panic if `n > 0` and the effective length required to
/// access `n` elements in `x` (or `y`) exceeds the slice length. See
/// [`try_zswap`] for the non-panicking form.
///
/// # Examples
///
/// ```
/// use zswap::{zswap, Complex64};
///
/// let c = Complex64::new;
/// let mut x = vec![c(1.0, 1.0), c(2.0, 2.0), c(3.0, 3.0)];
/// let mut y = vec![c(10.0, 0.0), c(20.0, 0.0), c(30.0, 0.0)];
///
/// zswap(3, &mut x, 1, &mut y, -1);
///
/// assert_eq!(x, [c(30.0, 0.0), c(20.0, 0.0), c(10.0, 0.0)]);
/// assert_eq!(y, [c(3.0, 3.0), c(2.0, 2.0), c(1.0, 1.0)]);
/// ```
pub fn zswap(n: isize, x: &mut [Complex64], incx: isize, y: &mut [Complex64], incy: isize) {
    if let Err(e) = try_zswap(n, x, incx, y, incy) {
        panic!("zswap: {e}");
    }
}

/// Checked swap over interleaved `(re, im)` storage held in plain `f64` slices.
///
/// A buffer of length `len` holds `len / 2` complex elements; an odd trailing
/// slot is never touched. Apart from that this behaves exactly like
/// [`try_zswap`].
///
/// # Errors
///
/// Same as [`try_zswap`], with lengths reported in complex elements.
pub fn zswap_interleaved(
    n: isize,
    x: &mut [f64],
    incx: isize,
    y: &mut [f64],
    incy: isize,
) -> Result<()> {
    if n <= 0 {
        return Ok(());
    }

    check_extent("x", x.len() / 2, n, incx)?;
    check_extent("y", y.len() / 2, n, incy)?;

    // SAFETY: extents checked above, borrows are disjoint.
    unsafe { zswap_unchecked(n, x.as_mut_ptr(), incx, y.as_mut_ptr(), incy) };
    Ok(())
}

/// Checked offset-addressed swap over `Complex64` slices.
///
/// Logical element `i` of `x` is `x[offset_x + i * incx]` (same for `y`); the
/// offset is the first logical element for either stride sign.
///
/// # Errors
///
/// * [`ZswapError::IndexOutOfBounds`](crate::ZswapError::IndexOutOfBounds) if
///   the first or the last logical element falls outside its slice.
/// * [`ZswapError::ValidationError`](crate::ZswapError::ValidationError) if the
///   index computation overflows.
///
/// # Examples
///
/// ```
/// use zswap::{try_zswap_ndarray, Complex64};
///
/// let c = |v: f64| Complex64::new(v, -v);
/// let mut x = vec![c(1.0), c(2.0), c(3.0), c(4.0)];
/// let mut y = vec![c(5.0), c(6.0)];
///
/// // x[3], x[1] <-> y[0], y[1]
/// try_zswap_ndarray(2, &mut x, -2, 3, &mut y, 1, 0).unwrap();
///
/// assert_eq!(x, [c(1.0), c(6.0), c(3.0), c(5.0)]);
/// assert_eq!(y, [c(4.0), c(2.0)]);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn try_zswap_ndarray(
    n: isize,
    x: &mut [Complex64],
    incx: isize,
    offset_x: usize,
    y: &mut [Complex64],
    incy: isize,
    offset_y: usize,
) -> Result<()> {
    if n <= 0 {
        return Ok(());
    }

    check_indexed("x", x.len(), n, incx, offset_x)?;
    check_indexed("y", y.len(), n, incy, offset_y)?;

    // SAFETY: every logical index was checked to lie inside its slice, so the
    // offsets fit in `isize`; borrows are disjoint.
    unsafe {
        zswap_ndarray_unchecked(
            n,
            x.as_mut_ptr().cast::<f64>(),
            incx,
            offset_x as isize,
            y.as_mut_ptr().cast::<f64>(),
            incy,
            offset_y as isize,
        )
    };
    Ok(())
}

/// Panicking form of [`try_zswap_ndarray`].
///
/// # Panics
///
/// If any logical element falls outside its slice.
#[allow(clippy::too_many_arguments)]
pub fn zswap_ndarray(
    n: isize,
    x: &mut [Complex64],
    incx: isize,
    offset_x: usize,
    y: &mut [Complex64],
    incy: isize,
    offset_y: usize,
) {
    if let Err(e) = try_zswap_ndarray(n, x, incx, offset_x, y, incy, offset_y) {
        panic!("zswap_ndarray: {e}");
    }
}
