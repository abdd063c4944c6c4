//! # zswap
//!
//! The BLAS Level-1 `zswap` routine: in-place interchange of two complex
//! double-precision vectors, each with its own signed element stride.
//!
//! Complex values use the interleaved `(re, im)` layout of
//! [`Complex64`](num::complex::Complex64), so buffers can be shared with C or
//! array runtimes without conversion.
//!
//! ## Entry points
//!
//! | Function | Input | Checks |
//! |---|---|---|
//! | [`zswap`] / [`try_zswap`] | `&mut [Complex64]`, BLAS strides | extents (panic / `Result`) |
//! | [`zswap_ndarray`] / [`try_zswap_ndarray`] | `&mut [Complex64]`, strides + offsets | index range |
//! | [`zswap_interleaved`] | `&mut [f64]` interleaved storage | extents |
//! | [`zswap_view`] | 1-D `ndarray` arrays and views | equal lengths |
//! | [`zswap_unchecked`] / [`zswap_ndarray_unchecked`] | raw `*mut f64` | none (`unsafe`) |
//! | [`ffi::c_zswap`] / [`ffi::c_zswap_ndarray`] | C ABI | none (`unsafe`) |
//!
//! ## Performance
//!
//! When both strides are 1 the vectors are exchanged as flat runs of `f64`
//! with the widest kernel the build script detected (AVX on x86, NEON on
//! aarch64, scalar otherwise). Set `ZSWAP_FORCE_FALLBACK` at build time to
//! force the scalar kernel.
//!
//! ## Example
//!
//! ```
//! use zswap::{zswap, Complex64};
//!
//! let mut x = vec![Complex64::new(1.0, 2.0), Complex64::new(3.0, 4.0)];
//! let mut y = vec![Complex64::new(5.0, 6.0), Complex64::new(7.0, 8.0)];
//!
//! zswap(2, &mut x, 1, &mut y, 1);
//!
//! assert_eq!(x[0], Complex64::new(5.0, 6.0));
//! assert_eq!(y[1], Complex64::new(3.0, 4.0));
//! ```

pub mod error;
pub mod ffi;
pub mod linalg;
pub mod simd;

pub use error::{Result, ZswapError};
pub use linalg::blas::zswap::{
    start_offset, try_zswap, try_zswap_ndarray, zswap, zswap_interleaved, zswap_ndarray,
    zswap_ndarray_unchecked, zswap_unchecked,
};
pub use linalg::view::zswap_view;
pub use num::complex::Complex64;
