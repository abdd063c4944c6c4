//! BLAS Level-1 routines on complex double-precision vectors.
//!
//! Complex values are stored as interleaved `(re, im)` pairs of `f64`, the
//! layout of [`num::complex::Complex64`]. Every entry point funnels into the
//! same two procedures: a contiguous fast path for unit strides and a strided
//! general path for everything else.

pub mod zswap;
