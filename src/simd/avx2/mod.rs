//! AVX implementation of the contiguous swap for 256-bit registers.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel Haswell (2013+) or AMD Excavator (2015+)
//! - **Target Architecture**: x86 or x86_64
//! - **Runtime Detection**: The build system enables this module only when the
//!   host reports `avx2`; the kernel itself needs nothing beyond AVX loads and
//!   stores and is compiled with `#[target_feature(enable = "avx")]`
//!
//! # Conditional Compilation
//!
//! When AVX2 is not detected (or the build is a cross-compile) the crate falls
//! back to [`crate::simd::scalar`].

pub mod swap;
