//! ARM NEON implementation of the contiguous swap for 128-bit registers.
//!
//! Advanced SIMD is part of the AArch64 baseline, so the kernel runs on every
//! 64-bit ARM target (Apple Silicon, AWS Graviton, modern Android devices).
//! The build system enables this module for native aarch64 builds; other
//! targets use [`crate::simd::scalar`].

pub mod swap;
