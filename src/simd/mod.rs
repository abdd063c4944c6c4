//! Contiguous swap kernels.
//!
//! The strided general path is plain pointer arithmetic and lives in
//! [`crate::linalg::blas::zswap`]. When both strides are 1 the two vectors are
//! flat runs of `f64` slots and can be exchanged with vector loads and stores;
//! this module picks the widest kernel the build script enabled:
//!
//! - `avx2`: 256-bit AVX loop (x86 / x86_64), see [`avx2`]
//! - `neon`: 128-bit Advanced SIMD loop (aarch64), see [`neon`]
//! - otherwise the pairwise scalar loop in [`scalar`]
//!
//! All kernels leave identical memory contents for non-overlapping buffers.

#[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
pub mod avx2;

#[cfg(all(neon, target_arch = "aarch64"))]
pub mod neon;

pub mod scalar;

/// Exchanges `len` consecutive `f64` slots between `x` and `y`.
///
/// # Safety
///
/// Both pointers must be valid for reads and writes of `len` slots and the two
/// ranges must not overlap.
#[inline(always)]
pub unsafe fn swap_slots(x: *mut f64, y: *mut f64, len: usize) {
    #[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
    {
        // SAFETY: the build script only sets `avx2` after detecting the
        // feature on the host CPU; pointer validity is the caller's contract.
        unsafe { avx2::swap::swap_slots(x, y, len) }
    }

    #[cfg(all(neon, target_arch = "aarch64"))]
    {
        // SAFETY: Advanced SIMD is baseline on aarch64.
        unsafe { neon::swap::swap_slots(x, y, len) }
    }

    #[cfg(not(any(
        all(avx2, any(target_arch = "x86", target_arch = "x86_64")),
        all(neon, target_arch = "aarch64")
    )))]
    {
        // SAFETY: forwarded caller contract.
        unsafe { scalar::swap_slots(x, y, len) }
    }
}
