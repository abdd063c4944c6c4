#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::scalar;

/// Number of f64 slots in a 256-bit register (two complex values).
pub(crate) const LANE_COUNT: usize = 4;

/// Slots handled per unrolled iteration.
const BLOCK: usize = 2 * LANE_COUNT;

/// Exchanges `len` consecutive `f64` slots between `x` and `y` using unaligned
/// 256-bit loads and stores, eight slots per iteration.
///
/// # Safety
///
/// The CPU must support AVX. Both pointers must be valid for reads and writes
/// of `len` slots and the two ranges must not overlap.
#[target_feature(enable = "avx")]
pub unsafe fn swap_slots(x: *mut f64, y: *mut f64, len: usize) {
    let mut i = 0;

    // SAFETY (all blocks below): every access is at an index below `len`.
    while i + BLOCK <= len {
        unsafe {
            let x0 = _mm256_loadu_pd(x.add(i));
            let x1 = _mm256_loadu_pd(x.add(i + LANE_COUNT));
            let y0 = _mm256_loadu_pd(y.add(i));
            let y1 = _mm256_loadu_pd(y.add(i + LANE_COUNT));

            _mm256_storeu_pd(x.add(i), y0);
            _mm256_storeu_pd(x.add(i + LANE_COUNT), y1);
            _mm256_storeu_pd(y.add(i), x0);
            _mm256_storeu_pd(y.add(i + LANE_COUNT), x1);
        }
        i += BLOCK;
    }

    if i + LANE_COUNT <= len {
        unsafe {
            let x0 = _mm256_loadu_pd(x.add(i));
            let y0 = _mm256_loadu_pd(y.add(i));

            _mm256_storeu_pd(x.add(i), y0);
            _mm256_storeu_pd(y.add(i), x0);
        }
        i += LANE_COUNT;
    }

    if i < len {
        unsafe { scalar::swap_slots(x.add(i), y.add(i), len - i) };
    }
}
