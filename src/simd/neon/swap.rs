use std::arch::aarch64::{vld1q_f64, vst1q_f64};

use crate::simd::scalar;

/// Number of f64 slots in a 128-bit register (one complex value).
pub(crate) const LANE_COUNT: usize = 2;

/// Slots handled per unrolled iteration.
const BLOCK: usize = 2 * LANE_COUNT;

/// Exchanges `len` consecutive `f64` slots between `x` and `y`, four slots per
/// iteration.
///
/// # Safety
///
/// Both pointers must be valid for reads and writes of `len` slots and the two
/// ranges must not overlap.
#[inline(always)]
pub unsafe fn swap_slots(x: *mut f64, y: *mut f64, len: usize) {
    let mut i = 0;

    // SAFETY (all blocks below): every access is at an index below `len`.
    while i + BLOCK <= len {
        unsafe {
            let x0 = vld1q_f64(x.add(i));
            let x1 = vld1q_f64(x.add(i + LANE_COUNT));
            let y0 = vld1q_f64(y.add(i));
            let y1 = vld1q_f64(y.add(i + LANE_COUNT));

            vst1q_f64(x.add(i), y0);
            vst1q_f64(x.add(i + LANE_COUNT), y1);
            vst1q_f64(y.add(i), x0);
            vst1q_f64(y.add(i + LANE_COUNT), x1);
        }
        i += BLOCK;
    }

    if i + LANE_COUNT <= len {
        unsafe {
            let x0 = vld1q_f64(x.add(i));
            let y0 = vld1q_f64(y.add(i));

            vst1q_f64(x.add(i), y0);
            vst1q_f64(y.add(i), x0);
        }
        i += LANE_COUNT;
    }

    if i < len {
        unsafe { scalar::swap_slots(x.add(i), y.add(i), len - i) };
    }
}
