//! Exponential approximation
//!
//! Uses the classic exponent/mantissa split:
//!
//! ```text
//! n = round(x / ln 2)
//! r = x - n·ln 2            r ∈ [-ln2/2, ln2/2]
//! e^x = 2^n · e^r
//! ```
//!
//! `ln 2` is carried as a hi/lo pair. The hi part has enough trailing zero bits
//! that `n · LN2_HI` is exact for every `n` the clamped input can produce, so
//! the reduction loses nothing to cancellation. `e^r` comes from a degree-6
//! polynomial fitted on the reduced interval, and `2^n` is assembled directly
//! in the exponent field by [`scale_by_pow2`].
//!
//! # Error Bounds
//!
//! - Relative error on `[-10, 10]`: ~1e-7 (checked against
//!   [`EXP_TOLERANCE`](crate::EXP_TOLERANCE))
//! - Large positive `x` grows monotonically and saturates to `+∞`
//! - Large negative `x` decays through the subnormals to `0.0`
//! - NaN propagates
//!
//! # Example
//!
//! ```rust
//! use tonefill_math::exp;
//!
//! let envelope = exp(-5.0 * 0.1);
//! assert!((envelope - 0.606_530_66).abs() < 1e-5);
//!
//! assert_eq!(exp(1000.0), f32::INFINITY);
//! assert_eq!(exp(-1000.0), 0.0);
//! ```

#![allow(clippy::excessive_precision)]

use crate::bits::{round, scale_by_pow2};
use core::f32::consts::LOG2_E;

/// High part of ln 2; the low 9 mantissa bits are zero.
const LN2_HI: f32 = 6.931_457_519_531_25e-1;
/// ln 2 - LN2_HI
const LN2_LO: f32 = 1.428_606_765_330_187e-6;

/// Beyond ±192 every result is already `+∞` or `0`. Clamping keeps `n`
/// well inside `i32` and inside the two-step range of `scale_by_pow2`.
const INPUT_LIMIT: f32 = 192.0;

// e^r ≈ P0 + P1·r + ... + P6·r^6, r ∈ [-ln2/2, ln2/2]
const P0: f32 = 0.999_999_999_959_548_2;
const P1: f32 = 1.000_000_037_727_448_3;
const P2: f32 = 0.500_000_010_774_907_2;
const P3: f32 = 0.166_664_154_772_302_87;
const P4: f32 = 0.041_666_218_275_309_23;
const P5: f32 = 0.008_375_128_890_885_212;
const P6: f32 = 0.001_394_858_076_022_812_5;

/// Exponential approximation `e^x`
///
/// # Example
///
/// ```rust
/// use tonefill_math::exp;
///
/// assert_eq!(exp(0.0), 1.0);
/// assert!((exp(1.0) - core::f32::consts::E).abs() < 1e-6);
/// ```
#[inline(always)]
pub fn exp(x: f32) -> f32 {
    let x = x.clamp(-INPUT_LIMIT, INPUT_LIMIT);

    let n = round(x * LOG2_E);
    let r = (x - n * LN2_HI) - n * LN2_LO;

    let mut result = P6;
    result = P5 + r * result;
    result = P4 + r * result;
    result = P3 + r * result;
    result = P2 + r * result;
    result = P1 + r * result;
    result = P0 + r * result;

    // NaN casts to 0, leaving the NaN in `result` to propagate.
    scale_by_pow2(result, n as i32)
}
