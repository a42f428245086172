//! IEEE 754 bit-level helpers
//!
//! `core` has no rounding or scaling intrinsics for `f32` on `no_std` targets,
//! and the sandbox these kernels run in has no host math either. Everything here
//! works directly on the single-precision bit pattern:
//!
//! ```text
//! sign(1) | exponent(8) | mantissa(23)
//! ```
//!
//! # Example
//!
//! ```rust
//! use tonefill_math::bits::{round, scale_by_pow2, trunc};
//!
//! assert_eq!(trunc(-2.7), -2.0);
//! assert_eq!(round(2.5), 3.0);
//! assert_eq!(scale_by_pow2(1.5, 3), 12.0);
//! ```

const MANTISSA_BITS: u32 = 23;
const EXPONENT_MASK: u32 = 0xFF;
const EXPONENT_BIAS: i32 = 127;
const SIGN_MASK: u32 = 0x8000_0000;

/// Largest exponent of a normal `f32`.
const MAX_EXPONENT: i32 = 127;
/// Smallest exponent of a normal `f32`.
const MIN_EXPONENT: i32 = -126;

/// Unbiased exponent of `x` (128 for NaN/infinity, -127 for zero/subnormals).
#[inline(always)]
fn exponent_of(bits: u32) -> i32 {
    ((bits >> MANTISSA_BITS) & EXPONENT_MASK) as i32 - EXPONENT_BIAS
}

/// Absolute value by clearing the sign bit.
#[inline(always)]
pub fn abs(x: f32) -> f32 {
    f32::from_bits(x.to_bits() & !SIGN_MASK)
}

/// Round toward zero.
///
/// NaN, infinities and values that are already integral (|x| ≥ 2^23) are
/// returned unchanged. Values with |x| < 1 collapse to a zero carrying the
/// sign of `x`.
#[inline(always)]
pub fn trunc(x: f32) -> f32 {
    let bits = x.to_bits();
    let exponent = exponent_of(bits);

    if exponent >= MANTISSA_BITS as i32 {
        return x;
    }
    if exponent < 0 {
        return f32::from_bits(bits & SIGN_MASK);
    }

    let fraction_mask = (1u32 << (MANTISSA_BITS - exponent as u32)) - 1;
    f32::from_bits(bits & !fraction_mask)
}

/// Round to nearest, ties away from zero.
#[inline(always)]
pub fn round(x: f32) -> f32 {
    let whole = trunc(x);
    // Exact: the fractional part of an f32 is always representable.
    let fraction = x - whole;

    if fraction >= 0.5 {
        whole + 1.0
    } else if fraction <= -0.5 {
        whole - 1.0
    } else {
        whole
    }
}

/// `2^n` for `n` in the normal exponent range.
#[inline(always)]
fn pow2(n: i32) -> f32 {
    debug_assert!((MIN_EXPONENT..=MAX_EXPONENT).contains(&n));
    f32::from_bits(((n + EXPONENT_BIAS) as u32) << MANTISSA_BITS)
}

/// Multiply `x` by `2^n` without going through any host math.
///
/// The power of two is assembled directly in the exponent field. When `n`
/// falls outside the normal range the scaling is applied in two steps, so
/// results overflow cleanly to ±∞ and underflow gradually through the
/// subnormals to ±0 instead of wrapping.
#[inline(always)]
pub fn scale_by_pow2(x: f32, n: i32) -> f32 {
    let mut y = x;
    let mut n = n;

    if n > MAX_EXPONENT {
        y *= pow2(MAX_EXPONENT);
        n = (n - MAX_EXPONENT).min(MAX_EXPONENT);
    } else if n < MIN_EXPONENT {
        y *= pow2(MIN_EXPONENT);
        n = (n - MIN_EXPONENT).max(MIN_EXPONENT);
    }

    y * pow2(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trunc_rounds_toward_zero() {
        assert_eq!(trunc(2.7), 2.0);
        assert_eq!(trunc(-2.7), -2.0);
        assert_eq!(trunc(1.0), 1.0);
        assert_eq!(trunc(0.999), 0.0);
        assert_eq!(trunc(1234.5), 1234.0);
    }

    #[test]
    fn test_trunc_keeps_sign_of_small_values() {
        let negative_zero = trunc(-0.25);
        assert_eq!(negative_zero, 0.0);
        assert!(negative_zero.is_sign_negative());
        assert!(trunc(0.25).is_sign_positive());
    }

    #[test]
    fn test_trunc_passes_through_large_and_special_values() {
        assert_eq!(trunc(16_777_216.0), 16_777_216.0);
        assert_eq!(trunc(1e30), 1e30);
        assert_eq!(trunc(f32::INFINITY), f32::INFINITY);
        assert_eq!(trunc(f32::NEG_INFINITY), f32::NEG_INFINITY);
        assert!(trunc(f32::NAN).is_nan());
    }

    #[test]
    fn test_round_ties_away_from_zero() {
        assert_eq!(round(0.5), 1.0);
        assert_eq!(round(-0.5), -1.0);
        assert_eq!(round(2.5), 3.0);
        assert_eq!(round(2.49), 2.0);
        assert_eq!(round(-2.51), -3.0);
        assert!(round(f32::NAN).is_nan());
        assert_eq!(round(f32::INFINITY), f32::INFINITY);
    }

    #[test]
    fn test_abs_clears_sign() {
        assert_eq!(abs(-3.5), 3.5);
        assert_eq!(abs(3.5), 3.5);
        assert!(abs(-0.0).is_sign_positive());
    }

    #[test]
    fn test_scale_by_pow2_normal_range() {
        assert_eq!(scale_by_pow2(1.0, 0), 1.0);
        assert_eq!(scale_by_pow2(1.0, 10), 1024.0);
        assert_eq!(scale_by_pow2(3.0, -1), 1.5);
        assert_eq!(scale_by_pow2(-1.0, 4), -16.0);
    }

    #[test]
    fn test_scale_by_pow2_saturates() {
        // 0.75 * 2^128 = 1.5 * 2^127, still finite
        assert_eq!(scale_by_pow2(0.75, 128), f32::from_bits(0x7F40_0000));
        assert_eq!(scale_by_pow2(1.0, 300), f32::INFINITY);
        assert_eq!(scale_by_pow2(-1.0, 300), f32::NEG_INFINITY);
        assert_eq!(scale_by_pow2(1.0, -300), 0.0);
    }

    #[test]
    fn test_scale_by_pow2_reaches_subnormals() {
        let tiny = scale_by_pow2(1.0, -140);
        assert!(tiny > 0.0);
        assert!(!tiny.is_normal());
        assert_eq!(tiny, f32::from_bits(1 << 9));
    }
}
