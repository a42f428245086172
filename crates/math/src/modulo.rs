//! Truncated floating-point remainder
//!
//! `modulo(x, y) = x - y * trunc(x / y)`.
//!
//! This is remainder semantics, not floor-mod: the sign of the result follows
//! the dividend `x`, never the divisor `y`. A zero divisor is not an error;
//! `x / 0` produces ±∞ or NaN and the NaN propagates into the result.
//!
//! Besides being a public primitive, `modulo` is the range reducer behind
//! [`cos`](crate::cos) and [`sin`](crate::sin).
//!
//! # Example
//!
//! ```rust
//! use tonefill_math::modulo;
//!
//! assert_eq!(modulo(5.0, 3.0), 2.0);
//! assert_eq!(modulo(-5.0, 3.0), -2.0);
//! assert!((modulo(5.0, 1.5) - 0.5).abs() < 1e-6);
//! assert!(modulo(1.0, 0.0).is_nan());
//! ```

use crate::bits::trunc;

/// Truncated remainder of `x / y`; the result carries the sign of `x`.
#[inline(always)]
pub fn modulo(x: f32, y: f32) -> f32 {
    x - y * trunc(x / y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulo_integers() {
        let expected = [-2.0, -1.0, 0.0, -2.0, -1.0, 0.0, 1.0, 2.0, 0.0, 1.0, 2.0];
        for (x, want) in (-5..=5).zip(expected) {
            let got = modulo(x as f32, 3.0);
            assert_eq!(got, want, "modulo({}, 3) = {}, expected {}", x, got, want);
        }
    }

    #[test]
    fn test_modulo_fractional_divisor() {
        let cases = [(5.0, 0.5), (-5.0, -0.5), (4.0, 1.0), (-4.0, -1.0), (3.0, 0.0)];
        for (x, want) in cases {
            let got = modulo(x, 1.5);
            assert!(
                (got - want).abs() < 1e-6,
                "modulo({}, 1.5) = {}, expected {}",
                x,
                got,
                want
            );
        }
    }

    #[test]
    fn test_modulo_sign_follows_dividend() {
        assert_eq!(modulo(5.0, -3.0), 2.0);
        assert_eq!(modulo(-5.0, -3.0), -2.0);
    }

    #[test]
    fn test_modulo_zero_divisor_is_nan() {
        assert!(modulo(5.0, 0.0).is_nan());
        assert!(modulo(-5.0, 0.0).is_nan());
        assert!(modulo(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_modulo_nan_propagates() {
        assert!(modulo(f32::NAN, 3.0).is_nan());
        assert!(modulo(3.0, f32::NAN).is_nan());
        assert!(modulo(f32::INFINITY, 3.0).is_nan());
    }
}
