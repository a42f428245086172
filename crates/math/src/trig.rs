//! Cosine and sine approximations
//!
//! Both functions share one algorithm:
//!
//! 1. Range reduction: `x mod 2π` through [`modulo`], then a single ±2π
//!    correction re-centers the argument into `[-π, π]`. Reduction is one
//!    remainder, never repeated subtraction, so it costs the same for any `x`.
//! 2. An even polynomial of degree 14 in the reduced argument, evaluated as a
//!    degree-7 polynomial in `r²` with Horner's method. Coefficients are
//!    Chebyshev-economized over `r² ∈ [0, π²]`, which gets within a few ulp of
//!    the minimax error.
//!
//! `sin` is `cos` shifted by π/2 and adds no polynomial of its own.
//!
//! # Error Bounds
//!
//! - Maximum absolute error on `[-10, 10]`: ~5e-7 for `cos`, ~1e-6 for `sin`
//!   (checked against [`TRIG_TOLERANCE`](crate::TRIG_TOLERANCE))
//! - Error grows with `|x|` as the f32 rounding of 2π accumulates across
//!   periods: ~6e-6 at 100, ~6e-5 at 1000
//! - Past ~2^26 an f32 carries no phase information at all; the reduced
//!   argument is clamped so the output still stays within `[-1, 1]`
//! - NaN and ±∞ produce NaN
//!
//! # Example
//!
//! ```rust
//! use tonefill_math::{cos, sin};
//!
//! let c = cos(0.0);
//! assert!((c - 1.0).abs() < 1e-6);
//!
//! let s = sin(core::f32::consts::FRAC_PI_2);
//! assert!((s - 1.0).abs() < 1e-5);
//! ```

#![allow(clippy::excessive_precision)]

use crate::modulo::modulo;
use core::f32::consts::{FRAC_PI_2, PI, TAU};

// cos(r) ≈ C0 + C1·z + ... + C7·z^7, z = r², r ∈ [-π, π]
const C0: f32 = 0.999_999_999_885_552_9;
const C1: f32 = -0.499_999_998_512_480_06;
const C2: f32 = 0.041_666_663_492_694_13;
const C3: f32 = -0.001_388_886_306_493_093_3;
const C4: f32 = 2.480_055_396_755_813_2e-5;
const C5: f32 = -2.753_480_661_615_147e-7;
const C6: f32 = 2.060_361_850_793_757_4e-9;
const C7: f32 = -9.722_568_758_935_907e-12;

/// Map `x` into `[-π, π]` with one remainder and one re-centering step.
#[inline(always)]
fn reduce_symmetric(x: f32) -> f32 {
    let r = modulo(x, TAU);
    let r = if r > PI {
        r - TAU
    } else if r < -PI {
        r + TAU
    } else {
        r
    };
    // Only inputs beyond f32 phase resolution land outside after re-centering.
    r.clamp(-PI, PI)
}

/// Cosine approximation
///
/// Accurate to within [`TRIG_TOLERANCE`](crate::TRIG_TOLERANCE) for
/// `x ∈ [-10, 10]`; see the module docs for the behaviour at larger
/// magnitudes.
///
/// # Example
///
/// ```rust
/// use tonefill_math::cos;
///
/// assert!((cos(core::f32::consts::PI) + 1.0).abs() < 1e-5);
/// assert!(cos(f32::NAN).is_nan());
/// ```
#[inline(always)]
pub fn cos(x: f32) -> f32 {
    let r = reduce_symmetric(x);
    let z = r * r;

    let mut result = C7;
    result = C6 + z * result;
    result = C5 + z * result;
    result = C4 + z * result;
    result = C3 + z * result;
    result = C2 + z * result;
    result = C1 + z * result;
    C0 + z * result
}

/// Sine approximation
///
/// Uses the identity `sin(x) = cos(x - π/2)`, so it shares `cos`'s range
/// reduction and polynomial. Linking a module that exports `sin` therefore
/// always pulls in `cos` as well.
///
/// # Example
///
/// ```rust
/// use tonefill_math::sin;
///
/// assert!(sin(0.0).abs() < 1e-6);
/// assert!((sin(-core::f32::consts::FRAC_PI_2) + 1.0).abs() < 1e-5);
/// ```
#[inline(always)]
pub fn sin(x: f32) -> f32 {
    cos(x - FRAC_PI_2)
}
