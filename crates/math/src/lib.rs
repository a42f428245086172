#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! tonefill-math: transcendental approximations for sandboxed sample synthesis
//!
//! Every kernel here is built from `+ - * /` and bit manipulation only. Nothing
//! calls into libm or the platform's math library, so the crate compiles
//! unchanged for targets such as `wasm32-unknown-unknown` that have no
//! transcendental instructions.
//!
//! # Kernels
//!
//! | Function | Reduction | Approximation | Error on `[-10, 10]` |
//! |----------|-----------|---------------|----------------------|
//! | [`modulo`] | none | `x - y·trunc(x/y)` | exact up to f32 rounding |
//! | [`cos`] | `x mod 2π` into `[-π, π]` | even polynomial, degree 14 | < 1e-6 abs |
//! | [`sin`] | `cos(x - π/2)` | shared with `cos` | < 2e-6 abs |
//! | [`exp`] | `x = n·ln2 + r` | degree-6 polynomial · 2^n | < 2e-7 rel |
//!
//! # Example
//!
//! ```rust
//! use tonefill_math::{cos, exp, modulo, sin};
//!
//! // A decaying 440 Hz partial at t = 10 ms
//! let t = 0.01;
//! let sample = exp(-3.0 * t) * sin(core::f32::consts::TAU * 440.0 * t);
//! assert!(sample.is_finite());
//!
//! // Sawtooth phase from the truncated remainder
//! let phase = modulo(t * 110.0, 1.0);
//! assert!((0.0..1.0).contains(&phase));
//!
//! assert!((cos(0.0) - 1.0).abs() < 1e-6);
//! ```

#[cfg(test)]
extern crate std;

pub mod bits;
pub mod exp;
pub mod modulo;
pub mod trig;

pub use exp::exp;
pub use modulo::modulo;
pub use trig::{cos, sin};

/// Maximum absolute error of [`cos`] and [`sin`] for `x ∈ [-10, 10]`.
pub const TRIG_TOLERANCE: f32 = 1e-5;

/// Maximum error of [`exp`] for `x ∈ [-10, 10]`, relative to `max(1, e^x)`.
pub const EXP_TOLERANCE: f32 = 1e-4;
