//! Per-sample formulas.
//!
//! A formula is the caller's code that turns one [`Tick`] (plus the extra
//! arguments forwarded by the fill loop) into one output sample. Any
//! `FnMut(Tick, &[f32]) -> f32` closure is a formula:
//!
//! ```
//! use tonefill_render::{Formula, Tick};
//!
//! let mut ramp = |tick: Tick, args: &[f32]| tick.t * args[0];
//! let tick = Tick { index: 0, frame: 3, t: 0.5 };
//! assert_eq!(ramp.sample(tick, &[2.0]), 1.0);
//! ```
//!
//! Closures accept any number of arguments. To have the fill loop reject a
//! call with the wrong argument count, declare the variables with [`vars`].

use tonefill_timing::Tick;

/// Caller-supplied per-sample function.
pub trait Formula {
    /// Compute the sample for `tick`.
    fn sample(&mut self, tick: Tick, args: &[f32]) -> f32;

    /// Number of arguments this formula expects, or `None` if it takes any.
    fn arity(&self) -> Option<usize> {
        None
    }
}

impl<F> Formula for F
where
    F: FnMut(Tick, &[f32]) -> f32 + ?Sized,
{
    #[inline]
    fn sample(&mut self, tick: Tick, args: &[f32]) -> f32 {
        self(tick, args)
    }
}

/// A formula with a declared, named argument list.
///
/// Created by [`vars`].
#[derive(Debug, Clone)]
pub struct Vars<'n, F> {
    names: &'n [&'n str],
    f: F,
}

/// Declare the argument names of `f`, fixing its arity.
///
/// # Example
///
/// ```
/// use tonefill_render::{vars, Formula, Tick};
///
/// let formula = vars(&["a", "b", "c"], |tick: Tick, args: &[f32]| {
///     tick.t + args[0] + args[1] + args[2]
/// });
/// assert_eq!(formula.arity(), Some(3));
/// assert_eq!(formula.index_of("b"), Some(1));
/// ```
pub fn vars<'n, F>(names: &'n [&'n str], f: F) -> Vars<'n, F>
where
    F: FnMut(Tick, &[f32]) -> f32,
{
    Vars { names, f }
}

impl<'n, F> Vars<'n, F> {
    /// Declared argument names, in call order.
    pub fn names(&self) -> &'n [&'n str] {
        self.names
    }

    /// Position of the argument called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|&candidate| candidate == name)
    }
}

impl<F> Formula for Vars<'_, F>
where
    F: FnMut(Tick, &[f32]) -> f32,
{
    #[inline]
    fn sample(&mut self, tick: Tick, args: &[f32]) -> f32 {
        (self.f)(tick, args)
    }

    fn arity(&self) -> Option<usize> {
        Some(self.names.len())
    }
}
