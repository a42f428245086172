//! The buffer-fill loop.
//!
//! [`fill`] renders `buffer_length` consecutive samples of a formula into
//! linear memory. Sample `i` is taken at time `(start_frame + i) / sample_rate`
//! and stored at [`output_offset(i)`](crate::env::output_offset).
//!
//! ```
//! use tonefill_render::{fill, Env, FillParams, LinearMemory, Tick};
//!
//! let mut bytes = [0u8; 40];
//! let mut memory = LinearMemory::new(&mut bytes);
//! let mut env = Env::new();
//!
//! let params = FillParams::new(0, 10, 10.0);
//! fill(&mut env, &mut memory, params, &[], &mut |tick: Tick, _: &[f32]| tick.t).unwrap();
//!
//! assert_eq!(memory.read_f32(3), Some(0.3));
//! assert_eq!(env.t(), 0.9);
//! ```

use tonefill_timing::{Tick, Timebase};

use crate::env::Env;
use crate::error::FillError;
use crate::formula::Formula;
use crate::memory::LinearMemory;

/// Arguments describing one buffer to render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillParams {
    /// Absolute frame of output sample 0
    pub start_frame: u32,
    /// Number of samples to render
    pub buffer_length: u32,
    /// Frames per time unit
    pub sample_rate: f32,
    /// Reserved input address, never read
    pub input_ptr: u32,
}

impl FillParams {
    /// Parameters for `buffer_length` samples starting at `start_frame`.
    pub const fn new(start_frame: u32, buffer_length: u32, sample_rate: f32) -> Self {
        Self {
            start_frame,
            buffer_length,
            sample_rate,
            input_ptr: 0,
        }
    }

    /// Set the reserved input address.
    pub const fn with_input_ptr(mut self, input_ptr: u32) -> Self {
        self.input_ptr = input_ptr;
        self
    }
}

fn check_arity<F: Formula + ?Sized>(formula: &F, args: &[f32]) -> Result<(), FillError> {
    match formula.arity() {
        Some(expected) if expected != args.len() => Err(FillError::ArityMismatch {
            expected,
            got: args.len(),
        }),
        _ => Ok(()),
    }
}

/// Render one buffer into linear memory.
///
/// Before calling the formula for sample `i` the time register in `env` is
/// set to that sample's time, so after a successful fill it holds the time
/// of the last sample. An empty fill touches neither memory nor `env`.
///
/// # Errors
///
/// Returns [`FillError::ArityMismatch`] if the formula declares a different
/// number of arguments than `args` holds, and [`FillError::BufferTooSmall`]
/// if `memory` cannot hold `buffer_length` samples. Both are detected before
/// anything is written.
pub fn fill<F>(
    env: &mut Env,
    memory: &mut LinearMemory<'_>,
    params: FillParams,
    args: &[f32],
    formula: &mut F,
) -> Result<(), FillError>
where
    F: Formula + ?Sized,
{
    check_arity(formula, args)?;

    let required = params.buffer_length as usize;
    let available = memory.capacity();
    if required > available {
        return Err(FillError::BufferTooSmall {
            required,
            available,
        });
    }

    let timebase = Timebase::new(params.sample_rate);
    for tick in timebase.ticks(u64::from(params.start_frame), params.buffer_length) {
        env.set_t(tick.t);
        let value = formula.sample(tick, args);
        memory.write_f32(tick.index as usize, value);
    }

    Ok(())
}

/// Render `out.len()` samples straight into a typed slice.
///
/// Unlike [`fill`] there is no shared time register; the formula learns the
/// time from its [`Tick`] alone. Disjoint slices of one output can therefore
/// be rendered independently.
///
/// # Errors
///
/// Returns [`FillError::ArityMismatch`] as [`fill`] does, with `out`
/// untouched.
pub fn fill_slice<F>(
    out: &mut [f32],
    start_frame: u64,
    sample_rate: f32,
    args: &[f32],
    formula: &mut F,
) -> Result<(), FillError>
where
    F: Formula + ?Sized,
{
    check_arity(formula, args)?;

    let timebase = Timebase::new(sample_rate);
    for (index, slot) in out.iter_mut().enumerate() {
        let frame = start_frame + index as u64;
        let tick = Tick {
            index: index as u32,
            frame,
            t: timebase.time_at(frame),
        };
        *slot = formula.sample(tick, args);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::vars;

    fn time(tick: Tick, _: &[f32]) -> f32 {
        tick.t
    }

    #[test]
    fn test_params_default_input_ptr() {
        let params = FillParams::new(5, 6, 7.0);
        assert_eq!(params.input_ptr, 0);
        assert_eq!(params.with_input_ptr(64).input_ptr, 64);
    }

    #[test]
    fn test_fill_sets_register_per_sample() {
        let mut bytes = [0u8; 16];
        let mut memory = LinearMemory::new(&mut bytes);
        let mut env = Env::new();
        let mut seen = [0.0f32; 4];

        // The formula cannot see `env`, so record what the tick says and
        // compare against the register afterwards.
        let mut record = |tick: Tick, _: &[f32]| {
            seen[tick.index as usize] = tick.t;
            tick.t
        };
        fill(&mut env, &mut memory, FillParams::new(2, 4, 4.0), &[], &mut record).unwrap();

        assert_eq!(seen, [0.5, 0.75, 1.0, 1.25]);
        assert_eq!(env.t(), 1.25);
    }

    #[test]
    fn test_fill_rejects_small_memory() {
        let mut bytes = [0xAAu8; 8];
        let mut memory = LinearMemory::new(&mut bytes);
        let mut env = Env::new();

        let err = fill(&mut env, &mut memory, FillParams::new(0, 3, 1.0), &[], &mut time)
            .unwrap_err();
        assert_eq!(
            err,
            FillError::BufferTooSmall {
                required: 3,
                available: 2
            }
        );
        assert!(bytes.iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn test_fill_slice_checks_arity() {
        let mut out = [9.0f32; 2];
        let mut formula = vars(&["a"], |_: Tick, args: &[f32]| args[0]);

        let err = fill_slice(&mut out, 0, 1.0, &[], &mut formula).unwrap_err();
        assert_eq!(
            err,
            FillError::ArityMismatch {
                expected: 1,
                got: 0
            }
        );
        assert_eq!(out, [9.0, 9.0]);

        fill_slice(&mut out, 0, 1.0, &[3.0], &mut formula).unwrap();
        assert_eq!(out, [3.0, 3.0]);
    }

    #[test]
    fn test_fill_slice_uses_u64_frames() {
        let mut out = [0.0f32; 2];
        let start = u64::from(u32::MAX) + 1;
        fill_slice(&mut out, start, 1.0, &[], &mut |tick: Tick, _: &[f32]| {
            (tick.frame - start) as f32
        })
        .unwrap();
        assert_eq!(out, [0.0, 1.0]);
    }
}
