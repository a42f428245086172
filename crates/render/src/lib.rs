#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! # tonefill Render
//!
//! Drives a per-sample formula over a buffer in host linear memory.
//!
//! - [`fill`] - the buffer-fill loop over [`LinearMemory`]
//! - [`fill_slice`] - the same loop writing into a typed `&mut [f32]`
//! - [`Formula`] / [`vars`] - caller code producing one sample per [`Tick`]
//! - [`Env`] - the time register, holding the time of the last sample written
//! - [`Linker`] - resolves which numeric primitives a formula imports
//!
//! # Example
//!
//! ```
//! use tonefill_render::{fill, vars, Env, FillParams, Linker, LinearMemory, Primitive, Tick};
//!
//! let module = Linker::new().include(Primitive::Sin).link();
//! let sin = module.unary("sin").unwrap();
//!
//! let mut formula = vars(&["freq"], move |tick: Tick, args: &[f32]| {
//!     sin(core::f32::consts::TAU * args[0] * tick.t)
//! });
//!
//! let mut bytes = [0u8; 4 * 64];
//! let mut memory = LinearMemory::new(&mut bytes);
//! let mut env = Env::new();
//! fill(&mut env, &mut memory, FillParams::new(0, 64, 64.0), &[4.0], &mut formula).unwrap();
//!
//! // Quarter period of a 4 Hz sine at 64 Hz is 4 samples.
//! let peak = memory.read_f32(4).unwrap();
//! assert!((peak - 1.0).abs() < 1e-5);
//! ```

#[cfg(test)]
extern crate std;

pub mod env;
mod error;
mod fill;
mod formula;
pub mod link;
mod memory;

pub use env::Env;
pub use error::{FillError, LinkError};
pub use fill::{fill, fill_slice, FillParams};
pub use formula::{vars, Formula, Vars};
pub use link::{Export, Linker, Module, Primitive, Signature};
pub use memory::LinearMemory;
pub use tonefill_timing::Tick;
