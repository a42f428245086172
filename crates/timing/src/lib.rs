#![no_std]

//! # tonefill Timing
//!
//! No-std frame/time bookkeeping for buffer rendering.
//!
//! - [`Timebase`] - sample-rate context, frame → time conversion
//! - [`Tick`] - the per-sample `(index, frame, t)` context a formula receives
//! - [`Ticks`] - exact-size iterator over the ticks of one buffer
//!
//! All types are `Copy`/`Clone`, zero-allocation, and suitable for real-time use.
//!
//! # Example
//!
//! ```
//! use tonefill_timing::Timebase;
//!
//! let timebase = Timebase::new(20.0);
//! for tick in timebase.ticks(0, 4) {
//!     assert_eq!(tick.t, tick.frame as f32 / 20.0);
//! }
//! ```

#[cfg(test)]
extern crate std;

mod timebase;

pub use timebase::{Tick, Ticks, Timebase};

/// Default sample rate in Hz
pub const DEFAULT_SAMPLE_RATE: f32 = 44100.0;
