//! Shared render state and linear-memory layout conventions.
//!
//! The output buffer lives at the very start of the host's linear memory as
//! consecutive little-endian `f32` values, one per sample:
//!
//! ```text
//! byte 0        4        8        12
//!      | s[0]   | s[1]   | s[2]   | ...
//! ```

/// Byte address of output sample 0.
pub const OUTPUT_BASE: usize = 0;

/// Bytes per output sample (`f32`).
pub const SAMPLE_BYTES: usize = 4;

/// Size of one linear-memory page.
pub const PAGE_SIZE: usize = 65_536;

/// Pages a host allocates for rendering unless told otherwise.
pub const DEFAULT_PAGES: usize = 16;

/// Byte offset of output sample `index`.
#[inline]
pub const fn output_offset(index: usize) -> usize {
    OUTPUT_BASE + index * SAMPLE_BYTES
}

/// Render environment holding the time register.
///
/// The fill loop writes the current sample time into `t` immediately before
/// each formula call. Formulas get the same value through [`Tick::t`], so the
/// register only matters to code that inspects the environment after a
/// render: it holds the time of the last sample written, and keeps its old
/// value when a fill renders nothing.
///
/// [`Tick::t`]: tonefill_timing::Tick::t
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Env {
    t: f32,
}

impl Env {
    /// Create an environment with the time register at 0.
    pub const fn new() -> Self {
        Self { t: 0.0 }
    }

    /// Current value of the time register.
    #[inline]
    pub fn t(&self) -> f32 {
        self.t
    }

    #[inline]
    pub(crate) fn set_t(&mut self, t: f32) {
        self.t = t;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_offsets_are_contiguous() {
        assert_eq!(output_offset(0), 0);
        assert_eq!(output_offset(1), 4);
        assert_eq!(output_offset(255), 1020);
    }

    #[test]
    fn test_env_starts_at_zero() {
        assert_eq!(Env::new().t(), 0.0);
        assert_eq!(Env::default(), Env::new());
    }
}
