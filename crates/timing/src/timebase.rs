//! Frame-to-time conversion for buffer rendering.

use tonefill_math::bits::round;

/// Per-sample timing context.
///
/// Handed to a formula for every sample it renders, so the formula never has
/// to read shared state to learn where in time it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Position within the current buffer (0-based)
    pub index: u32,
    /// Absolute frame number (`start_frame + index`)
    pub frame: u64,
    /// Time of this frame, `frame / sample_rate`
    pub t: f32,
}

/// Sample-rate context for a render.
///
/// # Example
///
/// ```
/// use tonefill_timing::Timebase;
///
/// let timebase = Timebase::new(10.0);
/// let times: Vec<f32> = timebase.ticks(10, 3).map(|tick| tick.t).collect();
/// assert_eq!(times, vec![1.0, 1.1, 1.2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timebase {
    /// Samples per time unit (Hz for audio)
    sample_rate: f32,
}

impl Default for Timebase {
    fn default() -> Self {
        Self {
            sample_rate: crate::DEFAULT_SAMPLE_RATE,
        }
    }
}

impl Timebase {
    /// Create a timebase for the given sample rate.
    ///
    /// The rate is not validated. A zero rate is allowed and makes every
    /// time ±∞ (or NaN at frame 0) through ordinary float division; callers
    /// that want a hard error must check before rendering.
    pub fn new(sample_rate: f32) -> Self {
        Self { sample_rate }
    }

    /// Get the sample rate.
    #[inline]
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Time of `frame`, i.e. `frame / sample_rate` in single precision.
    #[inline]
    pub fn time_at(&self, frame: u64) -> f32 {
        frame as f32 / self.sample_rate
    }

    /// Number of whole frames covering `seconds` (rounded, never negative).
    #[inline]
    pub fn frames_for(&self, seconds: f32) -> u64 {
        let frames = round(seconds * self.sample_rate);
        if frames > 0.0 {
            frames as u64
        } else {
            0
        }
    }

    /// Ticks for `len` consecutive frames starting at `start_frame`.
    #[inline]
    pub fn ticks(&self, start_frame: u64, len: u32) -> Ticks {
        Ticks {
            timebase: *self,
            start_frame,
            next: 0,
            len,
        }
    }
}

/// Iterator over the [`Tick`]s of one buffer, see [`Timebase::ticks`].
#[derive(Debug, Clone)]
pub struct Ticks {
    timebase: Timebase,
    start_frame: u64,
    next: u32,
    len: u32,
}

impl Iterator for Ticks {
    type Item = Tick;

    #[inline]
    fn next(&mut self) -> Option<Tick> {
        if self.next >= self.len {
            return None;
        }
        let index = self.next;
        self.next += 1;

        let frame = self.start_frame + index as u64;
        Some(Tick {
            index,
            frame,
            t: self.timebase.time_at(frame),
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.len - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ticks {}

impl core::iter::FusedIterator for Ticks {}
