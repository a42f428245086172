//! Timebase unit tests
//!
//! Tests for frame → time conversion and per-buffer tick iteration.

use proptest::prelude::*;
use tonefill_timing::{Tick, Timebase, DEFAULT_SAMPLE_RATE};

#[test]
fn test_timebase_default() {
    let timebase = Timebase::default();
    assert_eq!(timebase.sample_rate(), DEFAULT_SAMPLE_RATE);
}

#[test]
fn test_ticks_start_at_frame_offset() {
    let timebase = Timebase::new(10.0);
    let times: Vec<f32> = timebase.ticks(10, 10).map(|tick| tick.t).collect();
    let expected: Vec<f32> = (10..20).map(|frame| frame as f32 / 10.0).collect();
    assert_eq!(times, expected);
    assert!((times[0] - 1.0).abs() < 1e-6);
    assert!((times[9] - 1.9).abs() < 1e-6);
}

#[test]
fn test_ticks_scale_with_sample_rate() {
    let timebase = Timebase::new(20.0);
    let times: Vec<f32> = timebase.ticks(0, 10).map(|tick| tick.t).collect();
    for (i, t) in times.iter().enumerate() {
        assert!((t - i as f32 * 0.05).abs() < 1e-6, "tick {} at {}", i, t);
    }
}

#[test]
fn test_ticks_indices_are_buffer_relative() {
    let timebase = Timebase::new(48000.0);
    let ticks: Vec<Tick> = timebase.ticks(1_000_000, 4).collect();
    let indices: Vec<u32> = ticks.iter().map(|tick| tick.index).collect();
    let frames: Vec<u64> = ticks.iter().map(|tick| tick.frame).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert_eq!(frames, vec![1_000_000, 1_000_001, 1_000_002, 1_000_003]);
}

#[test]
fn test_ticks_size_hint_shrinks() {
    let timebase = Timebase::new(44100.0);
    let mut ticks = timebase.ticks(0, 3);
    assert_eq!(ticks.size_hint(), (3, Some(3)));
    ticks.next();
    assert_eq!(ticks.size_hint(), (2, Some(2)));
    ticks.next();
    ticks.next();
    assert_eq!(ticks.size_hint(), (0, Some(0)));
    assert_eq!(ticks.next(), None);
    assert_eq!(ticks.next(), None);
}

#[test]
fn test_consecutive_buffers_line_up() {
    // Splitting a render into blocks must not change any sample time.
    let timebase = Timebase::new(44100.0);
    let whole: Vec<f32> = timebase.ticks(0, 256).map(|tick| tick.t).collect();
    let blocks: Vec<f32> = (0..4)
        .flat_map(|block| timebase.ticks(block * 64, 64).map(|tick| tick.t))
        .collect();
    assert_eq!(whole, blocks);
}

#[test]
fn test_frames_for_duration() {
    let timebase = Timebase::new(48000.0);
    assert_eq!(timebase.frames_for(2.0), 96000);
    assert_eq!(timebase.frames_for(0.001), 48);
}

proptest! {
    #[test]
    fn test_tick_times_increase(start in 0u64..10_000_000, len in 1u32..512, rate in 1.0f32..192_000.0) {
        let timebase = Timebase::new(rate);
        let times: Vec<f32> = timebase.ticks(start, len).map(|tick| tick.t).collect();
        prop_assert_eq!(times.len(), len as usize);
        for pair in times.windows(2) {
            prop_assert!(pair[1] >= pair[0], "time went backwards: {} -> {}", pair[0], pair[1]);
        }
    }
}
