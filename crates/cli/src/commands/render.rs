//! Render a preset to a WAV file, one block at a time.

use anyhow::{bail, Context, Result};
use clap::Args;
use hound::{SampleFormat, WavSpec, WavWriter};
use std::path::PathBuf;
use tonefill_render::env::{DEFAULT_PAGES, PAGE_SIZE};
use tonefill_render::{fill, Env, FillParams, LinearMemory, Linker};
use tonefill_timing::Timebase;
use tracing::{debug, info};

use crate::presets::Preset;

/// Arguments for `tonefill render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Formula to render
    #[arg(short, long, value_enum, default_value = "sine")]
    pub preset: Preset,

    /// Preset argument, in declaration order (repeatable)
    #[arg(short, long = "arg", allow_negative_numbers = true)]
    pub args: Vec<f32>,

    /// Duration in seconds
    #[arg(short, long, default_value = "1.0")]
    pub duration: f32,

    /// Sample rate in Hz
    #[arg(short, long, default_value = "44100")]
    pub sample_rate: u32,

    /// Frames rendered per fill call
    #[arg(short, long, default_value = "128")]
    pub block_size: u32,

    /// Pages of linear memory to allocate
    #[arg(long, default_value_t = DEFAULT_PAGES)]
    pub pages: usize,

    /// Output file path
    #[arg(short, long, default_value = "output.wav")]
    pub output: PathBuf,
}

/// Execute `tonefill render`.
pub fn execute(cmd: RenderArgs) -> Result<()> {
    let preset = cmd.preset;

    let mut linker = Linker::new();
    for &primitive in preset.imports() {
        linker.include(primitive);
    }
    let module = linker.link();
    debug!(preset = preset.name(), order = ?module.order(), "linked");

    let mut formula = preset.build(&module)?;
    let args = preset.resolve_args(&cmd.args)?;

    let timebase = Timebase::new(cmd.sample_rate as f32);
    let total_frames = timebase.frames_for(cmd.duration);

    let mut bytes = vec![0u8; cmd.pages * PAGE_SIZE];
    let mut memory = LinearMemory::new(&mut bytes);
    let mut env = Env::new();

    if cmd.sample_rate == 0 {
        bail!("sample rate must be at least 1 Hz");
    }
    if cmd.block_size == 0 {
        bail!("block size must be at least 1");
    }
    if cmd.block_size as usize > memory.capacity() {
        bail!(
            "block size {} does not fit in {} pages ({} samples)",
            cmd.block_size,
            cmd.pages,
            memory.capacity()
        );
    }

    println!(
        "Rendering {} for {:.2}s at {}Hz sample rate...",
        preset.name(),
        cmd.duration,
        cmd.sample_rate
    );

    let spec = WavSpec {
        channels: 1,
        sample_rate: cmd.sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(&cmd.output, spec).context("Failed to create WAV file")?;

    let mut start: u64 = 0;
    let mut peak = 0.0f32;
    while start < total_frames {
        let len = (total_frames - start).min(u64::from(cmd.block_size)) as u32;
        let start_frame =
            u32::try_from(start).context("Render is longer than the frame counter allows")?;

        let params = FillParams::new(start_frame, len, timebase.sample_rate());
        fill(&mut env, &mut memory, params, &args, &mut formula)
            .with_context(|| format!("Failed to fill block at frame {}", start))?;

        for sample in memory.samples(len as usize) {
            peak = peak.max(sample.abs());
            writer
                .write_sample(sample)
                .context("Failed to write sample")?;
        }
        debug!(start, len, t = env.t(), "block rendered");

        start += u64::from(len);
    }

    writer.finalize().context("Failed to finalize WAV file")?;
    info!(frames = total_frames, peak, "render finished");
    println!("Generated: {}", cmd.output.display());

    Ok(())
}
