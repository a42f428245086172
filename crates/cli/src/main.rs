//! # tonefill CLI
//!
//! Host-side driver for the tonefill fill loop. Renders formula presets to
//! WAV files, probes primitive accuracy and shows how imports link.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

mod commands;
mod presets;

use commands::link::LinkArgs;
use commands::probe::ProbeArgs;
use commands::render::RenderArgs;

/// CLI tool for rendering tonefill formulas
#[derive(Parser)]
#[command(name = "tonefill")]
#[command(about = "Render per-sample formulas into audio buffers")]
#[command(version)]
struct Cli {
    /// Log per-block detail (`RUST_LOG` takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a preset formula to a 32-bit float WAV file
    Render(RenderArgs),

    /// Compare the numeric primitives against the host's math library
    Probe(ProbeArgs),

    /// Resolve imports and print the linked order
    Link(LinkArgs),
}

fn init_tracing(verbose: bool) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(if verbose { "debug" } else { "info" }),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("Failed to install log subscriber")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Render(args) => commands::render::execute(args),
        Commands::Probe(args) => commands::probe::execute(args),
        Commands::Link(args) => commands::link::execute(args),
    }
}
