//! Accuracy probe of the numeric primitives against the host's math library.

use anyhow::{bail, Result};
use clap::Args;
use std::cmp::Ordering;
use tonefill_math::{cos, exp, modulo, sin, EXP_TOLERANCE, TRIG_TOLERANCE};
use tonefill_render::Primitive;
use tracing::info;

/// Divisor used when probing `mod`.
const MOD_DIVISOR: f32 = 1.5;

/// Arguments for `tonefill probe`.
#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Start of the probed interval
    #[arg(long, default_value = "-10.0", allow_negative_numbers = true)]
    pub from: f32,

    /// End of the probed interval
    #[arg(long, default_value = "10.0", allow_negative_numbers = true)]
    pub to: f32,

    /// Number of steps across the interval
    #[arg(long, default_value = "100000")]
    pub steps: usize,
}

/// Worst-case error of one primitive over the probed interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeRow {
    /// Primitive probed
    pub primitive: Primitive,
    /// Largest `|ours - host|`
    pub max_abs: f32,
    /// Largest `|ours - host| / max(1, |host|)`
    pub max_scaled: f32,
    /// Input where `max_abs` occurred
    pub worst_x: f32,
}

impl ProbeRow {
    fn new(primitive: Primitive) -> Self {
        Self {
            primitive,
            max_abs: 0.0,
            max_scaled: 0.0,
            worst_x: 0.0,
        }
    }

    fn record(&mut self, x: f32, ours: f32, host: f32) {
        let err = (ours - host).abs();
        let scaled = err / host.abs().max(1.0);
        if err > self.max_abs {
            self.max_abs = err;
            self.worst_x = x;
        }
        self.max_scaled = self.max_scaled.max(scaled);
    }

    /// Tolerance this primitive is held to, if any.
    pub fn tolerance(&self) -> Option<f32> {
        match self.primitive {
            Primitive::Cos | Primitive::Sin => Some(TRIG_TOLERANCE),
            Primitive::Exp => Some(EXP_TOLERANCE),
            Primitive::Mod => None,
        }
    }

    /// Whether the measured error is inside [`ProbeRow::tolerance`].
    pub fn within_tolerance(&self) -> bool {
        match self.primitive {
            Primitive::Exp => self.tolerance().map_or(true, |tol| self.max_scaled < tol),
            _ => self.tolerance().map_or(true, |tol| self.max_abs < tol),
        }
    }
}

/// Measure every primitive over `steps + 1` evenly spaced points in `[from, to]`.
pub fn probe(from: f32, to: f32, steps: usize) -> Vec<ProbeRow> {
    let mut rows: Vec<ProbeRow> = Primitive::ALL.into_iter().map(ProbeRow::new).collect();
    let span = f64::from(to) - f64::from(from);

    for i in 0..=steps {
        let x = (f64::from(from) + span * i as f64 / steps as f64) as f32;
        let wide = f64::from(x);
        for row in &mut rows {
            let (ours, host) = match row.primitive {
                Primitive::Mod => (modulo(x, MOD_DIVISOR), x % MOD_DIVISOR),
                Primitive::Cos => (cos(x), wide.cos() as f32),
                Primitive::Sin => (sin(x), wide.sin() as f32),
                Primitive::Exp => (exp(x), wide.exp() as f32),
            };
            row.record(x, ours, host);
        }
    }

    rows
}

/// Execute `tonefill probe`.
pub fn execute(cmd: ProbeArgs) -> Result<()> {
    if cmd.steps == 0 {
        bail!("steps must be at least 1");
    }
    if cmd.from.partial_cmp(&cmd.to) != Some(Ordering::Less) {
        bail!("empty interval [{}, {}]", cmd.from, cmd.to);
    }

    info!(from = cmd.from, to = cmd.to, steps = cmd.steps, "probing");
    let rows = probe(cmd.from, cmd.to, cmd.steps);

    println!(
        "Probing [{}, {}] with {} steps (mod uses divisor {})",
        cmd.from, cmd.to, cmd.steps, MOD_DIVISOR
    );
    println!(
        "{:<6} {:>12} {:>12} {:>12} {:>10}",
        "fn", "max abs", "max scaled", "worst x", "tolerance"
    );
    for row in &rows {
        let verdict = match row.tolerance() {
            Some(tol) if row.within_tolerance() => format!("ok <{:.0e}", tol),
            Some(tol) => format!("FAIL >{:.0e}", tol),
            None => "-".to_string(),
        };
        println!(
            "{:<6} {:>12.3e} {:>12.3e} {:>12.4} {:>10}",
            row.primitive.name(),
            row.max_abs,
            row.max_scaled,
            row.worst_x,
            verdict
        );
    }

    Ok(())
}
