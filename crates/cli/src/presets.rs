//! Built-in formulas the `render` command can play.

use anyhow::{bail, Result};
use clap::ValueEnum;
use std::f32::consts::TAU;
use tonefill_render::{vars, Module, Primitive, Tick, Vars};
use tracing::warn;

/// A boxed per-sample formula with its declared argument names.
pub type PresetFormula = Vars<'static, Box<dyn FnMut(Tick, &[f32]) -> f32>>;

/// Formula presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// `amp · sin(2π·freq·t)`
    Sine,
    /// Two-operator FM: a carrier phase-modulated by `carrier · ratio`
    Fm,
    /// Exponentially decaying sine
    Pluck,
    /// Naive sawtooth from the truncated remainder of the phase
    Saw,
}

impl Preset {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Sine => "sine",
            Preset::Fm => "fm",
            Preset::Pluck => "pluck",
            Preset::Saw => "saw",
        }
    }

    /// Primitives the formula calls.
    pub fn imports(self) -> &'static [Primitive] {
        match self {
            Preset::Sine | Preset::Fm => &[Primitive::Sin],
            Preset::Pluck => &[Primitive::Sin, Primitive::Exp],
            Preset::Saw => &[Primitive::Mod],
        }
    }

    /// Argument names, in call order.
    pub fn vars(self) -> &'static [&'static str] {
        match self {
            Preset::Sine => &["freq", "amp"],
            Preset::Fm => &["carrier", "ratio", "index"],
            Preset::Pluck => &["freq", "decay"],
            Preset::Saw => &["freq"],
        }
    }

    /// Value used for each argument left off the command line.
    pub fn defaults(self) -> &'static [f32] {
        match self {
            Preset::Sine => &[440.0, 0.5],
            Preset::Fm => &[220.0, 2.0, 3.0],
            Preset::Pluck => &[330.0, 6.0],
            Preset::Saw => &[110.0],
        }
    }

    /// Complete `given` with defaults for the trailing arguments.
    pub fn resolve_args(self, given: &[f32]) -> Result<Vec<f32>> {
        let names = self.vars();
        if given.len() > names.len() {
            bail!(
                "preset `{}` takes {} arguments ({}) but {} were given",
                self.name(),
                names.len(),
                names.join(", "),
                given.len()
            );
        }

        let mut args = given.to_vec();
        for (name, &default) in names.iter().zip(self.defaults()).skip(given.len()) {
            warn!(preset = self.name(), "{} not given, using {}", name, default);
            args.push(default);
        }
        Ok(args)
    }

    /// Build the formula against a linked module.
    ///
    /// Fails if `module` does not export what [`Preset::imports`] names.
    pub fn build(self, module: &Module) -> Result<PresetFormula> {
        let formula: Box<dyn FnMut(Tick, &[f32]) -> f32> = match self {
            Preset::Sine => {
                let sin = module.unary("sin")?;
                Box::new(move |tick: Tick, args: &[f32]| args[1] * sin(TAU * args[0] * tick.t))
            }
            Preset::Fm => {
                let sin = module.unary("sin")?;
                Box::new(move |tick: Tick, args: &[f32]| {
                    let (carrier, ratio, index) = (args[0], args[1], args[2]);
                    let modulator = sin(TAU * carrier * ratio * tick.t);
                    0.5 * sin(TAU * carrier * tick.t + index * modulator)
                })
            }
            Preset::Pluck => {
                let sin = module.unary("sin")?;
                let exp = module.unary("exp")?;
                Box::new(move |tick: Tick, args: &[f32]| {
                    exp(-args[1] * tick.t) * sin(TAU * args[0] * tick.t)
                })
            }
            Preset::Saw => {
                let modulo = module.binary("mod")?;
                Box::new(move |tick: Tick, args: &[f32]| {
                    let phase = modulo(args[0] * tick.t, 1.0);
                    0.5 * (2.0 * phase - 1.0)
                })
            }
        };
        Ok(vars(self.vars(), formula))
    }
}
