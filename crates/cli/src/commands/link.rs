//! Show how a set of imports resolves.

use anyhow::{Context, Result};
use clap::Args;
use tonefill_render::{Linker, Module, Primitive};

/// Arguments for `tonefill link`.
#[derive(Args, Debug)]
pub struct LinkArgs {
    /// Primitive names to import (mod, cos, sin, exp)
    #[arg(required = true)]
    pub names: Vec<String>,
}

/// Resolve `names` into a linked module.
pub fn resolve(names: &[String]) -> Result<Module> {
    let mut linker = Linker::new();
    for name in names {
        linker
            .include_name(name)
            .with_context(|| format!("Cannot import `{}`", name))?;
    }
    Ok(linker.link())
}

/// Execute `tonefill link`.
pub fn execute(cmd: LinkArgs) -> Result<()> {
    let module = resolve(&cmd.names)?;

    for (position, primitive) in module.order().iter().enumerate() {
        let requested = cmd.names.iter().any(|name| name == primitive.name());
        let pulled_in_by: Vec<&str> = Primitive::ALL
            .iter()
            .filter(|other| module.contains(**other) && other.requires().contains(primitive))
            .map(|other| other.name())
            .collect();

        let note = if requested || pulled_in_by.is_empty() {
            String::new()
        } else {
            format!("  (required by {})", pulled_in_by.join(", "))
        };
        println!(
            "{}. {:<4} {}{}",
            position + 1,
            primitive.name(),
            primitive.signature(),
            note
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_resolve_orders_requirements_first() {
        let module = resolve(&names(&["exp", "sin"])).unwrap();
        assert_eq!(
            module.order(),
            &[Primitive::Cos, Primitive::Sin, Primitive::Exp]
        );
    }

    #[test]
    fn test_resolve_rejects_unknown_name() {
        let err = resolve(&names(&["sin", "tanh"])).unwrap_err();
        assert!(err.to_string().contains("tanh"));
    }
}
