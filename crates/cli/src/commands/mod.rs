//! Subcommand implementations.

pub mod link;
pub mod probe;
pub mod render;
