//! Alias configuration for MONIKER.
//!
//! The JSON model ([`Configuration`], [`AliasTable`]), the loading pipeline
//! that reads, parses, prunes, and deserializes it, and the alias walk that
//! turns a name into a runnable [`Resolution`]. Every fallible step speaks
//! the core's types: a missing file is an absent configuration, a malformed
//! one is a failure with a causal chain.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod load;
pub mod model;
pub mod prune;
pub mod resolve;

pub use load::{ConfigError, default_path, load, save};
pub use model::{AliasTable, Configuration, ShellSettings};
pub use prune::prune;
pub use resolve::{Chain, Resolution, Step, chain, resolve};
