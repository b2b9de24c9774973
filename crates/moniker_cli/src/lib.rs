//! MONIKER command-line interface.
//!
//! Parsing, dispatch, and reporting for the `moniker` binary. The command
//! line parses into the core's sum types, subcommands run over the config
//! and shell crates, and outcomes render in `main` alone.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod args;
pub mod commands;
pub mod report;

pub use args::{Command, Invocation, Notice, parse_invocation};
pub use commands::dispatch;
pub use report::render;
