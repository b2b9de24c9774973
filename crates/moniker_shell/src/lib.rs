//! Process and file effects for MONIKER.
//!
//! Everything here is an effect the pure core refuses to own: spawning
//! children, waiting for them, reading and writing files. Each operation
//! returns a core value - a [`Fallible`](moniker_core::Fallible) now, a
//! settling future for later - so callers compose effects with the same
//! combinators they use for everything else.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod command;
pub mod error;
pub mod fs;
pub mod process;

pub use command::CommandSpec;
pub use error::ShellError;
pub use process::{ExitCode, gather, run, settled_join};
