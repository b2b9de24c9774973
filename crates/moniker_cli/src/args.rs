//! Command-line parsing.
//!
//! [`parse_invocation`] turns a raw argument vector into the core's sum
//! types instead of printing and exiting the way clap does on its own. The
//! three outcomes stay distinct all the way to `main`: a help or version
//! request is a [`Notice`] (neither success nor failure), malformed input
//! is a `Failure` carrying clap's rendered diagnostic, and everything else
//! is an [`Invocation`] ready to dispatch.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use moniker_core::{Cause, Disjoint, Fallible};

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "moniker")]
#[command(version)]
#[command(about = "Alias-driven command runner", long_about = None)]
pub struct Invocation {
    /// Configuration file (default: $MONIKER_CONFIG or ./moniker.json)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// The moniker subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Resolve an alias and execute the resulting command
    Run {
        /// Alias to resolve
        alias: String,
        /// Arguments appended to the resolved command; everything after
        /// the alias is passed through untouched
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
        /// Print the command instead of executing it (give before the alias)
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the resolution trail of an alias
    Which {
        /// Alias to resolve
        alias: String,
    },
    /// Print every alias in declaration order
    List,
    /// Define an alias, replacing any previous definition, and save
    Add {
        /// Name of the alias
        name: String,
        /// Command line the alias expands to
        expansion: String,
    },
    /// Delete an alias and save
    Remove {
        /// Name of the alias
        name: String,
    },
    /// Resolve every alias and report the ones that cannot run
    Check,
}

/// Help or version text the caller asked for.
///
/// A notice is the distinguished third outcome of parsing: the run
/// produced output but no work, so it is neither an [`Invocation`] nor a
/// failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    text: String,
}

impl Notice {
    /// The rendered text, ready for stdout.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Parse an argument vector, first element included.
///
/// Help and version requests come back as `First(Notice)`; anything clap
/// rejects comes back as a `Failure` whose cause carries the rendered
/// diagnostic; a well-formed command line comes back as
/// `Second(Invocation)`.
pub fn parse_invocation<I, S>(args: I) -> Fallible<Disjoint<Notice, Invocation>>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    match Invocation::try_parse_from(args) {
        Ok(invocation) => Fallible::Success(Disjoint::Second(invocation)),
        Err(error) => match error.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let mut text = error.render().to_string();
                if !text.ends_with('\n') {
                    text.push('\n');
                }
                Fallible::Success(Disjoint::First(Notice { text }))
            }
            _ => Fallible::failure(Cause::new(error.render().to_string().trim_end())),
        },
    }
}
