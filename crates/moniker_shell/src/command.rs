//! Command descriptions.

use std::path::PathBuf;

use moniker_core::Fallible;

use crate::error::ShellError;

/// A command to run: program, arguments, and environment.
///
/// A plain value with no handle on any process; [`run`](crate::process::run)
/// turns one into a child. Built with `with_*` methods from whatever
/// produced the program name, typically an alias resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program to execute.
    pub program: String,
    /// Arguments, in order.
    pub args: Vec<String>,
    /// Working directory, when not inheriting the parent's.
    pub cwd: Option<PathBuf>,
    /// Extra environment variables layered over the parent's.
    pub env: Vec<(String, String)>,
}

impl CommandSpec {
    /// A command for `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        CommandSpec {
            program: program.into(),
            ..CommandSpec::default()
        }
    }

    /// Replace the argument list.
    #[must_use]
    pub fn with_args(mut self, args: impl IntoIterator<Item = String>) -> Self {
        self.args = args.into_iter().collect();
        self
    }

    /// Set the working directory.
    #[must_use]
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Add environment variables.
    #[must_use]
    pub fn with_env(mut self, env: impl IntoIterator<Item = (String, String)>) -> Self {
        self.env.extend(env);
        self
    }

    /// Check that the command can be started at all.
    pub fn validate(&self) -> Fallible<()> {
        if self.program.is_empty() {
            Fallible::failure(ShellError::EmptyProgram)
        } else {
            Fallible::success(())
        }
    }
}
