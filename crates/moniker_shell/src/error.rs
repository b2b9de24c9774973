//! Shell error types.

use std::path::PathBuf;

/// Errors raised by process and file effects.
///
/// Every variant converts into a [`Cause`](moniker_core::Cause) through the
/// core's blanket `From`, with the `#[source]` chain preserved as a causal
/// chain.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// A command with no program name.
    #[error("command has no program name")]
    EmptyProgram,

    /// The program could not be started.
    #[error("could not start {program}")]
    Spawn {
        /// Program name from the command.
        program: String,
        /// Underlying spawn failure.
        #[source]
        source: std::io::Error,
    },

    /// The child's exit status could not be collected.
    #[error("could not wait for {program}")]
    Wait {
        /// Program name from the command.
        program: String,
        /// Underlying wait failure.
        #[source]
        source: std::io::Error,
    },

    /// A file could not be read.
    #[error("could not read {}", path.display())]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying read failure.
        #[source]
        source: std::io::Error,
    },

    /// A file could not be written.
    #[error("could not write {}", path.display())]
    Write {
        /// Path that failed to write.
        path: PathBuf,
        /// Underlying write failure.
        #[source]
        source: std::io::Error,
    },

    /// A scratch file could not be moved into place.
    #[error("could not replace {}", path.display())]
    Replace {
        /// Destination path.
        path: PathBuf,
        /// Underlying rename failure.
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use moniker_core::Cause;

    use super::*;

    #[test]
    fn test_converts_into_a_causal_chain() {
        let error = ShellError::Read {
            path: PathBuf::from("/nowhere/moniker.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
        };
        let cause = Cause::from(error);
        let messages: Vec<&str> = cause.messages().collect();
        assert_eq!(
            messages,
            ["could not read /nowhere/moniker.json", "permission denied"]
        );
    }
}
