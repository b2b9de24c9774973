//! Loading and saving the configuration file.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use moniker_core::{Fallible, Optional};
use serde_json::Value;

use crate::model::Configuration;
use crate::prune::prune;

const DEFAULT_FILE_NAME: &str = "moniker.json";
const PATH_VARIABLE: &str = "MONIKER_CONFIG";

/// Errors raised while interpreting a configuration file.
///
/// I/O failures carry the shell crate's causes; these cover what can go
/// wrong after the bytes arrive.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file is not valid JSON.
    #[error("could not parse {}", path.display())]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The JSON does not have the configuration shape.
    #[error("unexpected configuration shape in {}", path.display())]
    Shape {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}

/// The configuration path to use when none is given on the command line.
///
/// The `MONIKER_CONFIG` environment variable overrides; otherwise
/// `moniker.json` in the current directory.
#[must_use]
pub fn default_path() -> PathBuf {
    path_from(std::env::var_os(PATH_VARIABLE))
}

fn path_from(override_path: Option<OsString>) -> PathBuf {
    match override_path {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_FILE_NAME),
    }
}

/// Load the configuration at `path`.
///
/// A missing file is an absent configuration, not a failure: the runner has
/// simply not been given any aliases yet. A file that prunes away to
/// nothing is absent for the same reason. An unreadable or malformed file
/// fails with a causal chain naming the path.
pub fn load(path: &Path) -> Fallible<Optional<Configuration>> {
    moniker_shell::fs::read_if_present(path).and_then(|contents| {
        contents.map_or_else(
            || {
                tracing::debug!(path = %path.display(), "no configuration file");
                Fallible::success(Optional::Absent)
            },
            |text| interpret(path, &text),
        )
    })
}

fn interpret(path: &Path, text: &str) -> Fallible<Optional<Configuration>> {
    Fallible::from_result(serde_json::from_str::<Value>(text).map_err(|source| {
        ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        }
    }))
    .and_then(|raw| {
        prune(raw).map_or_else(
            || {
                tracing::debug!(path = %path.display(), "configuration pruned to nothing");
                Fallible::success(Optional::Absent)
            },
            |kept| {
                Fallible::from_result(serde_json::from_value::<Configuration>(kept).map_err(
                    |source| ConfigError::Shape {
                        path: path.to_path_buf(),
                        source,
                    },
                ))
                .map(|configuration| {
                    tracing::debug!(
                        path = %path.display(),
                        aliases = configuration.aliases.len(),
                        "configuration loaded"
                    );
                    Optional::Present(configuration)
                })
            },
        )
    })
}

/// Save the configuration to `path`, replacing the file atomically.
pub fn save(path: &Path, configuration: &Configuration) -> Fallible<()> {
    Fallible::from_result(serde_json::to_string_pretty(configuration))
        .context("could not render the configuration")
        .and_then(|mut rendered| {
            rendered.push('\n');
            moniker_shell::fs::write_atomic(path, rendered.as_bytes())
        })
}
