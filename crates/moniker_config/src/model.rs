//! Configuration model.

use std::path::PathBuf;

use indexmap::IndexMap;
use moniker_core::Optional;
use serde::{Deserialize, Serialize};

/// The whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Alias definitions.
    pub aliases: AliasTable,
    /// Settings applied to every spawned command.
    pub shell: ShellSettings,
}

/// Process settings applied to every spawned command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellSettings {
    /// Working directory for spawned commands, when not inheriting.
    pub working_dir: Option<PathBuf>,
    /// Extra environment variables layered over the parent's.
    pub env: IndexMap<String, String>,
}

/// Alias definitions, in declaration order.
///
/// Name to expansion. An expansion is a whitespace-separated command line
/// whose head token may itself name an alias; resolution walks those links.
/// Declaration order is preserved so listings and reports are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable {
    entries: IndexMap<String, String>,
}

impl AliasTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        AliasTable::default()
    }

    /// The expansion of `name`, if defined.
    pub fn lookup(&self, name: &str) -> Optional<&str> {
        self.entries.get(name).map(String::as_str).into()
    }

    /// Define or replace an alias, returning the previous expansion.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        expansion: impl Into<String>,
    ) -> Optional<String> {
        self.entries.insert(name.into(), expansion.into()).into()
    }

    /// Remove an alias, returning its expansion.
    ///
    /// The declaration order of the remaining aliases is preserved.
    pub fn remove(&mut self, name: &str) -> Optional<String> {
        self.entries.shift_remove(name).into()
    }

    /// Alias names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Name and expansion pairs, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, expansion)| (name.as_str(), expansion.as_str()))
    }

    /// Number of aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no aliases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        AliasTable {
            entries: iter.into_iter().collect(),
        }
    }
}
