//! Alias resolution.
//!
//! An alias expands to a command line whose head token may itself name an
//! alias. [`chain`] is the raw walk: a lazy iterator of expansion steps
//! that follows links for as long as they exist, which on a
//! self-referential table is forever. [`resolve`] is the application entry
//! point: the same walk with a cycle guard, accumulating arguments into a
//! runnable [`Resolution`].

use moniker_core::{Cause, Fallible, Optional};

use crate::model::AliasTable;

/// One expansion step of an alias walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The alias that was expanded.
    pub name: String,
    /// Its expansion, verbatim.
    pub expansion: String,
}

/// The product of a terminating alias walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Program to execute.
    pub program: String,
    /// Arguments: expansion arguments first, caller arguments last.
    pub args: Vec<String>,
    /// Alias names traversed, in walk order.
    pub trail: Vec<String>,
}

/// Walk the expansion steps starting from `name`, lazily.
///
/// Each step expands the current head token; the walk ends at the first
/// head that names no alias. There is no cycle detection here: on a table
/// whose links loop, the iterator yields steps forever, so bound it with
/// `take` before collecting. [`resolve`] is the guarded form.
pub fn chain<'a>(table: &'a AliasTable, name: &str) -> Chain<'a> {
    Chain {
        table,
        next: Some(name.to_string()),
    }
}

/// Iterator returned by [`chain`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    table: &'a AliasTable,
    next: Option<String>,
}

impl Iterator for Chain<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let name = self.next.take()?;
        match self.table.lookup(&name) {
            Optional::Present(expansion) => {
                let expansion = expansion.to_string();
                self.next = expansion.split_whitespace().next().map(str::to_string);
                Some(Step { name, expansion })
            }
            Optional::Absent => None,
        }
    }
}

impl std::iter::FusedIterator for Chain<'_> {}

/// Resolve `name` to a runnable command.
///
/// Walks alias links like [`chain`] but refuses to loop: revisiting an
/// alias fails with a cause naming the cycle path. Each hop contributes its
/// trailing tokens ahead of the tokens accumulated so far, so the deepest
/// expansion supplies the leading arguments; `extra_args` go last. The
/// starting `name` must be a defined alias. Expansions split on
/// whitespace; there is no quoting.
pub fn resolve(table: &AliasTable, name: &str, extra_args: &[String]) -> Fallible<Resolution> {
    let mut trail: Vec<String> = Vec::new();
    let mut pending: Vec<String> = Vec::new();
    let mut current = name.to_string();

    loop {
        if trail.iter().any(|visited| visited == &current) {
            return Fallible::failure(Cause::new(format!(
                "alias cycle: {} -> {current}",
                trail.join(" -> ")
            )));
        }
        match table.lookup(&current) {
            Optional::Absent => {
                if trail.is_empty() {
                    return Fallible::failure(Cause::new(format!("unknown alias: {current}")));
                }
                let mut args = pending;
                args.extend(extra_args.iter().cloned());
                tracing::debug!(
                    alias = %name,
                    program = %current,
                    hops = trail.len(),
                    "alias resolved"
                );
                return Fallible::Success(Resolution {
                    program: current,
                    args,
                    trail,
                });
            }
            Optional::Present(expansion) => {
                let mut tokens = expansion.split_whitespace().map(str::to_string);
                let Some(head) = tokens.next() else {
                    return Fallible::failure(Cause::new(format!(
                        "alias {current} expands to nothing"
                    )));
                };
                let mut hop_args: Vec<String> = tokens.collect();
                hop_args.append(&mut pending);
                pending = hop_args;
                trail.push(current);
                current = head;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> AliasTable {
        pairs
            .iter()
            .map(|(name, expansion)| (name.to_string(), expansion.to_string()))
            .collect()
    }

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn test_resolves_a_single_hop() {
        let aliases = table(&[("g", "git status")]);
        let resolution = resolve(&aliases, "g", &[]);
        assert_eq!(
            resolution,
            Fallible::Success(Resolution {
                program: "git".to_string(),
                args: args(&["status"]),
                trail: vec!["g".to_string()],
            })
        );
    }

    #[test]
    fn test_deeper_expansions_supply_the_leading_arguments() {
        let aliases = table(&[("gl", "g log --oneline"), ("g", "git")]);
        let resolution = resolve(&aliases, "gl", &args(&["-5"]));
        assert_eq!(
            resolution,
            Fallible::Success(Resolution {
                program: "git".to_string(),
                args: args(&["log", "--oneline", "-5"]),
                trail: vec!["gl".to_string(), "g".to_string()],
            })
        );
    }

    #[test]
    fn test_every_hop_keeps_its_trailing_tokens() {
        let aliases = table(&[("outer", "inner --outer"), ("inner", "prog --inner")]);
        let resolution = resolve(&aliases, "outer", &[]);
        assert_eq!(
            resolution,
            Fallible::Success(Resolution {
                program: "prog".to_string(),
                args: args(&["--inner", "--outer"]),
                trail: vec!["outer".to_string(), "inner".to_string()],
            })
        );
    }

    #[test]
    fn test_an_unknown_alias_fails() {
        let aliases = table(&[("g", "git")]);
        let outcome = resolve(&aliases, "missing", &[]);
        assert_eq!(
            outcome,
            Fallible::Failure(Cause::new("unknown alias: missing"))
        );
    }

    #[test]
    fn test_an_empty_expansion_fails() {
        let aliases = table(&[("hollow", "   ")]);
        let outcome = resolve(&aliases, "hollow", &[]);
        assert_eq!(
            outcome,
            Fallible::Failure(Cause::new("alias hollow expands to nothing"))
        );
    }

    #[test]
    fn test_a_cycle_fails_with_its_path() {
        let aliases = table(&[("a", "b"), ("b", "a --flag")]);
        let outcome = resolve(&aliases, "a", &[]);
        assert_eq!(
            outcome,
            Fallible::Failure(Cause::new("alias cycle: a -> b -> a"))
        );
    }

    #[test]
    fn test_a_self_reference_fails() {
        let aliases = table(&[("me", "me again")]);
        let outcome = resolve(&aliases, "me", &[]);
        assert_eq!(outcome, Fallible::Failure(Cause::new("alias cycle: me -> me")));
    }

    #[test]
    fn test_chain_walks_lazily_and_stops_at_the_first_non_alias() {
        let aliases = table(&[("gl", "g log"), ("g", "git")]);
        let steps: Vec<Step> = chain(&aliases, "gl").collect();
        assert_eq!(
            steps,
            [
                Step {
                    name: "gl".to_string(),
                    expansion: "g log".to_string(),
                },
                Step {
                    name: "g".to_string(),
                    expansion: "git".to_string(),
                },
            ]
        );
        assert_eq!(chain(&aliases, "git").count(), 0);
    }

    #[test]
    fn test_chain_follows_loops_without_terminating_them() {
        let aliases = table(&[("me", "me again")]);
        let steps: Vec<Step> = chain(&aliases, "me").take(3).collect();
        assert_eq!(steps.len(), 3);
        assert!(steps.iter().all(|step| step.name == "me"));
    }
}
