//! Subcommand implementations.
//!
//! Every command loads the configuration, does its work through the config
//! and shell crates, and reports back as a `Fallible<ExitCode>`. Printing
//! happens here; deciding the process exit code happens in `main`.

use std::path::Path;

use moniker_config::{Configuration, Resolution, ShellSettings, resolve};
use moniker_core::{Cause, Fallible, Optional, Settled};
use moniker_shell::{CommandSpec, ExitCode, gather};

use crate::args::{Command, Invocation};

/// Execute a parsed invocation.
pub async fn dispatch(invocation: Invocation) -> Fallible<ExitCode> {
    let path = invocation.config.unwrap_or_else(moniker_config::default_path);
    tracing::debug!(path = %path.display(), "dispatching");
    match invocation.command {
        Command::Run {
            alias,
            args,
            dry_run,
        } => run(&path, &alias, &args, dry_run).await,
        Command::Which { alias } => which(&path, &alias),
        Command::List => list(&path),
        Command::Add { name, expansion } => add(&path, name, expansion),
        Command::Remove { name } => remove(&path, &name),
        Command::Check => check(&path).await,
    }
}

/// The stored configuration, or an empty one when none exists yet.
fn configuration(path: &Path) -> Fallible<Configuration> {
    moniker_config::load(path).map(|stored| stored.unwrap_or_else(Configuration::default))
}

async fn run(path: &Path, alias: &str, extra: &[String], dry_run: bool) -> Fallible<ExitCode> {
    let prepared = configuration(path).and_then(|configuration| {
        resolve(&configuration.aliases, alias, extra)
            .map(|resolution| command_for(&configuration.shell, resolution))
    });
    let spec = match prepared {
        Fallible::Success(spec) => spec,
        Fallible::Failure(cause) => return Fallible::Failure(cause),
    };
    if dry_run {
        println!("{}", command_line(&spec.program, &spec.args));
        return Fallible::Success(ExitCode::SUCCESS);
    }
    match moniker_shell::run(&spec) {
        Fallible::Success(settling) => settling.await,
        Fallible::Failure(cause) => Fallible::Failure(cause),
    }
}

fn which(path: &Path, alias: &str) -> Fallible<ExitCode> {
    configuration(path).and_then(|configuration| {
        resolve(&configuration.aliases, alias, &[]).map(|resolution| {
            println!("{}", trail_line(&resolution));
            ExitCode::SUCCESS
        })
    })
}

fn list(path: &Path) -> Fallible<ExitCode> {
    configuration(path).map(|configuration| {
        for (name, expansion) in configuration.aliases.entries() {
            println!("{name} = {expansion}");
        }
        ExitCode::SUCCESS
    })
}

fn add(path: &Path, name: String, expansion: String) -> Fallible<ExitCode> {
    if name.split_whitespace().next() != Some(name.as_str()) {
        return Fallible::failure(Cause::new(format!(
            "alias name must be a single word: {name:?}"
        )));
    }
    configuration(path).and_then(|mut configuration| {
        let previous = configuration.aliases.define(name.clone(), expansion);
        moniker_config::save(path, &configuration).map(|()| {
            match previous {
                Optional::Present(old) => println!("replaced {name} (was: {old})"),
                Optional::Absent => println!("added {name}"),
            }
            ExitCode::SUCCESS
        })
    })
}

fn remove(path: &Path, name: &str) -> Fallible<ExitCode> {
    configuration(path).and_then(|mut configuration| match configuration.aliases.remove(name) {
        Optional::Absent => Fallible::failure(Cause::new(format!("unknown alias: {name}"))),
        Optional::Present(_) => moniker_config::save(path, &configuration).map(|()| {
            println!("removed {name}");
            ExitCode::SUCCESS
        }),
    })
}

/// Resolve every alias, collecting all the complaints rather than the first.
async fn check(path: &Path) -> Fallible<ExitCode> {
    let configuration = match configuration(path) {
        Fallible::Success(configuration) => configuration,
        Fallible::Failure(cause) => return Fallible::Failure(cause),
    };
    let table = &configuration.aliases;
    let probes: Vec<_> = table
        .names()
        .map(|name| async move {
            match resolve(table, name, &[]) {
                Fallible::Success(resolution) => Settled::Completed(trail_line(&resolution)),
                Fallible::Failure(cause) => Settled::fault(cause),
            }
        })
        .collect();
    Fallible::from_settled(gather(probes).await).map(|lines| {
        for line in lines {
            println!("{line}");
        }
        ExitCode::SUCCESS
    })
}

/// A command spec for a resolution, with the shell settings applied.
fn command_for(settings: &ShellSettings, resolution: Resolution) -> CommandSpec {
    let mut spec = CommandSpec::new(resolution.program)
        .with_args(resolution.args)
        .with_env(
            settings
                .env
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );
    if let Some(directory) = &settings.working_dir {
        spec = spec.with_cwd(directory);
    }
    spec
}

fn command_line(program: &str, args: &[String]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

fn trail_line(resolution: &Resolution) -> String {
    let mut line = String::new();
    for name in &resolution.trail {
        line.push_str(name);
        line.push_str(" -> ");
    }
    line.push_str(&command_line(&resolution.program, &resolution.args));
    line
}
