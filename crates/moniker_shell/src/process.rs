//! Child processes as settling futures.
//!
//! Spawning happens now; waiting is a future. [`run`] starts the child and
//! hands back a future bridged through the core, so the caller decides when
//! to await and how to combine several children. Nothing here retries,
//! times out, or kills; a spawned child either settles or the caller drops
//! the future.

use std::fmt;
use std::future::Future;

use moniker_core::{Cause, Fallible, Settled, boundary, bridge};
use tokio::process::{Child, Command};
use tokio::task::JoinError;

use crate::command::CommandSpec;
use crate::error::ShellError;

/// Exit code of a finished child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    /// The conventional success code.
    pub const SUCCESS: ExitCode = ExitCode(0);

    /// Wrap a raw exit code.
    pub const fn new(code: i32) -> Self {
        ExitCode(code)
    }

    /// The raw code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Whether the code signals success.
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Start a child process for `spec`.
///
/// The outer [`Fallible`] reports what can go wrong now: an invalid spec or
/// a failed spawn. The inner future settles when the child exits, with its
/// exit code forwarded as a value; termination by signal is the one exit a
/// child cannot report a code for and becomes a failure.
pub fn run(spec: &CommandSpec) -> Fallible<impl Future<Output = Fallible<ExitCode>>> {
    spec.validate().and_then(|()| {
        let mut command = Command::new(&spec.program);
        command
            .args(&spec.args)
            .envs(spec.env.iter().map(|(key, value)| (key, value)));
        if let Some(cwd) = &spec.cwd {
            command.current_dir(cwd);
        }
        match command.spawn() {
            Ok(child) => {
                tracing::debug!(program = %spec.program, pid = ?child.id(), "child spawned");
                Fallible::Success(bridge::from_future(settle(spec.program.clone(), child)))
            }
            Err(source) => Fallible::failure(ShellError::Spawn {
                program: spec.program.clone(),
                source,
            }),
        }
    })
}

async fn settle(program: String, mut child: Child) -> Settled<ExitCode> {
    match child.wait().await {
        Ok(status) => match status.code() {
            Some(code) => {
                tracing::debug!(program = %program, code, "child exited");
                Settled::Completed(ExitCode::new(code))
            }
            None => Settled::fault(Cause::new(format!("{program} was terminated by a signal"))),
        },
        Err(source) => Settled::fault(ShellError::Wait { program, source }),
    }
}

/// Classify the outcome of a joined task as a terminal state.
///
/// A cancelled task is the bridge's cancelled state; a panicked task faults
/// with the panic message.
pub fn settled_join<T>(joined: Result<T, JoinError>) -> Settled<T> {
    match joined {
        Ok(value) => Settled::Completed(value),
        Err(error) if error.is_cancelled() => Settled::Cancelled,
        Err(error) if error.is_panic() => {
            Settled::fault(Cause::new(boundary::panic_message(error.into_panic())))
        }
        Err(error) => Settled::fault(Cause::new(error.to_string())),
    }
}

/// Drive a batch of settling computations to completion.
///
/// Completes with every value, in input order, when nothing went wrong.
/// Otherwise faults with every fault and cancellation cause, still in input
/// order; a cancelled member contributes the distinguished cancellation
/// cause rather than cancelling the batch.
pub async fn gather<T, F>(tasks: Vec<F>) -> Settled<Vec<T>>
where
    F: Future<Output = Settled<T>>,
{
    let outcomes = futures::future::join_all(tasks).await;
    let mut values = Vec::with_capacity(outcomes.len());
    let mut causes = Vec::new();
    for outcome in outcomes {
        match outcome {
            Settled::Completed(value) => values.push(value),
            Settled::Cancelled => causes.push(Cause::cancelled()),
            Settled::Faulted(mut faults) => causes.append(&mut faults),
        }
    }
    if causes.is_empty() {
        Settled::Completed(values)
    } else {
        Settled::Faulted(causes)
    }
}
