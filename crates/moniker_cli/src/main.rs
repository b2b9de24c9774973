//! The `moniker` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::process::ExitCode;

use moniker_cli::report::{self, FAILURE_CODE, USAGE_CODE};
use moniker_cli::{dispatch, parse_invocation};
use moniker_core::{Disjoint, Fallible};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match parse_invocation(std::env::args_os()) {
        Fallible::Failure(cause) => {
            eprint!("{}", report::render(&cause));
            ExitCode::from(USAGE_CODE)
        }
        Fallible::Success(Disjoint::First(notice)) => {
            print!("{}", notice.text());
            ExitCode::SUCCESS
        }
        Fallible::Success(Disjoint::Second(invocation)) => match dispatch(invocation).await {
            Fallible::Success(code) => ExitCode::from(report::process_code(code)),
            Fallible::Failure(cause) => {
                eprint!("{}", report::render(&cause));
                ExitCode::from(FAILURE_CODE)
            }
        },
    }
}
