//! User-facing rendering of failed runs.
//!
//! A cause renders as its message sequence, outermost first: the head line
//! names the program, every later message becomes an indented bullet. The
//! same shape serves chains (each bullet is one `because`) and aggregates
//! (each bullet is one member's complaint).

use moniker_core::Cause;
use moniker_shell::ExitCode;

/// Exit code reported when a command fails for any non-usage reason.
pub const FAILURE_CODE: u8 = 1;

/// Exit code reported for a malformed command line, clap's own convention.
pub const USAGE_CODE: u8 = 2;

/// Render a cause for stderr, one message per line.
#[must_use]
pub fn render(cause: &Cause) -> String {
    let mut report = String::new();
    for (index, message) in cause.messages().enumerate() {
        if index == 0 {
            report.push_str("moniker: ");
        } else {
            report.push_str("  - ");
        }
        report.push_str(message);
        report.push('\n');
    }
    report
}

/// The code this process should exit with to report a child's exit.
///
/// Exit statuses outside `0..=255` cannot be forwarded and collapse to
/// [`FAILURE_CODE`].
#[must_use]
pub fn process_code(code: ExitCode) -> u8 {
    u8::try_from(code.code()).unwrap_or(FAILURE_CODE)
}
