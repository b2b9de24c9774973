//! Adapters at the edge of the algebra.
//!
//! Code outside the core signals failure by panicking, by returning
//! `Result`, or by returning nothing at all. The helpers here convert each
//! of those shapes into a core value at the boundary where it occurs, so
//! that everything downstream composes with combinators instead of control
//! flow. Panic capture lives here and only here; no combinator catches.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::cause::Cause;
use crate::fallible::Fallible;
use crate::optional::Optional;

/// Run `action`, converting an unwind into a [`Failure`](Fallible::Failure).
///
/// The cause message is taken from the panic payload when it is a string,
/// which covers `panic!` with a literal or a format string.
pub fn capture<T>(action: impl FnOnce() -> T) -> Fallible<T> {
    match panic::catch_unwind(AssertUnwindSafe(action)) {
        Ok(value) => Fallible::Success(value),
        Err(payload) => Fallible::Failure(Cause::new(panic_message(payload))),
    }
}

/// Like [`capture`], applying `annotate` to the captured cause.
///
/// `annotate` runs only when `action` panics.
pub fn capture_with<T>(
    action: impl FnOnce() -> T,
    annotate: impl FnOnce(Cause) -> Cause,
) -> Fallible<T> {
    capture(action).map_cause(annotate)
}

/// The first element satisfying `predicate`, if any.
pub fn find<I: IntoIterator>(
    items: I,
    predicate: impl FnMut(&I::Item) -> bool,
) -> Optional<I::Item> {
    items.into_iter().find(predicate).into()
}

/// The first element of a slice, if any.
pub fn first<T>(items: &[T]) -> Optional<&T> {
    items.first().into()
}

/// The last element of a slice, if any.
pub fn last<T>(items: &[T]) -> Optional<&T> {
    items.last().into()
}

/// The human-readable message of a panic payload.
///
/// Covers `panic!` with a literal or a format string; any other payload
/// type gets a fixed placeholder. Useful wherever a payload arrives without
/// going through [`capture`], such as a joined task.
pub fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(text) => *text,
        Err(payload) => match payload.downcast::<&'static str>() {
            Ok(text) => (*text).to_string(),
            Err(_) => "panic with a non-string payload".to_string(),
        },
    }
}
