//! Bridge between externally scheduled computations and [`Fallible`].
//!
//! The core runs nothing. A caller schedules work however it likes - a task
//! runtime, a thread, a child process - and describes the terminal state of
//! that work as a [`Settled`] value. The bridge folds a settled state, or a
//! future of one, into a `Fallible` with exactly one continuation. It never
//! spawns, blocks, suspends, or times out; any suspension point belongs to
//! the caller's future.

use std::future::{Future, Ready};

use futures::FutureExt;

use crate::cause::Cause;
use crate::fallible::Fallible;

/// The terminal state of an externally scheduled computation.
///
/// Exactly one of these describes any finished computation: it completed
/// with a value, it was cancelled before settling, or it faulted with one
/// or more causes.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled<T> {
    /// The computation finished and produced a value.
    Completed(T),
    /// The computation was cancelled before it could settle.
    Cancelled,
    /// The computation failed with the given causes, in occurrence order.
    Faulted(Vec<Cause>),
}

impl<T> Settled<T> {
    /// A faulted state with a single cause.
    pub fn fault(cause: impl Into<Cause>) -> Self {
        Settled::Faulted(vec![cause.into()])
    }
}

impl<T> Fallible<T> {
    /// Fold a terminal state into a fallible value.
    ///
    /// Cancellation becomes the distinguished [`Cause::cancelled`]. A single
    /// fault cause is wrapped directly; several become one aggregate cause
    /// preserving their order, so a lone failure never grows an aggregate
    /// shell around it.
    pub fn from_settled(settled: Settled<T>) -> Self {
        match settled {
            Settled::Completed(value) => Fallible::Success(value),
            Settled::Cancelled => Fallible::Failure(Cause::cancelled()),
            Settled::Faulted(causes) => Fallible::Failure(Cause::aggregate(causes)),
        }
    }
}

/// Attach the one bridge continuation to a settling future.
///
/// The returned future resolves to [`Fallible::from_settled`] of the inner
/// future's output. No executor is implied; the caller drives it.
pub fn from_future<T, F>(settling: F) -> impl Future<Output = Fallible<T>>
where
    F: Future<Output = Settled<T>>,
{
    settling.map(Fallible::from_settled)
}

/// An already-settled value is an already-resolved future.
///
/// Awaiting a `Fallible` yields it back unchanged; no work is deferred.
impl<T> std::future::IntoFuture for Fallible<T> {
    type Output = Fallible<T>;
    type IntoFuture = Ready<Fallible<T>>;

    fn into_future(self) -> Ready<Fallible<T>> {
        std::future::ready(self)
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn test_completed_settles_into_success() {
        assert_eq!(Fallible::from_settled(Settled::Completed(5)), Fallible::Success(5));
    }

    #[test]
    fn test_cancelled_settles_into_the_distinguished_cause() {
        let outcome: Fallible<i32> = Fallible::from_settled(Settled::Cancelled);
        match outcome {
            Fallible::Failure(cause) => assert!(cause.is_cancellation()),
            Fallible::Success(_) => panic!("cancellation settled into success"),
        }
    }

    #[test]
    fn test_single_fault_is_wrapped_directly() {
        let outcome: Fallible<i32> = Fallible::from_settled(Settled::fault(Cause::new("only")));
        match outcome {
            Fallible::Failure(cause) => {
                assert_eq!(cause, Cause::new("only"));
                assert_eq!(cause.components().len(), 0);
            }
            Fallible::Success(_) => panic!("fault settled into success"),
        }
    }

    #[test]
    fn test_multiple_faults_aggregate_in_order() {
        let outcome: Fallible<i32> =
            Fallible::from_settled(Settled::Faulted(vec![Cause::new("a"), Cause::new("b")]));
        match outcome {
            Fallible::Failure(cause) => {
                let messages: Vec<&str> = cause.messages().collect();
                assert_eq!(messages, ["a", "b"]);
            }
            Fallible::Success(_) => panic!("faults settled into success"),
        }
    }

    #[test]
    fn test_from_future_resolves_through_the_continuation() {
        let future = from_future(async { Settled::Completed(7) });
        assert_eq!(block_on(future), Fallible::Success(7));

        let future = from_future(async { Settled::<i32>::fault(Cause::new("late")) });
        assert_eq!(block_on(future), Fallible::Failure(Cause::new("late")));
    }

    #[test]
    fn test_awaiting_a_fallible_yields_it_unchanged() {
        let success = block_on(async { Fallible::success(3).await });
        assert_eq!(success, Fallible::Success(3));

        let failure = block_on(async { Fallible::<i32>::failure(Cause::new("x")).await });
        assert_eq!(failure, Fallible::Failure(Cause::new("x")));
    }
}
