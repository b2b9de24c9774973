//! Success or failure of a computation.
//!
//! [`Fallible`] carries either a produced value or the [`Cause`] of the
//! failure that prevented one. The failure side is opaque: combinators move
//! a cause along without reading it, and only the explicit consumers at the
//! end of a pipeline decide what a cause means.

use std::any::Any;

use crate::cause::Cause;
use crate::disjoint::Disjoint;
use crate::iter::{IntoIter, Iter};
use crate::optional::Optional;

/// The outcome of a computation that can fail.
///
/// A failure short-circuits every value-side combinator after it, so the
/// first cause in a pipeline is the one the caller sees, unchanged unless
/// [`map_cause`](Self::map_cause) or [`recover`](Self::recover) is applied
/// to it deliberately.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallible<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed, and this is why.
    Failure(Cause),
}

impl<T> Fallible<T> {
    /// Wrap a produced value.
    pub const fn success(value: T) -> Self {
        Fallible::Success(value)
    }

    /// Wrap a failure cause.
    ///
    /// Accepts anything that converts into a [`Cause`], which includes every
    /// `std::error::Error` type.
    pub fn failure(cause: impl Into<Cause>) -> Self {
        Fallible::Failure(cause.into())
    }

    /// Whether the computation produced a value.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Fallible::Success(_))
    }

    /// Whether the computation failed.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Fallible::Failure(_))
    }

    /// Borrow the produced value, if any.
    pub fn value(&self) -> Optional<&T> {
        match self {
            Fallible::Success(value) => Optional::Present(value),
            Fallible::Failure(_) => Optional::Absent,
        }
    }

    /// Borrow the failure cause, if any.
    pub fn cause(&self) -> Optional<&Cause> {
        match self {
            Fallible::Success(_) => Optional::Absent,
            Fallible::Failure(cause) => Optional::Present(cause),
        }
    }

    /// Apply `transform` to the value, carrying any failure through.
    ///
    /// `transform` is not invoked on failure.
    pub fn map<U>(self, transform: impl FnOnce(T) -> U) -> Fallible<U> {
        match self {
            Fallible::Success(value) => Fallible::Success(transform(value)),
            Fallible::Failure(cause) => Fallible::Failure(cause),
        }
    }

    /// Apply `transform` to the cause, carrying any success through.
    ///
    /// The counterpart of [`map`](Self::map) for the failure side; the value
    /// side is untouched.
    pub fn map_cause(self, transform: impl FnOnce(Cause) -> Cause) -> Self {
        match self {
            Fallible::Success(value) => Fallible::Success(value),
            Fallible::Failure(cause) => Fallible::Failure(transform(cause)),
        }
    }

    /// Wrap the cause beneath a higher-level message.
    ///
    /// Shorthand for `map_cause(|cause| cause.context(message))`.
    pub fn context(self, message: impl Into<String>) -> Self {
        self.map_cause(|cause| cause.context(message))
    }

    /// Feed the value into a continuation that may itself fail.
    ///
    /// `continuation` is not invoked on failure.
    pub fn and_then<U>(self, continuation: impl FnOnce(T) -> Fallible<U>) -> Fallible<U> {
        match self {
            Fallible::Success(value) => continuation(value),
            Fallible::Failure(cause) => Fallible::Failure(cause),
        }
    }

    /// Keep the value only if it satisfies `predicate`.
    ///
    /// A value that fails the predicate is consumed by `on_fail` to produce
    /// the failure cause. An existing failure passes through and neither
    /// callback runs.
    pub fn filter(
        self,
        predicate: impl FnOnce(&T) -> bool,
        on_fail: impl FnOnce(T) -> Cause,
    ) -> Self {
        match self {
            Fallible::Success(value) => {
                if predicate(&value) {
                    Fallible::Success(value)
                } else {
                    Fallible::Failure(on_fail(value))
                }
            }
            Fallible::Failure(cause) => Fallible::Failure(cause),
        }
    }

    /// Hand a failure to `handler`, which may repair it or fail anew.
    ///
    /// `handler` is not invoked on success.
    pub fn recover(self, handler: impl FnOnce(Cause) -> Fallible<T>) -> Self {
        match self {
            Fallible::Success(value) => Fallible::Success(value),
            Fallible::Failure(cause) => handler(cause),
        }
    }

    /// Replace the value with `next`, keeping failure.
    ///
    /// `next` is already evaluated by the time this runs; use
    /// [`and_then`](Self::and_then) when the second computation should be
    /// skipped on failure.
    pub fn and<U>(self, next: Fallible<U>) -> Fallible<U> {
        match self {
            Fallible::Success(_) => next,
            Fallible::Failure(cause) => Fallible::Failure(cause),
        }
    }

    /// The value, or `fallback` if the computation failed.
    #[must_use]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Fallible::Success(value) => value,
            Fallible::Failure(_) => fallback,
        }
    }

    /// The value, or one built from the cause if the computation failed.
    #[must_use]
    pub fn unwrap_or_else(self, fallback: impl FnOnce(Cause) -> T) -> T {
        match self {
            Fallible::Success(value) => value,
            Fallible::Failure(cause) => fallback(cause),
        }
    }

    /// Forget the cause, keeping only presence.
    pub fn into_optional(self) -> Optional<T> {
        match self {
            Fallible::Success(value) => Optional::Present(value),
            Fallible::Failure(_) => Optional::Absent,
        }
    }

    /// Convert into the standard library's `Result`.
    pub fn into_result(self) -> Result<T, Cause> {
        match self {
            Fallible::Success(value) => Ok(value),
            Fallible::Failure(cause) => Err(cause),
        }
    }

    /// Build from a `Result`, converting the error into a [`Cause`].
    pub fn from_result<E: Into<Cause>>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Fallible::Success(value),
            Err(error) => Fallible::Failure(error.into()),
        }
    }

    /// View as a [`Disjoint`] with the cause on the first side.
    pub fn into_disjoint(self) -> Disjoint<Cause, T> {
        match self {
            Fallible::Success(value) => Disjoint::Second(value),
            Fallible::Failure(cause) => Disjoint::First(cause),
        }
    }

    /// Iterate over the value, if the computation succeeded.
    pub fn iter(&self) -> Iter<'_, T> {
        IntoIter::new(self.value().into_option())
    }
}

impl<T: Any> Fallible<T> {
    /// Keep the value only if it is of type `U`.
    ///
    /// A successful value of any other type is consumed by `on_fail` to
    /// produce the failure cause. An existing failure passes through.
    pub fn downcast_or_else<U: Any>(self, on_fail: impl FnOnce(T) -> Cause) -> Fallible<U> {
        self.and_then(|value| {
            let boxed: Box<dyn Any> = Box::new(value);
            match boxed.downcast::<U>() {
                Ok(narrowed) => Fallible::Success(*narrowed),
                Err(boxed) => match boxed.downcast::<T>() {
                    Ok(original) => Fallible::Failure(on_fail(*original)),
                    // the box was built from a T two lines up
                    Err(_) => unreachable!("downcast payload changed type"),
                },
            }
        })
    }
}

impl<T, E: Into<Cause>> From<Result<T, E>> for Fallible<T> {
    fn from(result: Result<T, E>) -> Self {
        Fallible::from_result(result)
    }
}

impl<T> From<Disjoint<Cause, T>> for Fallible<T> {
    fn from(disjoint: Disjoint<Cause, T>) -> Self {
        match disjoint {
            Disjoint::First(cause) => Fallible::Failure(cause),
            Disjoint::Second(value) => Fallible::Success(value),
        }
    }
}

impl<T> IntoIterator for Fallible<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.into_optional().into_option())
    }
}

impl<'a, T> IntoIterator for &'a Fallible<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Collect a sequence of fallibles into a fallible sequence.
///
/// Stops consuming at the first failure and yields it; otherwise yields the
/// collected values in order.
impl<T, V: FromIterator<T>> FromIterator<Fallible<T>> for Fallible<V> {
    fn from_iter<I: IntoIterator<Item = Fallible<T>>>(iter: I) -> Self {
        let mut interruption: Option<Cause> = None;
        let collected: V = iter
            .into_iter()
            .map_while(|item| match item {
                Fallible::Success(value) => Some(value),
                Fallible::Failure(cause) => {
                    interruption = Some(cause);
                    None
                }
            })
            .collect();
        match interruption {
            Some(cause) => Fallible::Failure(cause),
            None => Fallible::Success(collected),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use proptest::prelude::*;

    use super::*;

    fn any_fallible() -> impl Strategy<Value = Fallible<i32>> {
        prop_oneof![
            any::<i32>().prop_map(Fallible::success),
            "[a-z]{1,8}".prop_map(|message| Fallible::failure(Cause::new(message))),
        ]
    }

    fn broke(message: &str) -> Fallible<i32> {
        Fallible::Failure(Cause::new(message))
    }

    #[test]
    fn test_map_carries_failure_through_untouched() {
        let calls = Cell::new(0u32);
        let outcome = broke("boom").map(|n| {
            calls.set(calls.get() + 1);
            n + 1
        });
        assert_eq!(outcome, broke("boom"));
        assert_eq!(calls.get(), 0);
        assert_eq!(Fallible::success(2).map(|n| n + 1), Fallible::Success(3));
    }

    #[test]
    fn test_map_cause_touches_only_the_failure_side() {
        let annotate = |cause: Cause| cause.context("while syncing");
        assert_eq!(
            broke("boom").map_cause(annotate).cause().map(Cause::to_string),
            Optional::Present("while syncing".to_string())
        );
        assert_eq!(
            Fallible::success(1).map_cause(|_| Cause::new("never")),
            Fallible::Success(1)
        );
    }

    #[test]
    fn test_context_wraps_the_cause() {
        let outcome = broke("boom").context("running alias");
        let rendered: Vec<String> = outcome
            .cause()
            .into_iter()
            .flat_map(|cause| cause.messages().map(str::to_string).collect::<Vec<_>>())
            .collect();
        assert_eq!(rendered, ["running alias", "boom"]);
    }

    #[test]
    fn test_and_then_stops_at_the_first_failure() {
        let calls = Cell::new(0u32);
        let step = |n: i32| {
            calls.set(calls.get() + 1);
            Fallible::success(n + 1)
        };
        let outcome = Fallible::success(0)
            .and_then(step)
            .and_then(|_| broke("midway"))
            .and_then(step);
        assert_eq!(outcome, broke("midway"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_filter_fails_values_that_miss_the_predicate() {
        let outcome =
            Fallible::success(3).filter(|n| n % 2 == 0, |n| Cause::new(format!("{n} is odd")));
        assert_eq!(outcome, broke("3 is odd"));
        assert_eq!(
            Fallible::success(4).filter(|n| n % 2 == 0, |_| Cause::new("unused")),
            Fallible::Success(4)
        );
    }

    #[test]
    fn test_filter_passes_existing_failures_through() {
        let ran = Cell::new(false);
        let outcome = broke("earlier").filter(
            |_| {
                ran.set(true);
                true
            },
            |_| {
                ran.set(true);
                Cause::new("unused")
            },
        );
        assert_eq!(outcome, broke("earlier"));
        assert!(!ran.get());
    }

    #[test]
    fn test_recover_runs_only_on_failure() {
        let calls = Cell::new(0u32);
        let repaired = broke("flaky").recover(|_| {
            calls.set(calls.get() + 1);
            Fallible::success(0)
        });
        assert_eq!(repaired, Fallible::Success(0));
        assert_eq!(calls.get(), 1);

        let untouched = Fallible::success(5).recover(|_| {
            calls.set(calls.get() + 1);
            Fallible::success(0)
        });
        assert_eq!(untouched, Fallible::Success(5));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_recover_may_fail_again() {
        let outcome = broke("first").recover(|cause| Fallible::Failure(cause.context("second")));
        let messages: Vec<String> = outcome
            .cause()
            .into_iter()
            .flat_map(|cause| cause.messages().map(str::to_string).collect::<Vec<_>>())
            .collect();
        assert_eq!(messages, ["second", "first"]);
    }

    #[test]
    fn test_and_sequences_success() {
        assert_eq!(Fallible::success(1).and(Fallible::success("x")), Fallible::Success("x"));
        assert_eq!(broke("stop").and(Fallible::success("x")), Fallible::Failure(Cause::new("stop")));
    }

    #[test]
    fn test_unwrap_or_else_receives_the_cause() {
        let fallback = |cause: Cause| i32::try_from(cause.messages().count()).unwrap_or(0);
        assert_eq!(broke("one").unwrap_or_else(fallback), 1);
        assert_eq!(Fallible::success(9).unwrap_or_else(fallback), 9);
        assert_eq!(broke("x").unwrap_or(7), 7);
    }

    #[test]
    fn test_downcast_or_else_keeps_only_the_named_type() {
        let hit: Fallible<i32> = Fallible::success(7i32).downcast_or_else(|_| Cause::new("wrong"));
        assert_eq!(hit, Fallible::Success(7));

        let miss: Fallible<String> =
            Fallible::success(7i32).downcast_or_else(|n| Cause::new(format!("not text: {n}")));
        assert_eq!(miss, Fallible::Failure(Cause::new("not text: 7")));

        let carried: Fallible<String> =
            broke("earlier").downcast_or_else(|_| Cause::new("unused"));
        assert_eq!(carried, Fallible::Failure(Cause::new("earlier")));
    }

    #[test]
    fn test_result_round_trip_converts_errors_into_causes() {
        let ok: Fallible<i32> = Fallible::from_result(Ok::<_, std::io::Error>(3));
        assert_eq!(ok, Fallible::Success(3));

        let err: Fallible<i32> = Result::Err(std::io::Error::other("pipe closed")).into();
        assert_eq!(
            err.cause().map(Cause::to_string),
            Optional::Present("pipe closed".to_string())
        );

        assert_eq!(Fallible::success(3).into_result(), Ok(3));
        assert_eq!(broke("x").into_result(), Err(Cause::new("x")));
    }

    #[test]
    fn test_accessors_borrow_the_matching_side() {
        let success = Fallible::success(4);
        assert_eq!(success.value(), Optional::Present(&4));
        assert!(success.cause().is_absent());

        let failure = broke("why");
        assert!(failure.value().is_absent());
        assert_eq!(failure.cause(), Optional::Present(&Cause::new("why")));
    }

    #[test]
    fn test_iter_yields_the_success_value() {
        assert_eq!(Fallible::success(7).iter().collect::<Vec<_>>(), vec![&7]);
        assert_eq!(broke("x").iter().count(), 0);
        assert_eq!(Fallible::success(7).into_iter().collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn test_collect_keeps_the_first_cause_and_stops_consuming() {
        let consumed = Cell::new(0u32);
        let items = [
            Fallible::success(1),
            broke("first"),
            broke("second"),
            Fallible::success(4),
        ];
        let collected: Fallible<Vec<i32>> = items
            .into_iter()
            .inspect(|_| consumed.set(consumed.get() + 1))
            .collect();
        assert_eq!(collected, Fallible::Failure(Cause::new("first")));
        assert_eq!(consumed.get(), 2);

        let collected: Fallible<Vec<i32>> =
            [Fallible::success(1), Fallible::success(2)].into_iter().collect();
        assert_eq!(collected, Fallible::Success(vec![1, 2]));
    }

    #[test]
    fn test_into_disjoint_round_trips() {
        assert_eq!(Fallible::success(3).into_disjoint(), Disjoint::Second(3));
        assert_eq!(broke("x").into_disjoint(), Disjoint::First(Cause::new("x")));
        assert_eq!(Fallible::from(Disjoint::<Cause, i32>::Second(3)), Fallible::Success(3));
    }

    proptest! {
        #[test]
        fn prop_map_identity(fallible in any_fallible()) {
            prop_assert_eq!(fallible.clone().map(|n| n), fallible);
        }

        #[test]
        fn prop_map_composes(fallible in any_fallible()) {
            let f = |n: i32| n.wrapping_add(1);
            let g = |n: i32| n.wrapping_mul(3);
            prop_assert_eq!(fallible.clone().map(f).map(g), fallible.map(|n| g(f(n))));
        }

        #[test]
        fn prop_bind_left_identity(n in any::<i32>()) {
            let f = |n: i32| Fallible::success(n.wrapping_mul(2));
            prop_assert_eq!(Fallible::success(n).and_then(f), f(n));
        }

        #[test]
        fn prop_bind_right_identity(fallible in any_fallible()) {
            prop_assert_eq!(fallible.clone().and_then(Fallible::success), fallible);
        }

        #[test]
        fn prop_bind_associates(fallible in any_fallible()) {
            let f = |n: i32| Fallible::success(n.wrapping_add(7));
            let g = |n: i32| {
                if n % 2 == 0 {
                    Fallible::success(n)
                } else {
                    Fallible::failure(Cause::new("odd"))
                }
            };
            prop_assert_eq!(
                fallible.clone().and_then(f).and_then(g),
                fallible.and_then(|n| f(n).and_then(g))
            );
        }

        #[test]
        fn prop_round_trips_through_result(fallible in any_fallible()) {
            prop_assert_eq!(
                Fallible::from_result(fallible.clone().into_result()),
                fallible
            );
        }

        #[test]
        fn prop_round_trips_through_disjoint(fallible in any_fallible()) {
            prop_assert_eq!(Fallible::from(fallible.clone().into_disjoint()), fallible);
        }
    }
}
