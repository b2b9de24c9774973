//! A value of one of two alternatives.
//!
//! [`Disjoint`] is the general two-sided sum the other core types are
//! special cases of: [`Fallible`] is `Disjoint<Cause, T>` with failure on
//! the first side, [`Optional`] is `Disjoint<(), T>`. Unlike those two it
//! carries no bias in the data itself; each combinator names the side it
//! works on, and the sequence-like views treat the second side as the
//! payload by convention.

use std::any::Any;

use crate::cause::Cause;
use crate::fallible::Fallible;
use crate::iter::{IntoIter, Iter};
use crate::optional::Optional;

/// One of two alternatives.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disjoint<L, R> {
    /// The first alternative.
    First(L),
    /// The second alternative.
    Second(R),
}

impl<L, R> Disjoint<L, R> {
    /// Whether this holds the first alternative.
    #[must_use]
    pub const fn is_first(&self) -> bool {
        matches!(self, Disjoint::First(_))
    }

    /// Whether this holds the second alternative.
    #[must_use]
    pub const fn is_second(&self) -> bool {
        matches!(self, Disjoint::Second(_))
    }

    /// Borrow whichever payload is held.
    pub fn as_ref(&self) -> Disjoint<&L, &R> {
        match self {
            Disjoint::First(first) => Disjoint::First(first),
            Disjoint::Second(second) => Disjoint::Second(second),
        }
    }

    /// Mutably borrow whichever payload is held.
    pub fn as_mut(&mut self) -> Disjoint<&mut L, &mut R> {
        match self {
            Disjoint::First(first) => Disjoint::First(first),
            Disjoint::Second(second) => Disjoint::Second(second),
        }
    }

    /// Exchange the sides.
    pub fn swap(self) -> Disjoint<R, L> {
        match self {
            Disjoint::First(first) => Disjoint::Second(first),
            Disjoint::Second(second) => Disjoint::First(second),
        }
    }

    /// Apply `transform` to the first payload, if held.
    ///
    /// `transform` is not invoked when the second side is held.
    pub fn map_first<L2>(self, transform: impl FnOnce(L) -> L2) -> Disjoint<L2, R> {
        match self {
            Disjoint::First(first) => Disjoint::First(transform(first)),
            Disjoint::Second(second) => Disjoint::Second(second),
        }
    }

    /// Apply `transform` to the second payload, if held.
    ///
    /// `transform` is not invoked when the first side is held.
    pub fn map_second<R2>(self, transform: impl FnOnce(R) -> R2) -> Disjoint<L, R2> {
        match self {
            Disjoint::First(first) => Disjoint::First(first),
            Disjoint::Second(second) => Disjoint::Second(transform(second)),
        }
    }

    /// Feed the first payload into a continuation that chooses a side.
    pub fn and_then_first<L2>(
        self,
        continuation: impl FnOnce(L) -> Disjoint<L2, R>,
    ) -> Disjoint<L2, R> {
        match self {
            Disjoint::First(first) => continuation(first),
            Disjoint::Second(second) => Disjoint::Second(second),
        }
    }

    /// Feed the second payload into a continuation that chooses a side.
    pub fn and_then_second<R2>(
        self,
        continuation: impl FnOnce(R) -> Disjoint<L, R2>,
    ) -> Disjoint<L, R2> {
        match self {
            Disjoint::First(first) => Disjoint::First(first),
            Disjoint::Second(second) => continuation(second),
        }
    }

    /// The first payload, or `fallback` when the second side is held.
    #[must_use]
    pub fn first_or(self, fallback: L) -> L {
        self.first_or_else(|_| fallback)
    }

    /// The first payload, or one built from the second payload.
    #[must_use]
    pub fn first_or_else(self, fallback: impl FnOnce(R) -> L) -> L {
        match self {
            Disjoint::First(first) => first,
            Disjoint::Second(second) => fallback(second),
        }
    }

    /// The second payload, or `fallback` when the first side is held.
    #[must_use]
    pub fn second_or(self, fallback: R) -> R {
        self.second_or_else(|_| fallback)
    }

    /// The second payload, or one built from the first payload.
    #[must_use]
    pub fn second_or_else(self, fallback: impl FnOnce(L) -> R) -> R {
        match self {
            Disjoint::First(first) => fallback(first),
            Disjoint::Second(second) => second,
        }
    }

    /// Collapse both sides into one result.
    ///
    /// Exactly one of the two callbacks runs.
    pub fn fold<T>(self, on_first: impl FnOnce(L) -> T, on_second: impl FnOnce(R) -> T) -> T {
        match self {
            Disjoint::First(first) => on_first(first),
            Disjoint::Second(second) => on_second(second),
        }
    }

    /// Keep the second payload only if it satisfies `predicate`.
    ///
    /// A second payload that fails the predicate is consumed by `on_fail`
    /// and the result lands on the first side. A held first side passes
    /// through and neither callback runs.
    pub fn filter(
        self,
        predicate: impl FnOnce(&R) -> bool,
        on_fail: impl FnOnce(R) -> L,
    ) -> Self {
        match self {
            Disjoint::Second(second) => {
                if predicate(&second) {
                    Disjoint::Second(second)
                } else {
                    Disjoint::First(on_fail(second))
                }
            }
            Disjoint::First(first) => Disjoint::First(first),
        }
    }

    /// The first payload, as an [`Optional`].
    pub fn into_first(self) -> Optional<L> {
        match self {
            Disjoint::First(first) => Optional::Present(first),
            Disjoint::Second(_) => Optional::Absent,
        }
    }

    /// The second payload, as an [`Optional`].
    pub fn into_second(self) -> Optional<R> {
        match self {
            Disjoint::First(_) => Optional::Absent,
            Disjoint::Second(second) => Optional::Present(second),
        }
    }

    /// Iterate over the second payload, if held.
    pub fn iter(&self) -> Iter<'_, R> {
        IntoIter::new(self.as_ref().into_second().into_option())
    }
}

impl<L, R: Any> Disjoint<L, R> {
    /// Keep the second payload only if it is of type `R2`.
    ///
    /// A second payload of any other type is consumed by `on_fail` and the
    /// result lands on the first side, so narrowing stays total: nothing is
    /// silently dropped.
    pub fn downcast_second<R2: Any>(self, on_fail: impl FnOnce(R) -> L) -> Disjoint<L, R2> {
        match self {
            Disjoint::First(first) => Disjoint::First(first),
            Disjoint::Second(second) => {
                let boxed: Box<dyn Any> = Box::new(second);
                match boxed.downcast::<R2>() {
                    Ok(narrowed) => Disjoint::Second(*narrowed),
                    Err(boxed) => match boxed.downcast::<R>() {
                        Ok(original) => Disjoint::First(on_fail(*original)),
                        // the box was built from an R two lines up
                        Err(_) => unreachable!("downcast payload changed type"),
                    },
                }
            }
        }
    }
}

impl<T> Disjoint<Cause, T> {
    /// View the first side as failure and the second as success.
    pub fn into_fallible(self) -> Fallible<T> {
        match self {
            Disjoint::First(cause) => Fallible::Failure(cause),
            Disjoint::Second(value) => Fallible::Success(value),
        }
    }
}

impl<T> Disjoint<(), T> {
    /// View the first side as absence and the second as presence.
    pub fn into_optional(self) -> Optional<T> {
        match self {
            Disjoint::First(()) => Optional::Absent,
            Disjoint::Second(value) => Optional::Present(value),
        }
    }
}

impl<T> From<Fallible<T>> for Disjoint<Cause, T> {
    fn from(fallible: Fallible<T>) -> Self {
        fallible.into_disjoint()
    }
}

impl<L, R> IntoIterator for Disjoint<L, R> {
    type Item = R;
    type IntoIter = IntoIter<R>;

    fn into_iter(self) -> IntoIter<R> {
        IntoIter::new(self.into_second().into_option())
    }
}

impl<'a, L, R> IntoIterator for &'a Disjoint<L, R> {
    type Item = &'a R;
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Iter<'a, R> {
        self.iter()
    }
}
