//! Presence or absence of a value.
//!
//! [`Optional`] is the leaf of the core algebra: either a value is
//! [`Present`](Optional::Present) or it is [`Absent`](Optional::Absent).
//! Absence is a single shared value across all element types, represented
//! by the [`Nothing`] sentinel; see its docs for the equality this implies.

use std::any::Any;

use crate::cause::Cause;
use crate::disjoint::Disjoint;
use crate::fallible::Fallible;
use crate::iter::{IntoIter, Iter};

/// A value that may or may not be present.
///
/// Combinators on the present side do nothing when the value is absent, so
/// a pipeline of `map`, `and_then`, and `filter` calls runs exactly as far
/// as its first absence and no further.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Optional<T> {
    /// A value is present.
    Present(T),
    /// No value. Every absent value is the same value; see [`Nothing`].
    #[default]
    Absent,
}

impl<T> Optional<T> {
    /// Wrap a value.
    pub const fn present(value: T) -> Self {
        Optional::Present(value)
    }

    /// The absent value.
    pub const fn absent() -> Self {
        Optional::Absent
    }

    /// Whether a value is present.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// Whether the value is absent.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Optional::Absent)
    }

    /// Borrow the payload, leaving the original in place.
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Mutably borrow the payload.
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Apply `transform` to the value, if present.
    ///
    /// `transform` is not invoked when the value is absent.
    pub fn map<U>(self, transform: impl FnOnce(T) -> U) -> Optional<U> {
        match self {
            Optional::Present(value) => Optional::Present(transform(value)),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Feed the value into a continuation that may itself come up absent.
    ///
    /// `continuation` is not invoked when the value is absent.
    pub fn and_then<U>(self, continuation: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
        match self {
            Optional::Present(value) => continuation(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Keep the value only if it satisfies `predicate`.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self {
            Optional::Present(value) if predicate(&value) => Optional::Present(value),
            _ => Optional::Absent,
        }
    }

    /// Replace the value with `next`, keeping absence.
    ///
    /// `next` is already evaluated by the time this runs; use
    /// [`and_then`](Self::and_then) when the second computation should be
    /// skipped on absence.
    pub fn and<U>(self, next: Optional<U>) -> Optional<U> {
        match self {
            Optional::Present(_) => next,
            Optional::Absent => Optional::Absent,
        }
    }

    /// The value, or `fallback` if absent.
    ///
    /// `fallback` is evaluated eagerly; see
    /// [`unwrap_or_else`](Self::unwrap_or_else) for the lazy form.
    #[must_use]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => fallback,
        }
    }

    /// The value, or the result of `fallback` if absent.
    #[must_use]
    pub fn unwrap_or_else(self, fallback: impl FnOnce() -> T) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => fallback(),
        }
    }

    /// Collapse both sides into one result.
    ///
    /// Exactly one of the two callbacks runs.
    pub fn map_or_else<U>(
        self,
        on_absent: impl FnOnce() -> U,
        on_present: impl FnOnce(T) -> U,
    ) -> U {
        match self {
            Optional::Present(value) => on_present(value),
            Optional::Absent => on_absent(),
        }
    }

    /// Lift into [`Fallible`], turning absence into `cause`.
    pub fn ok_or(self, cause: Cause) -> Fallible<T> {
        self.ok_or_else(|| cause)
    }

    /// Lift into [`Fallible`], turning absence into a lazily built cause.
    pub fn ok_or_else(self, cause: impl FnOnce() -> Cause) -> Fallible<T> {
        match self {
            Optional::Present(value) => Fallible::Success(value),
            Optional::Absent => Fallible::Failure(cause()),
        }
    }

    /// View as a [`Disjoint`] with absence on the first side.
    pub fn into_disjoint(self) -> Disjoint<(), T> {
        match self {
            Optional::Present(value) => Disjoint::Second(value),
            Optional::Absent => Disjoint::First(()),
        }
    }

    /// Convert into the standard library's `Option`.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }

    /// Iterate over the value, if present.
    ///
    /// Calling `iter` again starts over from the same value.
    pub fn iter(&self) -> Iter<'_, T> {
        IntoIter::new(self.as_ref().into_option())
    }
}

impl<T: Any> Optional<T> {
    /// Keep the value only if it is of type `U`.
    ///
    /// A present value of any other type narrows to absent.
    pub fn downcast<U: Any>(self) -> Optional<U> {
        self.and_then(|value| {
            let boxed: Box<dyn Any> = Box::new(value);
            match boxed.downcast::<U>() {
                Ok(narrowed) => Optional::Present(*narrowed),
                Err(_) => Optional::Absent,
            }
        })
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Optional::Present(value),
            None => Optional::Absent,
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.into_option())
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Collect a sequence of optionals into an optional sequence.
///
/// Stops consuming at the first absent element and yields absent; otherwise
/// yields the collected present values in order.
impl<T, V: FromIterator<T>> FromIterator<Optional<T>> for Optional<V> {
    fn from_iter<I: IntoIterator<Item = Optional<T>>>(iter: I) -> Self {
        let mut interrupted = false;
        let collected: V = iter
            .into_iter()
            .map_while(|item| match item {
                Optional::Present(value) => Some(value),
                Optional::Absent => {
                    interrupted = true;
                    None
                }
            })
            .collect();
        if interrupted {
            Optional::Absent
        } else {
            Optional::Present(collected)
        }
    }
}

/// The shared absent value.
///
/// Absence carries no element, so there is nothing for an element type to
/// distinguish: `Optional::<i32>::absent()`, `Optional::<String>::absent()`
/// and `Nothing` are all the same value and all compare equal. This is a
/// deliberate property of the algebra, and the `PartialEq` impls between
/// `Nothing` and [`Optional`] are the one place it is defined.
///
/// ```
/// use moniker_core::{Nothing, Optional};
///
/// assert_eq!(Optional::<i32>::absent(), Nothing);
/// assert_eq!(Nothing, Optional::<String>::absent());
/// assert_ne!(Optional::present(1), Nothing);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nothing;

impl<T> From<Nothing> for Optional<T> {
    fn from(_: Nothing) -> Self {
        Optional::Absent
    }
}

impl<T> PartialEq<Nothing> for Optional<T> {
    fn eq(&self, _: &Nothing) -> bool {
        self.is_absent()
    }
}

impl<T> PartialEq<Optional<T>> for Nothing {
    fn eq(&self, other: &Optional<T>) -> bool {
        other.is_absent()
    }
}
