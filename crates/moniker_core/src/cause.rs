//! Opaque failure causes.
//!
//! A [`Cause`] describes why a computation failed. The core never interprets
//! what a cause means. It only defines how causes propagate through
//! combinators, how they nest when failures wrap or accumulate, and how a
//! nested cause flattens back into a sequence of messages for reporting.

use std::fmt;

use crate::optional::Optional;

/// Message reported for a cancelled computation.
const CANCELLED_MESSAGE: &str = "cancelled";

/// An opaque description of a failure.
///
/// A cause is plain data. It carries a message, and may wrap the cause that
/// preceded it (a causal chain) or the causes of several computations that
/// failed together (an aggregate). Once inside a
/// [`Failure`](crate::Fallible::Failure) it rides through every combinator
/// untouched; only [`map_cause`](crate::Fallible::map_cause) and the
/// explicit consumers such as [`recover`](crate::Fallible::recover) may
/// transform or discard it.
///
/// `Cause` deliberately does not implement [`std::error::Error`]. That keeps
/// the blanket `impl<E: Error> From<E> for Cause` coherent, so any
/// collaborator error type converts into a cause at the boundary where it
/// occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    kind: CauseKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CauseKind {
    /// A plain message with nothing beneath it.
    Leaf { message: String },
    /// A message wrapping the cause that led to it.
    Chain {
        message: String,
        antecedent: Box<Cause>,
    },
    /// The causes of several computations that failed together.
    Aggregate { components: Vec<Cause> },
    /// The computation was cancelled before it settled.
    Cancelled,
}

impl Cause {
    /// A leaf cause carrying only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Cause {
            kind: CauseKind::Leaf {
                message: message.into(),
            },
        }
    }

    /// Wrap this cause beneath a higher-level message, forming a chain.
    ///
    /// The receiver becomes the antecedent of the new cause, whatever its
    /// shape. Nothing the receiver carried is lost.
    ///
    /// ```
    /// use moniker_core::Cause;
    ///
    /// let cause = Cause::new("connection refused").context("could not reach registry");
    /// let messages: Vec<&str> = cause.messages().collect();
    /// assert_eq!(messages, ["could not reach registry", "connection refused"]);
    /// ```
    #[must_use]
    pub fn context(self, message: impl Into<String>) -> Self {
        Cause {
            kind: CauseKind::Chain {
                message: message.into(),
                antecedent: Box::new(self),
            },
        }
    }

    /// Combine the causes of several failed computations into one.
    ///
    /// An empty collection yields a placeholder leaf. A single cause is
    /// returned unchanged rather than wrapped, so one failure stays one
    /// cause no matter which path produced it. Input order is preserved.
    pub fn aggregate(components: impl IntoIterator<Item = Cause>) -> Self {
        let mut components: Vec<Cause> = components.into_iter().collect();
        match components.pop() {
            None => Cause::new("failure with no recorded cause"),
            Some(last) if components.is_empty() => last,
            Some(last) => {
                components.push(last);
                Cause {
                    kind: CauseKind::Aggregate { components },
                }
            }
        }
    }

    /// The cause of a computation that was cancelled before it settled.
    pub fn cancelled() -> Self {
        Cause {
            kind: CauseKind::Cancelled,
        }
    }

    /// Build a cause from an error, preserving its `source` chain.
    ///
    /// Each error in the chain becomes one link, with the outermost error's
    /// message first.
    pub fn from_error(error: &(dyn std::error::Error + 'static)) -> Self {
        let message = error.to_string();
        match error.source() {
            Some(source) => Cause::from_error(source).context(message),
            None => Cause::new(message),
        }
    }

    /// Whether this cause records a cancellation.
    #[must_use]
    pub fn is_cancellation(&self) -> bool {
        matches!(self.kind, CauseKind::Cancelled)
    }

    /// The message this cause itself carries.
    ///
    /// Aggregates have no message of their own, only components.
    pub fn message(&self) -> Optional<&str> {
        match &self.kind {
            CauseKind::Leaf { message } | CauseKind::Chain { message, .. } => {
                Optional::Present(message)
            }
            CauseKind::Aggregate { .. } => Optional::Absent,
            CauseKind::Cancelled => Optional::Present(CANCELLED_MESSAGE),
        }
    }

    /// The cause this one wraps, if it is a chain link.
    pub fn antecedent(&self) -> Optional<&Cause> {
        match &self.kind {
            CauseKind::Chain { antecedent, .. } => Optional::Present(antecedent),
            _ => Optional::Absent,
        }
    }

    /// The component causes, if this is an aggregate.
    #[must_use]
    pub fn components(&self) -> &[Cause] {
        match &self.kind {
            CauseKind::Aggregate { components } => components,
            _ => &[],
        }
    }

    /// Flatten this cause into its messages, depth first.
    ///
    /// A chain yields its own message and then its antecedent's messages.
    /// An aggregate yields the messages of each component in order and
    /// contributes no message of its own. The iterator is lazy; calling
    /// `messages` again restarts from the top.
    pub fn messages(&self) -> Messages<'_> {
        Messages { stack: vec![self] }
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CauseKind::Leaf { message } | CauseKind::Chain { message, .. } => {
                f.write_str(message)
            }
            CauseKind::Aggregate { components } => {
                write!(f, "{} failures", components.len())
            }
            CauseKind::Cancelled => f.write_str(CANCELLED_MESSAGE),
        }
    }
}

impl<E: std::error::Error> From<E> for Cause {
    fn from(error: E) -> Self {
        let message = error.to_string();
        match error.source() {
            Some(source) => Cause::from_error(source).context(message),
            None => Cause::new(message),
        }
    }
}

/// Depth-first iterator over the messages of a [`Cause`].
///
/// Returned by [`Cause::messages`].
#[derive(Debug, Clone)]
pub struct Messages<'a> {
    stack: Vec<&'a Cause>,
}

impl<'a> Iterator for Messages<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while let Some(cause) = self.stack.pop() {
            match &cause.kind {
                CauseKind::Leaf { message } => return Some(message),
                CauseKind::Cancelled => return Some(CANCELLED_MESSAGE),
                CauseKind::Chain {
                    message,
                    antecedent,
                } => {
                    self.stack.push(antecedent);
                    return Some(message);
                }
                CauseKind::Aggregate { components } => {
                    for component in components.iter().rev() {
                        self.stack.push(component);
                    }
                }
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Messages<'_> {}
