//! Core sum types for MONIKER.
//!
//! Three isomorphic shapes carry every outcome in the system:
//!
//! - [`Optional`] - a value that is present or absent.
//! - [`Fallible`] - a value that was produced or a [`Cause`] explaining why
//!   not.
//! - [`Disjoint`] - a value of one of two alternatives, with no bias baked
//!   into the data.
//!
//! Each type exposes the same combinator algebra - map, chain, filter,
//! sequence, reduce, narrow, iterate - with the same guarantees: callbacks
//! on the value side never run once a pipeline has gone absent, failed, or
//! taken the first side, and combinators never panic and never catch.
//!
//! Around the algebra sit the edges of the system: [`boundary`] converts
//! panics, `Result`s, and lookups into core values; [`bridge`] folds the
//! terminal state of externally scheduled work into a [`Fallible`];
//! [`scoped`] scopes a releasable resource to one block.
//!
//! This crate is pure: no I/O, no scheduler, no clock.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod boundary;
pub mod bridge;
pub mod cause;
pub mod disjoint;
pub mod fallible;
pub mod iter;
pub mod optional;
pub mod scoped;

pub use bridge::Settled;
pub use cause::{Cause, Messages};
pub use disjoint::Disjoint;
pub use fallible::Fallible;
pub use iter::{IntoIter, Iter};
pub use optional::{Nothing, Optional};
pub use scoped::{Scoped, using};
