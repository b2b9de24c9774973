//! Scoped use of a releasable resource.
//!
//! [`using`] pairs a resource with the one block allowed to touch it and
//! guarantees the resource's [`release`](Scoped::release) runs when the
//! block is done, on every exit path. This is the only ordering guarantee
//! the core makes: acquire, then apply, then release.

/// A resource that must be released when its scope ends.
pub trait Scoped {
    /// Release the resource.
    ///
    /// Called exactly once by [`using`], after the apply block finishes and
    /// before control returns to the caller, whether the block returned or
    /// panicked.
    fn release(&mut self);
}

/// Apply a block to a resource, releasing the resource afterwards.
///
/// ```
/// use moniker_core::{using, Scoped};
///
/// struct Tally(u32);
///
/// impl Scoped for Tally {
///     fn release(&mut self) {
///         self.0 = 0;
///     }
/// }
///
/// let doubled = using(Tally(3), |tally| tally.0 * 2);
/// assert_eq!(doubled, 6);
/// ```
pub fn using<R: Scoped, T>(resource: R, apply: impl FnOnce(&mut R) -> T) -> T {
    let mut guard = ReleaseGuard(resource);
    apply(&mut guard.0)
}

struct ReleaseGuard<R: Scoped>(R);

impl<R: Scoped> Drop for ReleaseGuard<R> {
    fn drop(&mut self) {
        self.0.release();
    }
}
