//! Move-validation policies.
//!
//! The board consults a [`MovePolicy`] for every requested change and
//! applies the change only if the policy allows it. Boards are generic
//! over the policy, so swapping rules never touches board code.
//!
//! Two reference policies ship with the crate:
//! - [`BlankOnly`]: marks may only go into empty cells
//! - [`ReplacementPolicy`]: empty cells plus a per-mark overwrite budget
//!
//! Ad-hoc policies can be written as closures via [`from_fn`]:
//!
//! ```
//! use turnboard::core::Mark;
//! use turnboard::policy::{self, MovePolicy};
//!
//! // Only odd-numbered cells may be played.
//! let mut odd_only = policy::from_fn(|id: u32, _current: Mark, _proposed: Mark| id % 2 == 1);
//! assert!(odd_only.allows(3, Mark::Blank, Mark::X));
//! assert!(!odd_only.allows(4, Mark::Blank, Mark::X));
//! ```

mod blank_only;
mod replacement;

pub use blank_only::BlankOnly;
pub use replacement::ReplacementPolicy;

/// Decides whether a proposed cell change is legal.
///
/// Takes `&mut self` because policies may keep counters that advance
/// each time they allow a move.
pub trait MovePolicy<K, S> {
    /// Return true to let the board apply `current -> proposed` on `id`.
    fn allows(&mut self, id: K, current: S, proposed: S) -> bool;
}

impl<K, S, P> MovePolicy<K, S> for Box<P>
where
    P: MovePolicy<K, S> + ?Sized,
{
    fn allows(&mut self, id: K, current: S, proposed: S) -> bool {
        (**self).allows(id, current, proposed)
    }
}

/// Policy backed by a closure. See [`from_fn`].
#[derive(Clone)]
pub struct FnPolicy<F> {
    check: F,
}

impl<K, S, F> MovePolicy<K, S> for FnPolicy<F>
where
    F: FnMut(K, S, S) -> bool,
{
    fn allows(&mut self, id: K, current: S, proposed: S) -> bool {
        (self.check)(id, current, proposed)
    }
}

impl<F> std::fmt::Debug for FnPolicy<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnPolicy")
    }
}

/// Wrap a `(id, current, proposed) -> bool` closure as a policy.
pub fn from_fn<F>(check: F) -> FnPolicy<F> {
    FnPolicy { check }
}
