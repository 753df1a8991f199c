//! Strict policy with a per-mark replacement budget.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::MovePolicy;
use crate::core::{CellId, CellState};

/// Empty cells are always playable; occupied cells may be overwritten a
/// limited number of times per mark.
///
/// - empty -> mark: allowed
/// - any state -> same state: rejected (no-op)
/// - mark -> different mark: allowed while the *proposed* mark has budget
///   left, consuming one unit
/// - mark -> empty: rejected
///
/// ```
/// use turnboard::core::Mark;
/// use turnboard::policy::{MovePolicy, ReplacementPolicy};
///
/// let mut policy = ReplacementPolicy::new(1);
/// assert!(policy.allows(5u32, Mark::O, Mark::X));
/// assert!(!policy.allows(6u32, Mark::O, Mark::X));
/// assert_eq!(policy.remaining(Mark::X), 0);
/// assert_eq!(policy.remaining(Mark::O), 1);
/// ```
#[derive(Clone, Debug)]
pub struct ReplacementPolicy<S> {
    budget: u32,
    used: FxHashMap<S, u32>,
}

impl<S: CellState> ReplacementPolicy<S> {
    /// Create a policy granting each mark `budget` replacements.
    pub fn new(budget: u32) -> Self {
        Self {
            budget,
            used: FxHashMap::default(),
        }
    }

    /// Replacements granted to each mark.
    #[must_use]
    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Replacements `mark` has performed so far.
    #[must_use]
    pub fn used(&self, mark: S) -> u32 {
        self.used.get(&mark).copied().unwrap_or(0)
    }

    /// Replacements `mark` may still perform.
    #[must_use]
    pub fn remaining(&self, mark: S) -> u32 {
        self.budget.saturating_sub(self.used(mark))
    }
}

impl<K: CellId, S: CellState> MovePolicy<K, S> for ReplacementPolicy<S> {
    fn allows(&mut self, id: K, current: S, proposed: S) -> bool {
        if current == proposed {
            debug!(cell = %id, %current, "no-op move rejected");
            return false;
        }
        if current.is_empty() {
            return true;
        }
        if proposed.is_empty() {
            debug!(cell = %id, %current, "clearing a cell is not allowed");
            return false;
        }

        if self.remaining(proposed) == 0 {
            info!(mark = %proposed, cell = %id, "cannot replace cell, no replacements remaining");
            return false;
        }

        *self.used.entry(proposed).or_insert(0) += 1;
        info!(
            mark = %proposed,
            cell = %id,
            remaining = self.remaining(proposed),
            "cell replaced"
        );
        true
    }
}
