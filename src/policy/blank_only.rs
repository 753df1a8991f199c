//! Empty-cells-only policy.

use tracing::debug;

use super::MovePolicy;
use crate::core::{CellId, CellState};

/// Allows a mark only into an empty cell.
///
/// Anything else is rejected, including a repeat move into an occupied
/// cell. Proposing the empty state is a no-op and is rejected as well.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlankOnly;

impl<K: CellId, S: CellState> MovePolicy<K, S> for BlankOnly {
    fn allows(&mut self, id: K, current: S, proposed: S) -> bool {
        let allowed = current.is_empty() && !proposed.is_empty();
        if !allowed {
            debug!(cell = %id, %current, %proposed, "cell is not blank");
        }
        allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;

    #[test]
    fn test_blank_accepts_mark() {
        let mut policy = BlankOnly;
        assert!(policy.allows(1u32, Mark::Blank, Mark::X));
        assert!(policy.allows(1u32, Mark::Blank, Mark::O));
    }

    #[test]
    fn test_occupied_rejected() {
        let mut policy = BlankOnly;
        assert!(!policy.allows(1u32, Mark::X, Mark::O));
        assert!(!policy.allows(1u32, Mark::X, Mark::X));
        assert!(!policy.allows(1u32, Mark::O, Mark::Blank));
    }

    #[test]
    fn test_blank_noop_rejected() {
        let mut policy = BlankOnly;
        assert!(!policy.allows(1u32, Mark::Blank, Mark::Blank));
    }
}
