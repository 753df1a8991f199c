//! Cell identifiers and cell states.
//!
//! The engine is generic over both: a board maps some key type `K`
//! (the [`CellId`]) to some value type `S` (the [`CellState`]).
//! The only thing the engine needs to know about a state is which value
//! means "empty".
//!
//! [`Mark`] is the reference state used by tic-tac-toe.

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A key addressing one board position.
///
/// Blanket-implemented for every small, hashable, printable value type,
/// so `u32`, `(u8, u8)` newtypes and the like all work out of the box.
pub trait CellId: Copy + Eq + Hash + Debug + Display + 'static {}

impl<T> CellId for T where T: Copy + Eq + Hash + Debug + Display + 'static {}

/// The value occupying a cell.
///
/// Every state type has exactly one "empty" sentinel. Boards start with
/// every cell set to [`CellState::EMPTY`], and the empty state doubles as
/// the draw marker in [`GameOutcome::marker`](crate::scoring::GameOutcome::marker).
pub trait CellState: Copy + Eq + Hash + Debug + Display + 'static {
    /// The sentinel meaning "nothing here".
    const EMPTY: Self;

    /// Check whether this is the empty sentinel.
    #[must_use]
    fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

/// Tic-tac-toe mark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Unoccupied cell.
    #[default]
    Blank,
    /// First player's mark.
    X,
    /// Second player's mark.
    O,
}

impl Mark {
    /// The two playable marks, in turn order.
    pub const PLAYABLE: [Mark; 2] = [Mark::X, Mark::O];
}

impl CellState for Mark {
    const EMPTY: Self = Mark::Blank;
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::Blank => write!(f, "Blank"),
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}
