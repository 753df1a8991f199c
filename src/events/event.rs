//! Notification payloads.
//!
//! Three notifications exist:
//! - [`ChangeRequested`]: before the move policy runs, for every attempt
//! - [`CellChanged`]: after a cell was updated, only for accepted moves
//! - [`GameOver`]: once per game, when scoring reaches a terminal result

use serde::{Deserialize, Serialize};

use crate::scoring::GameOutcome;

/// A move was proposed. Fired even if the policy then rejects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRequested<K, S> {
    /// Target cell.
    pub id: K,
    /// State of the cell at the time of the request.
    pub current: S,
    /// State the mover asked for.
    pub proposed: S,
}

/// A cell was updated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellChanged<K, S> {
    /// Updated cell.
    pub id: K,
    /// State before the update.
    pub old: S,
    /// State after the update.
    pub new: S,
}

/// The game reached a winner or a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOver<S> {
    pub outcome: GameOutcome<S>,
}
