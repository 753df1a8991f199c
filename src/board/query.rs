//! Board access traits.
//!
//! [`GameQuery`] is the read-only view handed to score rules.
//! [`Board`] adds the single mutation entry point handed to players.

use crate::core::{Grid, Result};

/// Read-only view over a board.
pub trait GameQuery<K, S> {
    /// Current state of `id`.
    ///
    /// Fails with [`EngineError::InvalidCell`](crate::core::EngineError::InvalidCell)
    /// for identifiers outside the grid.
    fn state(&self, id: K) -> Result<S>;

    /// Every `(id, state)` pair, in the grid's row-major order.
    fn cells(&self) -> &[(K, S)];

    /// Board geometry.
    fn grid(&self) -> &Grid<K>;

    /// Number of accepted moves so far. Rejected attempts do not count.
    fn moves_applied(&self) -> u32;
}

/// A board players can submit moves to.
pub trait Board<K, S>: GameQuery<K, S> {
    /// Ask for `id` to become `proposed`.
    ///
    /// Returns `Ok(true)` if the move policy accepted and the cell changed,
    /// `Ok(false)` if it was rejected.
    fn request_change(&mut self, id: K, proposed: S) -> Result<bool>;
}
