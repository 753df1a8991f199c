//! Players.
//!
//! A player receives the board once per turn and makes at most one
//! [`Board::request_change`] call. Whether the move is accepted is the
//! board's business: a rejected move still uses up the turn.
//!
//! - [`ConsolePlayer`]: reads a cell identifier from a line-based input
//! - [`RandomPlayer`]: picks any cell uniformly, occupied or not

mod console;
mod random;

pub use console::{ConsolePlayer, LineReader};
pub use random::RandomPlayer;

use crate::board::Board;
use crate::core::Result;

/// A participant that takes turns on a board.
pub trait Player<K, S> {
    /// The state this player writes into cells.
    fn mark(&self) -> S;

    /// Make zero or one move.
    fn take_turn(&mut self, board: &mut dyn Board<K, S>) -> Result<()>;
}

impl<K, S, P: Player<K, S> + ?Sized> Player<K, S> for Box<P> {
    fn mark(&self) -> S {
        (**self).mark()
    }

    fn take_turn(&mut self, board: &mut dyn Board<K, S>) -> Result<()> {
        (**self).take_turn(board)
    }
}
