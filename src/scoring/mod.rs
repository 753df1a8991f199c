//! Win and draw detection.
//!
//! Score rules are independent checks over a read-only [`GameQuery`].
//! The [`ScoreComposite`] runs all of them once per turn, combines their
//! verdicts and announces the end of the game exactly once.
//!
//! Reference rules:
//! - [`InARow`]: a full row, column or diagonal of one mark wins
//! - [`BoardFilled`]: a full board is a draw
//! - [`MaxTurns`]: a draw after a fixed number of accepted moves
//!
//! ## Example Usage
//!
//! ```
//! use turnboard::board::{Board, GameBoard};
//! use turnboard::core::{Grid, Mark};
//! use turnboard::policy::BlankOnly;
//! use turnboard::scoring::{BoardFilled, GameOutcome, InARow, MaxTurns, ScoreComposite};
//!
//! let mut board = GameBoard::new(Grid::square(3).unwrap(), BlankOnly);
//! let mut score: ScoreComposite<u32, Mark> = ScoreComposite::new()
//!     .with_rule(InARow)
//!     .with_rule(BoardFilled)
//!     .with_rule(MaxTurns::new(15).unwrap());
//!
//! for cell in [1, 2, 3] {
//!     board.request_change(cell, Mark::X).unwrap();
//! }
//! assert_eq!(score.evaluate(&board), Some(GameOutcome::Winner(Mark::X)));
//! ```

mod board_filled;
mod composite;
mod in_a_row;
mod max_turns;

pub use board_filled::BoardFilled;
pub use composite::ScoreComposite;
pub use in_a_row::InARow;
pub use max_turns::MaxTurns;

use serde::{Deserialize, Serialize};

use crate::board::GameQuery;
use crate::core::CellState;

/// Verdict of a single rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreOutcome<S> {
    /// Nothing decided yet.
    Pending,
    /// This state has won.
    Winner(S),
    /// The game is over without a winner.
    Draw,
}

impl<S> ScoreOutcome<S> {
    /// Convert to a final outcome, `None` while pending.
    #[must_use]
    pub fn into_outcome(self) -> Option<GameOutcome<S>> {
        match self {
            ScoreOutcome::Pending => None,
            ScoreOutcome::Winner(s) => Some(GameOutcome::Winner(s)),
            ScoreOutcome::Draw => Some(GameOutcome::Draw),
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, ScoreOutcome::Pending)
    }
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome<S> {
    /// Single winner.
    Winner(S),
    /// Draw (no winner).
    Draw,
}

impl<S: CellState> GameOutcome<S> {
    /// The winning state, or the empty state for a draw.
    ///
    /// ```
    /// use turnboard::core::Mark;
    /// use turnboard::scoring::GameOutcome;
    ///
    /// assert_eq!(GameOutcome::Winner(Mark::O).marker(), Mark::O);
    /// assert_eq!(GameOutcome::<Mark>::Draw.marker(), Mark::Blank);
    /// ```
    #[must_use]
    pub fn marker(&self) -> S {
        match self {
            GameOutcome::Winner(s) => *s,
            GameOutcome::Draw => S::EMPTY,
        }
    }

    /// The winning state, if any.
    #[must_use]
    pub fn winner(&self) -> Option<S> {
        match self {
            GameOutcome::Winner(s) => Some(*s),
            GameOutcome::Draw => None,
        }
    }

    /// Check if `state` won.
    #[must_use]
    pub fn is_winner(&self, state: S) -> bool {
        self.winner() == Some(state)
    }
}

impl<S: std::fmt::Display> std::fmt::Display for GameOutcome<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Winner(s) => write!(f, "{s} wins"),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// A single terminal-condition check.
///
/// Rules only read the board. They take `&mut self` so a rule may keep
/// bookkeeping between turns.
pub trait ScoreRule<K, S> {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Inspect the board and report a verdict.
    fn evaluate(&mut self, query: &dyn GameQuery<K, S>) -> ScoreOutcome<S>;
}

impl<K, S, R> ScoreRule<K, S> for Box<R>
where
    R: ScoreRule<K, S> + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn evaluate(&mut self, query: &dyn GameQuery<K, S>) -> ScoreOutcome<S> {
        (**self).evaluate(query)
    }
}
