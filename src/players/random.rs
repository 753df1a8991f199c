//! Uniform random player.

use tracing::debug;

use super::Player;
use crate::board::Board;
use crate::core::{CellId, CellState, GameRng, Result};

/// Picks a cell uniformly at random every turn, with no legality check.
///
/// Targeting an occupied cell usually gets the move rejected and wastes
/// the turn. That is intended: this player is a baseline, not a search.
#[derive(Clone, Debug)]
pub struct RandomPlayer<S> {
    mark: S,
    rng: GameRng,
}

impl<S: CellState> RandomPlayer<S> {
    pub fn new(mark: S, rng: GameRng) -> Self {
        Self { mark, rng }
    }
}

impl<K: CellId, S: CellState> Player<K, S> for RandomPlayer<S> {
    fn mark(&self) -> S {
        self.mark
    }

    fn take_turn(&mut self, board: &mut dyn Board<K, S>) -> Result<()> {
        let Some(&cell) = self.rng.choose(board.grid().cells()) else {
            return Ok(());
        };
        let accepted = board.request_change(cell, self.mark)?;
        debug!(mark = %self.mark, %cell, accepted, "random move");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{GameBoard, GameQuery};
    use crate::core::{Grid, Mark};
    use crate::policy::BlankOnly;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn turn(player: &mut RandomPlayer<Mark>, board: &mut dyn Board<u32, Mark>) {
        player.take_turn(board).unwrap();
    }

    #[test]
    fn test_one_request_per_turn() {
        let mut board = GameBoard::new(Grid::square(3).unwrap(), BlankOnly);
        let requests = Rc::new(RefCell::new(0));
        let r = Rc::clone(&requests);
        board.on_change_requested(move |_| *r.borrow_mut() += 1);

        let mut player = RandomPlayer::new(Mark::O, GameRng::new(42));
        for n in 1..=20 {
            turn(&mut player, &mut board);
            assert_eq!(*requests.borrow(), n);
        }
    }

    #[test]
    fn test_only_writes_own_mark() {
        let mut board = GameBoard::new(Grid::square(3).unwrap(), BlankOnly);
        let mut player = RandomPlayer::new(Mark::X, GameRng::new(3));
        for _ in 0..30 {
            turn(&mut player, &mut board);
        }
        assert!(board
            .cells()
            .iter()
            .all(|(_, s)| *s == Mark::X || *s == Mark::Blank));
        assert!(board.moves_applied() > 0);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let play = |seed| {
            let mut board = GameBoard::new(Grid::square(3).unwrap(), BlankOnly);
            let mut player = RandomPlayer::new(Mark::O, GameRng::new(seed));
            for _ in 0..4 {
                turn(&mut player, &mut board);
            }
            board.cells().to_vec()
        };
        assert_eq!(play(11), play(11));
    }
}
