//! Move-count ceiling.

use super::{ScoreOutcome, ScoreRule};
use crate::board::GameQuery;
use crate::core::{CellId, CellState, EngineError, Result};

/// Draw once the board has accepted `ceiling` moves.
///
/// Only accepted moves count, so turns wasted on rejected moves do not
/// bring the ceiling closer.
#[derive(Clone, Copy, Debug)]
pub struct MaxTurns {
    ceiling: u32,
}

impl MaxTurns {
    /// Create the rule. A zero ceiling would end every game before the
    /// first move and is rejected.
    pub fn new(ceiling: u32) -> Result<Self> {
        if ceiling == 0 {
            return Err(EngineError::invalid_config("max_turns must be at least 1"));
        }
        Ok(Self { ceiling })
    }

    #[must_use]
    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }
}

impl<K: CellId, S: CellState> ScoreRule<K, S> for MaxTurns {
    fn name(&self) -> &str {
        "max-turns"
    }

    fn evaluate(&mut self, query: &dyn GameQuery<K, S>) -> ScoreOutcome<S> {
        if query.moves_applied() >= self.ceiling {
            ScoreOutcome::Draw
        } else {
            ScoreOutcome::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, GameBoard};
    use crate::core::{Grid, Mark};
    use crate::policy::ReplacementPolicy;

    type Replacing = GameBoard<u32, Mark, ReplacementPolicy<Mark>>;

    fn eval(rule: &mut MaxTurns, board: &Replacing) -> ScoreOutcome<Mark> {
        let query: &dyn GameQuery<u32, Mark> = board;
        rule.evaluate(query)
    }

    #[test]
    fn test_ceiling_counts_accepted_moves() {
        let mut rule = MaxTurns::new(3).unwrap();
        let mut board = GameBoard::new(Grid::square(3).unwrap(), ReplacementPolicy::new(0));

        board.request_change(1, Mark::X).unwrap();
        board.request_change(2, Mark::O).unwrap();
        assert_eq!(eval(&mut rule, &board), ScoreOutcome::Pending);

        // Rejected: X has no replacements.
        assert!(!board.request_change(2, Mark::X).unwrap());
        assert_eq!(eval(&mut rule, &board), ScoreOutcome::Pending);

        board.request_change(3, Mark::X).unwrap();
        assert_eq!(eval(&mut rule, &board), ScoreOutcome::Draw);
    }

    #[test]
    fn test_replacements_count_as_moves() {
        let mut rule = MaxTurns::new(2).unwrap();
        let mut board = GameBoard::new(Grid::square(3).unwrap(), ReplacementPolicy::new(3));

        board.request_change(5, Mark::X).unwrap();
        board.request_change(5, Mark::O).unwrap();
        assert_eq!(board.moves_applied(), 2);
        assert_eq!(eval(&mut rule, &board), ScoreOutcome::Draw);
    }

    #[test]
    fn test_zero_ceiling_rejected() {
        assert!(matches!(
            MaxTurns::new(0),
            Err(EngineError::InvalidConfig { .. })
        ));
        assert_eq!(MaxTurns::new(1).unwrap().ceiling(), 1);
    }
}
