//! Line completion.

use super::{ScoreOutcome, ScoreRule};
use crate::board::GameQuery;
use crate::core::{CellId, CellState};

/// Wins for the state filling an entire row, column or diagonal.
///
/// Lines are scanned in grid order (rows top-to-bottom, columns
/// left-to-right, then diagonals); the first complete line decides.
#[derive(Clone, Copy, Debug, Default)]
pub struct InARow;

impl<K: CellId, S: CellState> ScoreRule<K, S> for InARow {
    fn name(&self) -> &str {
        "in-a-row"
    }

    fn evaluate(&mut self, query: &dyn GameQuery<K, S>) -> ScoreOutcome<S> {
        for line in query.grid().lines() {
            let mut states = line.iter().map(|&id| query.state(id).ok());
            let Some(Some(first)) = states.next() else {
                continue;
            };
            if first.is_empty() {
                continue;
            }
            if states.all(|s| s == Some(first)) {
                return ScoreOutcome::Winner(first);
            }
        }

        ScoreOutcome::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, GameBoard};
    use crate::core::{Grid, Mark};
    use crate::policy;

    type FreeBoard = GameBoard<u32, Mark, policy::FnPolicy<fn(u32, Mark, Mark) -> bool>>;

    fn board_with(moves: &[(u32, Mark)]) -> FreeBoard {
        let anything: fn(u32, Mark, Mark) -> bool = |_, _, _| true;
        let mut board = GameBoard::new(Grid::square(3).unwrap(), policy::from_fn(anything));
        for &(id, mark) in moves {
            board.request_change(id, mark).unwrap();
        }
        board
    }

    fn eval(board: &FreeBoard) -> ScoreOutcome<Mark> {
        let query: &dyn GameQuery<u32, Mark> = board;
        InARow.evaluate(query)
    }

    #[test]
    fn test_empty_board_pending() {
        let board = board_with(&[]);
        assert_eq!(eval(&board), ScoreOutcome::Pending);
    }

    #[test]
    fn test_top_row() {
        let board = board_with(&[(1, Mark::X), (2, Mark::X), (3, Mark::X), (5, Mark::O)]);
        assert_eq!(eval(&board), ScoreOutcome::Winner(Mark::X));
    }

    #[test]
    fn test_column() {
        let board = board_with(&[(2, Mark::O), (5, Mark::O), (8, Mark::O)]);
        assert_eq!(eval(&board), ScoreOutcome::Winner(Mark::O));
    }

    #[test]
    fn test_anti_diagonal() {
        let board = board_with(&[(3, Mark::X), (5, Mark::X), (7, Mark::X)]);
        assert_eq!(eval(&board), ScoreOutcome::Winner(Mark::X));
    }

    #[test]
    fn test_incomplete_line() {
        let board = board_with(&[(1, Mark::X), (2, Mark::X), (3, Mark::O)]);
        assert_eq!(eval(&board), ScoreOutcome::Pending);
    }

    #[test]
    fn test_scan_order_precedence() {
        // Rows are scanned top to bottom.
        let board = board_with(&[
            (7, Mark::O),
            (8, Mark::O),
            (9, Mark::O),
            (1, Mark::X),
            (2, Mark::X),
            (3, Mark::X),
        ]);
        assert_eq!(eval(&board), ScoreOutcome::Winner(Mark::X));

        let board = board_with(&[
            (1, Mark::X),
            (4, Mark::X),
            (7, Mark::X),
            (3, Mark::O),
            (5, Mark::O),
            (9, Mark::O),
            (6, Mark::O),
        ]);
        // Column 0 (X) precedes column 2 (O).
        assert_eq!(eval(&board), ScoreOutcome::Winner(Mark::X));
    }
}
