//! Full-board draw.

use super::{ScoreOutcome, ScoreRule};
use crate::board::GameQuery;
use crate::core::{CellId, CellState};

/// Draw once no cell is empty.
///
/// Does not look for winners itself. Placed after [`InARow`](super::InARow)
/// in a composite, a winning final move still reports the winner because
/// the composite ranks winners above draws.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoardFilled;

impl<K: CellId, S: CellState> ScoreRule<K, S> for BoardFilled {
    fn name(&self) -> &str {
        "board-filled"
    }

    fn evaluate(&mut self, query: &dyn GameQuery<K, S>) -> ScoreOutcome<S> {
        if query.cells().iter().all(|(_, state)| !state.is_empty()) {
            ScoreOutcome::Draw
        } else {
            ScoreOutcome::Pending
        }
    }
}
