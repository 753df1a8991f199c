//! The generic game board.

use tracing::{debug, info};

use super::query::{Board, GameQuery};
use crate::core::{CellId, CellState, EngineError, Grid, Result};
use crate::events::{CellChanged, ChangeRequested, EventChannel, SubscriptionId};
use crate::policy::MovePolicy;

/// Board mapping cell identifiers `K` to states `S`, guarded by policy `P`.
///
/// The key set and layout come from the [`Grid`] and never change. Every
/// mutation goes through [`Board::request_change`], which:
///
/// 1. resolves the current state (unknown id: `InvalidCell`)
/// 2. fires "change requested" with `(id, current, proposed)`
/// 3. asks the policy
/// 4. on acceptance, writes the new state, bumps the move counter and
///    fires "cell changed" with `(id, old, new)`
///
/// ```
/// use turnboard::board::{Board, GameBoard, GameQuery};
/// use turnboard::core::{Grid, Mark};
/// use turnboard::policy::BlankOnly;
///
/// let mut board = GameBoard::new(Grid::square(3)?, BlankOnly);
///
/// assert!(board.request_change(5, Mark::X)?);
/// assert!(!board.request_change(5, Mark::O)?);
/// assert_eq!(board.state(5)?, Mark::X);
/// assert_eq!(board.moves_applied(), 1);
/// assert!(board.request_change(10, Mark::O).is_err());
/// # Ok::<(), turnboard::core::EngineError>(())
/// ```
pub struct GameBoard<K, S, P = Box<dyn MovePolicy<K, S>>> {
    grid: Grid<K>,
    /// Row-major, parallel to `grid.cells()`.
    cells: Vec<(K, S)>,
    policy: P,
    moves_applied: u32,
    requested: EventChannel<ChangeRequested<K, S>>,
    changed: EventChannel<CellChanged<K, S>>,
}

impl<K, S, P> GameBoard<K, S, P>
where
    K: CellId,
    S: CellState,
    P: MovePolicy<K, S>,
{
    /// Create a board with every cell empty.
    pub fn new(grid: Grid<K>, policy: P) -> Self {
        let cells = grid.cells().iter().map(|&id| (id, S::EMPTY)).collect();
        Self {
            grid,
            cells,
            policy,
            moves_applied: 0,
            requested: EventChannel::new(),
            changed: EventChannel::new(),
        }
    }

    /// The move policy, for inspecting its counters.
    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Observe every move attempt, accepted or not.
    pub fn on_change_requested(
        &mut self,
        observer: impl FnMut(&ChangeRequested<K, S>) + 'static,
    ) -> SubscriptionId {
        self.requested.subscribe(observer)
    }

    /// Observe accepted moves.
    pub fn on_cell_changed(
        &mut self,
        observer: impl FnMut(&CellChanged<K, S>) + 'static,
    ) -> SubscriptionId {
        self.changed.subscribe(observer)
    }

    /// Stop observing move attempts.
    pub fn unsubscribe_change_requested(&mut self, id: SubscriptionId) -> bool {
        self.requested.unsubscribe(id)
    }

    /// Stop observing accepted moves.
    pub fn unsubscribe_cell_changed(&mut self, id: SubscriptionId) -> bool {
        self.changed.unsubscribe(id)
    }

    /// True once no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|(_, state)| !state.is_empty())
    }

    fn slot(&self, id: K) -> Result<usize> {
        self.grid.slot(id).ok_or_else(|| EngineError::invalid_cell(id))
    }
}

impl<K, S, P> GameQuery<K, S> for GameBoard<K, S, P>
where
    K: CellId,
    S: CellState,
    P: MovePolicy<K, S>,
{
    fn state(&self, id: K) -> Result<S> {
        let slot = self.slot(id)?;
        Ok(self.cells[slot].1)
    }

    fn cells(&self) -> &[(K, S)] {
        &self.cells
    }

    fn grid(&self) -> &Grid<K> {
        &self.grid
    }

    fn moves_applied(&self) -> u32 {
        self.moves_applied
    }
}

impl<K, S, P> Board<K, S> for GameBoard<K, S, P>
where
    K: CellId,
    S: CellState,
    P: MovePolicy<K, S>,
{
    fn request_change(&mut self, id: K, proposed: S) -> Result<bool> {
        let slot = self.slot(id)?;
        let current = self.cells[slot].1;

        debug!(cell = %id, %current, %proposed, "change requested");
        self.requested.emit(&ChangeRequested {
            id,
            current,
            proposed,
        });

        if !self.policy.allows(id, current, proposed) {
            debug!(cell = %id, "change rejected");
            return Ok(false);
        }

        self.cells[slot].1 = proposed;
        self.moves_applied += 1;
        info!(cell = %id, old = %current, new = %proposed, "cell changed");
        self.changed.emit(&CellChanged {
            id,
            old: current,
            new: proposed,
        });

        Ok(true)
    }
}

impl<K, S, P> std::fmt::Debug for GameBoard<K, S, P>
where
    K: std::fmt::Debug,
    S: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameBoard")
            .field("cells", &self.cells)
            .field("moves_applied", &self.moves_applied)
            .field("requested", &self.requested)
            .field("changed", &self.changed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;
    use crate::policy::{self, BlankOnly, ReplacementPolicy};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn blank_board() -> GameBoard<u32, Mark, BlankOnly> {
        GameBoard::new(Grid::square(3).unwrap(), BlankOnly)
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = blank_board();
        assert_eq!(board.cells().len(), 9);
        assert!(board.cells().iter().all(|(_, s)| *s == Mark::Blank));
        assert_eq!(board.moves_applied(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_enumeration_order() {
        let board = blank_board();
        let ids: Vec<u32> = board.cells().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_invalid_cell() {
        let mut board = blank_board();
        assert!(matches!(board.state(0), Err(EngineError::InvalidCell { .. })));
        assert!(matches!(
            board.request_change(42, Mark::X),
            Err(EngineError::InvalidCell { .. })
        ));
    }

    #[test]
    fn test_invalid_cell_fires_nothing() {
        let mut board = blank_board();
        let fired = Rc::new(RefCell::new(0));
        let f = Rc::clone(&fired);
        board.on_change_requested(move |_| *f.borrow_mut() += 1);

        let _ = board.request_change(0, Mark::X);
        assert_eq!(*fired.borrow(), 0);
    }

    #[test]
    fn test_rejected_move_counts_nothing() {
        let mut board = blank_board();
        assert!(board.request_change(1, Mark::X).unwrap());
        assert!(!board.request_change(1, Mark::O).unwrap());
        assert_eq!(board.state(1).unwrap(), Mark::X);
        assert_eq!(board.moves_applied(), 1);
    }

    #[test]
    fn test_notification_sequence() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut board = blank_board();

        let l = Rc::clone(&log);
        board.on_change_requested(move |e| {
            l.borrow_mut()
                .push(format!("requested {} {}->{}", e.id, e.current, e.proposed))
        });
        let l = Rc::clone(&log);
        board.on_cell_changed(move |e| {
            l.borrow_mut()
                .push(format!("changed {} {}->{}", e.id, e.old, e.new))
        });

        board.request_change(5, Mark::X).unwrap();
        board.request_change(5, Mark::O).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                "requested 5 Blank->X",
                "changed 5 Blank->X",
                "requested 5 X->O",
            ]
        );
    }

    #[test]
    fn test_unsubscribe_observer() {
        let count = Rc::new(RefCell::new(0));
        let mut board = blank_board();

        let c = Rc::clone(&count);
        let id = board.on_cell_changed(move |_| *c.borrow_mut() += 1);
        board.request_change(1, Mark::X).unwrap();
        assert!(board.unsubscribe_cell_changed(id));
        board.request_change(2, Mark::O).unwrap();

        assert_eq!(*count.borrow(), 1);
        assert!(!board.unsubscribe_change_requested(id));
    }

    #[test]
    fn test_policy_sees_current_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let policy = policy::from_fn(move |id: u32, current: Mark, proposed: Mark| {
            s.borrow_mut().push((id, current, proposed));
            true
        });
        let mut board = GameBoard::new(Grid::square(2).unwrap(), policy);

        board.request_change(3, Mark::X).unwrap();
        board.request_change(3, Mark::O).unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![(3, Mark::Blank, Mark::X), (3, Mark::X, Mark::O)]
        );
    }

    #[test]
    fn test_policy_state_is_inspectable() {
        let mut board = GameBoard::new(Grid::square(3).unwrap(), ReplacementPolicy::new(1));
        board.request_change(1, Mark::O).unwrap();
        assert!(board.request_change(1, Mark::X).unwrap());
        assert_eq!(board.policy().remaining(Mark::X), 0);
    }

    #[test]
    fn test_boxed_policy_default() {
        let policy: Box<dyn MovePolicy<u32, Mark>> = Box::new(BlankOnly);
        let mut board: GameBoard<u32, Mark> = GameBoard::new(Grid::square(3).unwrap(), policy);
        assert!(board.request_change(9, Mark::O).unwrap());
    }

    #[test]
    fn test_is_full() {
        let mut board = GameBoard::new(Grid::square(1).unwrap(), BlankOnly);
        board.request_change(1, Mark::X).unwrap();
        assert!(board.is_full());
    }
}
