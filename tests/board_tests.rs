//! Board, policy and notification behavior through the public API.

use std::cell::RefCell;
use std::rc::Rc;

use turnboard::board::{Board, GameBoard, GameQuery};
use turnboard::core::{EngineError, GameConfig, Grid, Mark, PolicyKind};
use turnboard::events::{CellChanged, ChangeRequested};
use turnboard::policy::{BlankOnly, ReplacementPolicy};

#[derive(Debug, PartialEq)]
enum Seen {
    Requested(ChangeRequested<u32, Mark>),
    Changed(CellChanged<u32, Mark>),
}

fn recorded<P>(board: &mut GameBoard<u32, Mark, P>) -> Rc<RefCell<Vec<Seen>>>
where
    P: turnboard::policy::MovePolicy<u32, Mark>,
{
    let log = Rc::new(RefCell::new(Vec::new()));
    let l = Rc::clone(&log);
    board.on_change_requested(move |e| l.borrow_mut().push(Seen::Requested(*e)));
    let l = Rc::clone(&log);
    board.on_cell_changed(move |e| l.borrow_mut().push(Seen::Changed(*e)));
    log
}

/// Requested precedes changed; rejected attempts only produce "requested".
#[test]
fn test_notification_sequence() {
    let mut board = GameBoard::new(Grid::square(3).unwrap(), BlankOnly);
    let log = recorded(&mut board);

    assert!(board.request_change(5, Mark::X).unwrap());
    assert!(!board.request_change(5, Mark::O).unwrap());

    assert_eq!(
        *log.borrow(),
        vec![
            Seen::Requested(ChangeRequested {
                id: 5,
                current: Mark::Blank,
                proposed: Mark::X
            }),
            Seen::Changed(CellChanged {
                id: 5,
                old: Mark::Blank,
                new: Mark::X
            }),
            Seen::Requested(ChangeRequested {
                id: 5,
                current: Mark::X,
                proposed: Mark::O
            }),
        ]
    );
}

/// Unknown cells are an error and notify nobody.
#[test]
fn test_invalid_cell() {
    let mut board = GameBoard::new(Grid::square(3).unwrap(), BlankOnly);
    let log = recorded(&mut board);

    let err = board.request_change(0, Mark::X).unwrap_err();
    assert!(matches!(err, EngineError::InvalidCell { ref cell } if cell == "0"));
    assert!(matches!(board.state(10), Err(EngineError::InvalidCell { .. })));
    assert!(log.borrow().is_empty());
    assert_eq!(board.moves_applied(), 0);
}

/// Five X replacements with a budget of three: the last two fail.
#[test]
fn test_replacement_budget_exhausted() {
    let mut board = GameBoard::new(Grid::square(3).unwrap(), ReplacementPolicy::new(3));
    for cell in 1..=5 {
        assert!(board.request_change(cell, Mark::O).unwrap());
    }

    let results: Vec<bool> = (1..=5)
        .map(|cell| board.request_change(cell, Mark::X).unwrap())
        .collect();
    assert_eq!(results, vec![true, true, true, false, false]);

    assert_eq!(board.state(4).unwrap(), Mark::O);
    assert_eq!(board.state(5).unwrap(), Mark::O);
    assert_eq!(board.policy().remaining(Mark::X), 0);
    assert_eq!(board.policy().remaining(Mark::O), 3);
    assert_eq!(board.moves_applied(), 8);
}

/// Keys need not be integers or contiguous.
#[test]
fn test_custom_keys() {
    let grid = Grid::new(2, 1, vec!['a', 'b']).unwrap();
    let mut board = GameBoard::new(grid, BlankOnly);

    assert!(board.request_change('b', Mark::O).unwrap());
    assert_eq!(board.cells(), &[('a', Mark::Blank), ('b', Mark::O)]);
    assert!(board.request_change('z', Mark::X).is_err());
}

#[test]
fn test_grid_validation() {
    assert!(matches!(
        Grid::new(2, 2, vec![1u32, 2, 3]),
        Err(EngineError::GridShape {
            expected: 4,
            actual: 3
        })
    ));
    assert!(matches!(
        Grid::new(2, 1, vec![7u32, 7]),
        Err(EngineError::DuplicateCell { .. })
    ));
    assert!(matches!(
        Grid::<u32>::square(0),
        Err(EngineError::EmptyGrid { .. })
    ));
}

#[test]
fn test_config_json_roundtrip() {
    let config = GameConfig::default()
        .with_policy(PolicyKind::BlankOnly)
        .with_max_turns(20);

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"blank_only\""));
    let back: GameConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
