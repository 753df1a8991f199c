//! Generic game board with policy-gated, event-driven mutation.
//!
//! ## Key Components
//!
//! - [`GameQuery`]: read-only view used by score rules
//! - [`Board`]: adds `request_change`, the only way to mutate a cell
//! - [`GameBoard`]: the implementation, generic over key, state and policy
//!
//! ## Example Usage
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use turnboard::board::{Board, GameBoard};
//! use turnboard::core::{Grid, Mark};
//! use turnboard::policy::BlankOnly;
//!
//! let mut board = GameBoard::new(Grid::square(3).unwrap(), BlankOnly);
//!
//! let attempts = Rc::new(RefCell::new(0));
//! let counter = Rc::clone(&attempts);
//! board.on_change_requested(move |_| *counter.borrow_mut() += 1);
//!
//! board.request_change(1, Mark::X).unwrap();
//! board.request_change(1, Mark::O).unwrap(); // rejected, still observed
//! assert_eq!(*attempts.borrow(), 2);
//! ```

mod game_board;
mod query;

pub use game_board::GameBoard;
pub use query::{Board, GameQuery};
