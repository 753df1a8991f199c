//! Tic-tac-toe on an N x N grid.
//!
//! Cells are numbered `1..=N*N` row by row. X moves first. The game ends
//! on a complete row, column or diagonal, on a full board, or after
//! `max_turns` accepted moves, checked in that order.
//!
//! Three seatings are provided ([`Mode`]): two console players, a console
//! player against a random AI, and two random AIs.

mod game;

pub use game::{announce, instructions, render, Mode, TicTacToe, TicTacToeBuilder};
