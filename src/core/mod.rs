//! Core engine types: cells, grid geometry, players, RNG, configuration, errors.
//!
//! Everything here is game-agnostic. Boards, rules and schedulers are
//! built on top of these types; concrete games pick the key and state
//! types and the configuration.

pub mod cell;
pub mod grid;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use cell::{CellId, CellState, Mark};
pub use grid::{Grid, Line};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{GameConfig, PolicyKind, MAX_GRID_SIZE};
pub use error::{EngineError, Result};
