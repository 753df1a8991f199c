//! # turnboard
//!
//! A small engine for turn-based board games.
//!
//! ## Design Principles
//!
//! 1. **Generic Boards**: A board maps any cell key type to any cell state
//!    type. The only thing the engine asks of a state is which value is
//!    "empty".
//!
//! 2. **Rules as Plug-ins**: Move legality ([`MovePolicy`]), terminal
//!    conditions ([`ScoreRule`]) and turn order ([`TurnScheduler`]) are
//!    traits. Games choose implementations at construction.
//!
//! 3. **Observe, Don't Steer**: Every move attempt, every accepted change
//!    and the end of the game are published to subscribers. Subscribers
//!    see what happened; they cannot change it.
//!
//! ## Turn Loop
//!
//! The scheduler picks a player, the player asks the board for one cell
//! change, the board runs the policy and notifies observers, then the
//! score composite evaluates every rule. This repeats until a rule
//! reports a winner or a draw.
//!
//! ## Modules
//!
//! - `core`: Cell traits, grid geometry, players, RNG, configuration, errors
//! - `board`: The generic board and its read-only query interface
//! - `policy`: Move-validation policies
//! - `scoring`: Score rules and the composite evaluator
//! - `schedule`: Turn schedulers
//! - `players`: Console and random players
//! - `events`: Notification channels and logging observers
//! - `session`: One game's turn loop
//! - `games`: Ready-made games (tic-tac-toe)

pub mod core;
pub mod board;
pub mod policy;
pub mod scoring;
pub mod schedule;
pub mod players;
pub mod events;
pub mod session;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    CellId, CellState, Mark,
    Grid, Line,
    PlayerId, PlayerMap,
    GameRng,
    GameConfig, PolicyKind,
    EngineError, Result,
};

pub use crate::board::{Board, GameBoard, GameQuery};

pub use crate::policy::{BlankOnly, MovePolicy, ReplacementPolicy};

pub use crate::scoring::{
    BoardFilled, InARow, MaxTurns,
    GameOutcome, ScoreComposite, ScoreOutcome, ScoreRule,
};

pub use crate::schedule::{RandomOrder, RoundRobin, TurnScheduler};

pub use crate::players::{ConsolePlayer, Player, RandomPlayer};

pub use crate::events::{
    CellChanged, ChangeRequested, EventChannel, GameOver, SubscriptionId,
};

pub use crate::session::{GameSession, SessionBuilder};
