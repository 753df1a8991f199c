//! Tracing observers.
//!
//! Subscribes callbacks that turn board and scoring notifications into
//! `tracing` events, so a game can be followed with `RUST_LOG=info`.

use std::fmt::Display;

use tracing::info;

use super::{CellChanged, ChangeRequested, GameOver, SubscriptionId};
use crate::board::GameBoard;
use crate::core::{CellId, CellState};
use crate::policy::MovePolicy;
use crate::scoring::{GameOutcome, ScoreComposite};

/// Subscriptions made by [`attach`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardLogging {
    pub requested: SubscriptionId,
    pub changed: SubscriptionId,
}

/// Log every move attempt and every accepted change on `board`.
pub fn attach<K, S, P>(board: &mut GameBoard<K, S, P>) -> BoardLogging
where
    K: CellId,
    S: CellState,
    P: MovePolicy<K, S>,
{
    let requested = board.on_change_requested(|event| {
        info!(target: "turnboard::moves", "{}", describe_request(event));
    });
    let changed = board.on_cell_changed(|event| {
        info!(target: "turnboard::moves", "{}", describe_change(event));
    });
    BoardLogging { requested, changed }
}

/// Log the end of the game.
pub fn attach_game_over<K, S: CellState>(score: &mut ScoreComposite<K, S>) -> SubscriptionId {
    score.on_game_over(|event| {
        info!(target: "turnboard::moves", "{}", describe_game_over(event));
    })
}

pub fn describe_request<K: Display, S: Display>(event: &ChangeRequested<K, S>) -> String {
    format!(
        "attempt to change cell {} from {} to {}",
        event.id, event.current, event.proposed
    )
}

pub fn describe_change<K: Display, S: Display>(event: &CellChanged<K, S>) -> String {
    format!("cell {} changed to {}", event.id, event.new)
}

pub fn describe_game_over<S: Display>(event: &GameOver<S>) -> String {
    match &event.outcome {
        GameOutcome::Winner(mark) => format!("game over, {mark} wins"),
        GameOutcome::Draw => "game over, draw".to_string(),
    }
}
