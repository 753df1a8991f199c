//! Session construction and validation.

use tracing::debug;

use super::GameSession;
use crate::board::{GameBoard, GameQuery};
use crate::core::{CellId, CellState, EngineError, PlayerMap, Result};
use crate::players::Player;
use crate::policy::MovePolicy;
use crate::schedule::{RoundRobin, TurnScheduler};
use crate::scoring::{ScoreComposite, ScoreRule};

/// Builder for a [`GameSession`].
///
/// Players are seated in the order they are added. Without an explicit
/// scheduler the session uses [`RoundRobin`] over all seats.
pub struct SessionBuilder<K, S, P = Box<dyn MovePolicy<K, S>>> {
    board: GameBoard<K, S, P>,
    score: ScoreComposite<K, S>,
    scheduler: Option<Box<dyn TurnScheduler>>,
    players: Vec<Box<dyn Player<K, S>>>,
}

impl<K, S, P> SessionBuilder<K, S, P>
where
    K: CellId,
    S: CellState,
    P: MovePolicy<K, S>,
{
    pub fn new(board: GameBoard<K, S, P>) -> Self {
        Self {
            board,
            score: ScoreComposite::new(),
            scheduler: None,
            players: Vec::new(),
        }
    }

    /// Append a score rule. Rules are evaluated in the order added.
    pub fn rule(mut self, rule: impl ScoreRule<K, S> + 'static) -> Self {
        self.score.add_rule(rule);
        self
    }

    /// Replace the score composite, including any observers already on it.
    pub fn score(mut self, score: ScoreComposite<K, S>) -> Self {
        self.score = score;
        self
    }

    pub fn scheduler(mut self, scheduler: impl TurnScheduler + 'static) -> Self {
        self.scheduler = Some(Box::new(scheduler));
        self
    }

    /// Seat another player.
    pub fn player(mut self, player: impl Player<K, S> + 'static) -> Self {
        self.players.push(Box::new(player));
        self
    }

    /// Seat an already boxed player.
    pub fn boxed_player(mut self, player: Box<dyn Player<K, S>>) -> Self {
        self.players.push(player);
        self
    }

    /// Validate and assemble the session.
    pub fn build(self) -> Result<GameSession<K, S, P>> {
        if self.score.is_empty() {
            return Err(EngineError::NoRules);
        }
        if self.players.is_empty() {
            return Err(EngineError::NoPlayers);
        }

        let scheduler: Box<dyn TurnScheduler> = match self.scheduler {
            Some(scheduler) => scheduler,
            None => Box::new(RoundRobin::new(self.players.len())?),
        };
        if scheduler.player_count() != self.players.len() {
            return Err(EngineError::PlayerCountMismatch {
                scheduler: scheduler.player_count(),
                players: self.players.len(),
            });
        }

        let player_count = self.players.len();
        let players = PlayerMap::from_vec(self.players)
            .ok_or_else(|| EngineError::invalid_config("at most 255 players supported"))?;

        debug!(
            players = player_count,
            rules = self.score.len(),
            cells = self.board.grid().len(),
            "session built"
        );

        Ok(GameSession {
            board: self.board,
            score: self.score,
            scheduler,
            players,
            turns_played: 0,
        })
    }
}
