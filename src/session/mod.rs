//! Game session: one game's board, scoring, scheduler and players.
//!
//! A [`GameSession`] is the context object for a single game. It is built
//! once through [`SessionBuilder`], which rejects configurations that
//! could never finish (no rules, no players, scheduler/player mismatch).
//!
//! Each turn runs the same sequence:
//!
//! 1. the scheduler picks a seat
//! 2. that seat's player makes zero or one move on the board
//! 3. the score composite evaluates the board
//!
//! Once the composite reports an outcome the session is finished and
//! further calls return that outcome without scheduling anyone.

mod builder;

pub use builder::SessionBuilder;

use tracing::{debug, info, instrument};

use crate::board::{Board, GameBoard, GameQuery};
use crate::core::{CellId, CellState, EngineError, PlayerId, PlayerMap, Result};
use crate::players::Player;
use crate::policy::MovePolicy;
use crate::schedule::TurnScheduler;
use crate::scoring::{GameOutcome, ScoreComposite};

/// A single game in progress.
pub struct GameSession<K, S, P = Box<dyn MovePolicy<K, S>>> {
    board: GameBoard<K, S, P>,
    score: ScoreComposite<K, S>,
    scheduler: Box<dyn TurnScheduler>,
    players: PlayerMap<Box<dyn Player<K, S>>>,
    turns_played: u32,
}

impl<K, S, P> GameSession<K, S, P>
where
    K: CellId,
    S: CellState,
    P: MovePolicy<K, S>,
{
    /// Start building a session around `board`.
    pub fn builder(board: GameBoard<K, S, P>) -> SessionBuilder<K, S, P> {
        SessionBuilder::new(board)
    }

    /// Play one turn.
    ///
    /// Returns the outcome once the game has ended, `None` while it goes on.
    /// After the end, no player is scheduled again.
    #[instrument(skip(self), fields(turn = self.turns_played + 1))]
    pub fn play_turn(&mut self) -> Result<Option<GameOutcome<S>>> {
        if let Some(outcome) = self.score.outcome() {
            return Ok(Some(outcome));
        }

        let seat = self.scheduler.select_player();
        if seat.index() >= self.players.player_count() {
            return Err(EngineError::PlayerCountMismatch {
                scheduler: seat.index() + 1,
                players: self.players.player_count(),
            });
        }
        self.turns_played += 1;

        let player = self.players.get_mut(seat);
        let board: &mut dyn Board<K, S> = &mut self.board;
        debug!(%seat, mark = %player.mark(), "player selected");
        player.take_turn(board)?;

        let outcome = self.score.evaluate(&self.board);
        if let Some(outcome) = outcome {
            info!(
                %outcome,
                turns = self.turns_played,
                moves = self.board.moves_applied(),
                "session finished"
            );
        }
        Ok(outcome)
    }

    /// Play turns until the game ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<GameOutcome<S>> {
        loop {
            if let Some(outcome) = self.play_turn()? {
                return Ok(outcome);
            }
        }
    }

    #[must_use]
    pub fn board(&self) -> &GameBoard<K, S, P> {
        &self.board
    }

    /// Mutable board access, for subscribing observers.
    pub fn board_mut(&mut self) -> &mut GameBoard<K, S, P> {
        &mut self.board
    }

    #[must_use]
    pub fn score(&self) -> &ScoreComposite<K, S> {
        &self.score
    }

    /// Mutable composite access, for subscribing to game over.
    pub fn score_mut(&mut self) -> &mut ScoreComposite<K, S> {
        &mut self.score
    }

    /// Final outcome, once reached.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome<S>> {
        self.score.outcome()
    }

    /// Turns handed out so far, including turns whose move was rejected.
    #[must_use]
    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// The mark played by `seat`.
    #[must_use]
    pub fn mark_of(&self, seat: PlayerId) -> Option<S> {
        self.players
            .iter()
            .find(|(id, _)| *id == seat)
            .map(|(_, player)| player.mark())
    }
}

impl<K, S, P> std::fmt::Debug for GameSession<K, S, P>
where
    K: std::fmt::Debug,
    S: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("score", &self.score)
            .field("players", &self.players.player_count())
            .field("turns_played", &self.turns_played)
            .finish_non_exhaustive()
    }
}
