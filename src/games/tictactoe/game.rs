//! Tic-tac-toe assembly, rendering and console texts.

use tracing::info;

use crate::board::{GameBoard, GameQuery};
use crate::core::{CellState, GameConfig, GameRng, Grid, Mark, PolicyKind, Result};
use crate::events::logging;
use crate::players::{ConsolePlayer, Player, RandomPlayer};
use crate::policy::{BlankOnly, MovePolicy, ReplacementPolicy};
use crate::scoring::{BoardFilled, GameOutcome, InARow, MaxTurns, ScoreComposite};
use crate::session::GameSession;

/// A tic-tac-toe game: numbered cells, X/O marks, policy chosen at runtime.
pub type TicTacToe = GameSession<u32, Mark>;

/// Who sits at the two seats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Two console players.
    PlayerVsPlayer,
    /// Console X against a random O.
    PlayerVsAi,
    /// Two random players.
    AiVsAi,
}

impl Mode {
    /// Policy the mode is played with unless configured otherwise.
    #[must_use]
    pub fn default_policy(self) -> PolicyKind {
        match self {
            Mode::PlayerVsPlayer => PolicyKind::Replacement,
            Mode::PlayerVsAi | Mode::AiVsAi => PolicyKind::BlankOnly,
        }
    }

    /// Default configuration for the mode, before any file or flag.
    #[must_use]
    pub fn base_config(self) -> GameConfig {
        GameConfig::default().with_policy(self.default_policy())
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::PlayerVsPlayer => write!(f, "Player vs. Player"),
            Mode::PlayerVsAi => write!(f, "Player vs. Dumb AI"),
            Mode::AiVsAi => write!(f, "Dumb AI vs. Dumb AI"),
        }
    }
}

/// Builder for a [`TicTacToe`] session.
///
/// ```
/// use turnboard::core::{GameConfig, PolicyKind};
/// use turnboard::games::tictactoe::{Mode, TicTacToeBuilder};
///
/// let config = GameConfig::default().with_policy(PolicyKind::BlankOnly).with_seed(7);
/// let mut game = TicTacToeBuilder::new(config).mode(Mode::AiVsAi).build()?;
///
/// let outcome = game.run()?;
/// println!("{outcome}");
/// # Ok::<(), turnboard::core::EngineError>(())
/// ```
pub struct TicTacToeBuilder {
    config: GameConfig,
    players: Vec<Box<dyn Player<u32, Mark>>>,
    log_moves: bool,
}

impl TicTacToeBuilder {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            players: Vec::new(),
            log_moves: true,
        }
    }

    /// Seat the players for `mode`, X first. Replaces any seated players.
    ///
    /// Console seats read stdin and prompt on stdout. Random seats draw
    /// from independent streams of the configured seed.
    pub fn mode(mut self, mode: Mode) -> Self {
        let rng = GameRng::new(self.config.seed);
        let console = |mark: Mark| -> Box<dyn Player<u32, Mark>> {
            Box::new(ConsolePlayer::stdio(mark))
        };
        let random = |mark: Mark| -> Box<dyn Player<u32, Mark>> {
            Box::new(RandomPlayer::new(mark, rng.for_context(&format!("player-{mark}"))))
        };

        self.players = match mode {
            Mode::PlayerVsPlayer => vec![console(Mark::X), console(Mark::O)],
            Mode::PlayerVsAi => vec![console(Mark::X), random(Mark::O)],
            Mode::AiVsAi => vec![random(Mark::X), random(Mark::O)],
        };
        self
    }

    /// Seat a player after those already seated.
    pub fn player(mut self, player: impl Player<u32, Mark> + 'static) -> Self {
        self.players.push(Box::new(player));
        self
    }

    /// Attach the tracing observers (on by default).
    pub fn log_moves(mut self, enabled: bool) -> Self {
        self.log_moves = enabled;
        self
    }

    pub fn build(self) -> Result<TicTacToe> {
        let config = self.config;
        config.validate()?;

        let policy: Box<dyn MovePolicy<u32, Mark>> = match config.policy {
            PolicyKind::BlankOnly => Box::new(BlankOnly),
            PolicyKind::Replacement => Box::new(ReplacementPolicy::new(config.replacement_budget)),
        };
        let mut board = GameBoard::new(Grid::square(config.grid_size)?, policy);

        let mut score: ScoreComposite<u32, Mark> = ScoreComposite::new()
            .with_rule(InARow)
            .with_rule(BoardFilled)
            .with_rule(MaxTurns::new(config.max_turns)?);

        if self.log_moves {
            logging::attach(&mut board);
            logging::attach_game_over(&mut score);
        }

        let mut builder = GameSession::builder(board).score(score);
        for player in self.players {
            builder = builder.boxed_player(player);
        }
        let session = builder.build()?;

        info!(
            grid = config.grid_size,
            policy = ?config.policy,
            max_turns = config.max_turns,
            "tic-tac-toe ready"
        );
        Ok(session)
    }
}

/// Draw the board, showing the number of every empty cell.
///
/// ```text
///  X | 2 | 3
/// ---+---+---
///  4 | O | 6
/// ---+---+---
///  7 | 8 | 9
/// ```
pub fn render(query: &dyn GameQuery<u32, Mark>) -> String {
    let grid = query.grid();
    let width = grid
        .cells()
        .iter()
        .map(|id| id.to_string().len())
        .max()
        .unwrap_or(1);

    let rows: Vec<String> = query
        .cells()
        .chunks(grid.width())
        .map(|row| {
            row.iter()
                .map(|(id, mark)| {
                    let label = if mark.is_empty() {
                        id.to_string()
                    } else {
                        mark.to_string()
                    };
                    format!(" {label:^width$} ")
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    let separator = vec!["-".repeat(width + 2); grid.width()].join("+");
    rows.join(&format!("\n{separator}\n"))
}

/// Welcome text and rules for `mode` on a `size` x `size` grid.
pub fn instructions(mode: Mode, size: usize) -> String {
    let last = size * size;
    let mut lines = vec![
        format!("Welcome to Tic Tac Toe ({mode})!"),
        "Instructions:".to_string(),
        format!("1. The game is played on a {size}x{size} grid."),
    ];
    match mode {
        Mode::PlayerVsPlayer => {
            lines.push("2. Two players take turns placing their marks (X or O) on the grid.".into());
        }
        Mode::PlayerVsAi => {
            lines.push("2. You (the player) will take turns with a simple AI opponent.".into());
        }
        Mode::AiVsAi => {
            lines.push("2. Two simple AI players take turns; just watch.".into());
        }
    }
    lines.push(format!(
        "3. The first to get {size} marks in a row (horizontally, vertically, or diagonally) wins."
    ));
    lines.push(format!(
        "4. If all cells are filled, and no one has {size} marks in a row, the game is a draw."
    ));
    match mode {
        Mode::PlayerVsPlayer => {
            lines.push(format!(
                "5. Players will enter a number between 1-{last} to place their mark on the corresponding cell."
            ));
        }
        Mode::PlayerVsAi => {
            lines.push(format!(
                "5. You will enter a number between 1-{last} to place your mark on the corresponding cell."
            ));
            lines.push(
                "6. The AI will randomly select a cell, even if it's already occupied (resulting in a wasted move)."
                    .into(),
            );
        }
        Mode::AiVsAi => {
            lines.push(
                "5. Each AI randomly selects a cell, even if it's already occupied (resulting in a wasted move)."
                    .into(),
            );
        }
    }
    lines.push(format!("{}. Enjoy the game!", lines.len() - 1));
    lines.join("\n")
}

/// Final line printed when the game ends.
pub fn announce(outcome: GameOutcome<Mark>) -> String {
    match outcome {
        GameOutcome::Winner(mark) => format!("{mark} wins! :-)"),
        GameOutcome::Draw => "Game is a draw :-(".to_string(),
    }
}
