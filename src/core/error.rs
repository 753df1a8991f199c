//! Engine error type.
//!
//! Illegal moves are not errors: a rejected move is the normal `Ok(false)`
//! outcome of [`Board::request_change`](crate::board::Board::request_change).
//! Errors are reserved for addressing cells that do not exist, for
//! misconfiguration caught at construction, and for player I/O failures.

use derive_more::{Display, Error, From};

/// Errors raised by the engine.
#[derive(Debug, Display, Error, From)]
pub enum EngineError {
    /// A cell identifier that is not part of the board.
    #[display("Invalid cell: {cell}")]
    InvalidCell {
        /// The offending identifier, formatted.
        cell: String,
    },

    /// A grid with zero width or height.
    #[display("Grid must have at least one cell (got {width}x{height})")]
    EmptyGrid {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// The identifier list does not match `width * height`.
    #[display("Grid shape expects {expected} cells, got {actual}")]
    GridShape {
        /// `width * height`.
        expected: usize,
        /// Number of identifiers supplied.
        actual: usize,
    },

    /// The same identifier was supplied twice.
    #[display("Duplicate cell: {cell}")]
    DuplicateCell {
        /// The repeated identifier, formatted.
        cell: String,
    },

    /// A score composite with no rules can never end a game.
    #[display("At least one score rule is required")]
    NoRules,

    /// A session with no players.
    #[display("At least one player is required")]
    NoPlayers,

    /// The scheduler and the player list disagree on the player count.
    #[display("Scheduler expects {scheduler} players, session has {players}")]
    PlayerCountMismatch {
        /// Players the scheduler selects from.
        scheduler: usize,
        /// Players registered with the session.
        players: usize,
    },

    /// A configuration value out of range.
    #[display("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong.
        reason: String,
    },

    /// An interactive player ran out of input.
    #[display("Input closed before a move was entered")]
    InputClosed,

    /// Console I/O failure.
    #[display("I/O error: {_0}")]
    #[from]
    Io(#[error(source)] std::io::Error),

    /// Malformed TOML configuration.
    #[display("Config parse error: {_0}")]
    #[from]
    ConfigParse(#[error(source)] toml::de::Error),
}

impl EngineError {
    /// Build an [`EngineError::InvalidCell`] from any printable identifier.
    pub fn invalid_cell(cell: impl std::fmt::Display) -> Self {
        Self::InvalidCell {
            cell: cell.to_string(),
        }
    }

    /// Build an [`EngineError::InvalidConfig`].
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

/// Engine result alias.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_cell_display() {
        let err = EngineError::invalid_cell(12);
        assert_eq!(err.to_string(), "Invalid cell: 12");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: EngineError = io.into();
        assert!(matches!(err, EngineError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_count_mismatch_display() {
        let err = EngineError::PlayerCountMismatch {
            scheduler: 3,
            players: 2,
        };
        assert_eq!(err.to_string(), "Scheduler expects 3 players, session has 2");
    }
}
