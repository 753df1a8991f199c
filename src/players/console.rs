//! Interactive line-based player.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use super::Player;
use crate::board::Board;
use crate::core::{CellId, CellState, EngineError, Result};

/// Source of raw input lines.
///
/// Implemented for [`io::Stdin`], which locks only for the duration of a
/// single line so several console players can share one terminal, and
/// for in-memory and buffered readers. Lines are bytes: decoding is left
/// to the caller so malformed text can be reported instead of failing.
pub trait LineReader {
    /// Append the next line, newline included, to `buf`. Returns 0 at end
    /// of input.
    fn read_raw_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize>;
}

impl LineReader for io::Stdin {
    fn read_raw_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        self.lock().read_until(b'\n', buf)
    }
}

impl<T: AsRef<[u8]>> LineReader for io::Cursor<T> {
    fn read_raw_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        self.read_until(b'\n', buf)
    }
}

impl<R: io::Read> LineReader for io::BufReader<R> {
    fn read_raw_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        self.read_until(b'\n', buf)
    }
}

/// Human player typing cell identifiers.
///
/// Prompts until the input parses as a cell that exists on the board,
/// then submits exactly one move. A move the policy rejects is reported
/// and the turn is lost; there is no second attempt.
///
/// ```
/// use std::io::Cursor;
/// use turnboard::board::{GameBoard, GameQuery};
/// use turnboard::core::{Grid, Mark};
/// use turnboard::players::{ConsolePlayer, Player};
/// use turnboard::policy::BlankOnly;
///
/// let mut board: GameBoard<u32, Mark, BlankOnly> = GameBoard::new(Grid::square(3)?, BlankOnly);
/// let mut player = ConsolePlayer::new(Mark::X, Cursor::new("oops\n12\n5\n"), Vec::new());
///
/// Player::<u32, Mark>::take_turn(&mut player, &mut board)?;
/// assert_eq!(board.state(5)?, Mark::X);
/// # Ok::<(), turnboard::core::EngineError>(())
/// ```
#[derive(Debug)]
pub struct ConsolePlayer<S, R, W> {
    mark: S,
    input: R,
    output: W,
}

impl<S: CellState> ConsolePlayer<S, io::Stdin, io::Stdout> {
    /// Player reading from stdin and prompting on stdout.
    pub fn stdio(mark: S) -> Self {
        Self::new(mark, io::stdin(), io::stdout())
    }
}

impl<S, R, W> ConsolePlayer<S, R, W>
where
    S: CellState,
    R: LineReader,
    W: Write,
{
    pub fn new(mark: S, input: R, output: W) -> Self {
        Self {
            mark,
            input,
            output,
        }
    }

    /// Everything written so far (prompts and messages).
    pub fn output(&self) -> &W {
        &self.output
    }

    fn read_cell<K>(&mut self, board: &dyn Board<K, S>) -> Result<K>
    where
        K: CellId + FromStr,
    {
        loop {
            write!(self.output, "{}, enter a cell: ", self.mark)?;
            self.output.flush()?;

            let mut line = Vec::new();
            if self.input.read_raw_line(&mut line)? == 0 {
                return Err(EngineError::InputClosed);
            }
            let line = String::from_utf8_lossy(&line);
            let text = line.trim();

            let Ok(id) = text.parse::<K>() else {
                writeln!(self.output, "'{text}' is not a cell number.")?;
                continue;
            };
            if board.state(id).is_err() {
                writeln!(self.output, "There is no cell {id}.")?;
                continue;
            }
            return Ok(id);
        }
    }
}

impl<K, S, R, W> Player<K, S> for ConsolePlayer<S, R, W>
where
    K: CellId + FromStr,
    S: CellState,
    R: LineReader,
    W: Write,
{
    fn mark(&self) -> S {
        self.mark
    }

    fn take_turn(&mut self, board: &mut dyn Board<K, S>) -> Result<()> {
        let cell = self.read_cell(board)?;
        let accepted = board.request_change(cell, self.mark)?;
        debug!(mark = %self.mark, %cell, accepted, "console move");
        if !accepted {
            writeln!(self.output, "Cell {cell} cannot take {}; turn lost.", self.mark)?;
        }
        Ok(())
    }
}
