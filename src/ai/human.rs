use std::io::{self, BufRead, Cursor, Write};

use crate::error::StrategyError;
use crate::game::{Board, Player};

use super::strategy::Strategy;

/// Somewhere typed lines come from.
///
/// `Stdin` reads through its shared global buffer, so several players can
/// read from the same console without holding a lock between turns.
pub trait LineSource {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// A person entering 1-based column numbers on a console.
///
/// Anything that is not a playable column is rejected with a message and the
/// prompt is repeated.
pub struct HumanStrategy<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: LineSource, W: Write> HumanStrategy<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        HumanStrategy {
            name: name.into(),
            input,
            output,
        }
    }

    /// Parse one line of input into a 0-based playable column.
    fn parse_column(line: &str, board: &Board) -> Result<usize, String> {
        let entered: usize = line
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a column number", line.trim()))?;
        if entered == 0 || entered > board.width() {
            return Err(format!("column must be between 1 and {}", board.width()));
        }
        let column = entered - 1;
        if board.is_column_full(column) {
            return Err(format!("column {entered} is full"));
        }
        Ok(column)
    }
}

impl<R: LineSource, W: Write> Strategy for HumanStrategy<R, W> {
    fn authors(&self) -> &str {
        &self.name
    }

    fn play(&mut self, board: &Board, player: Player) -> Result<usize, StrategyError> {
        if board.is_full() {
            return Err(StrategyError::NoPlayableColumn);
        }

        loop {
            write!(self.output, "{player}, choose a column (1-{}): ", board.width())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(StrategyError::InputClosed);
            }

            match Self::parse_column(&line, board) {
                Ok(column) => return Ok(column),
                Err(msg) => writeln!(self.output, "{msg}, try again.")?,
            }
        }
    }
}
