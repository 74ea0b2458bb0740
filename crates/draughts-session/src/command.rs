//! Terminal command parsing.

use draughts_core::Square;

use crate::error::SessionError;

/// A parsed terminal command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `<row> <col>` -- click a cell.
    Click(Square),
    /// `hints` -- toggle destination hints.
    Hints,
    /// `board` -- print the board again.
    Board,
    /// `quit` -- leave the game.
    Quit,
}

/// Parse a single line of terminal input into a [`Command`].
///
/// Coordinates may be separated by whitespace or a comma.
pub fn parse_command(line: &str) -> Result<Command, SessionError> {
    let tokens: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    match tokens.as_slice() {
        ["hints"] => Ok(Command::Hints),
        ["board"] => Ok(Command::Board),
        ["quit"] | ["exit"] => Ok(Command::Quit),
        [row, col] => parse_click(line, row, col),
        _ => Err(invalid(line)),
    }
}

fn parse_click(line: &str, row: &str, col: &str) -> Result<Command, SessionError> {
    let row: i32 = row.parse().map_err(|_| invalid(line))?;
    let col: i32 = col.parse().map_err(|_| invalid(line))?;
    Ok(Command::Click(Square::new(row, col)?))
}

fn invalid(line: &str) -> SessionError {
    SessionError::InvalidCommand {
        input: line.trim().to_string(),
    }
}
