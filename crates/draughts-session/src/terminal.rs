//! Line-oriented terminal front-end.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use draughts_core::CaptureRule;

use crate::command::{Command, parse_command};
use crate::config::{DEFAULT_DEPTH, SessionConfig, parse_depth, parse_yes_no};
use crate::error::SessionError;
use crate::game::{ClickOutcome, Game, Phase};

/// Short rules summary, offered before the game starts.
pub const RULES: &str = "\
Rules
  You play black from the top (rows 0-2) and move first; the engine plays red.
  Men move one cell diagonally forward; kings move diagonally both ways.
  Jump an adjacent enemy piece onto the empty cell behind it to capture it.
  Jumps chain while another capture is available from the landing cell.
  A piece that can capture must capture.
  A man reaching the far row is crowned and its turn ends there.
  Capturing a king crowns the capturing piece.
  You win by taking every enemy piece or leaving the engine without a move.
Commands: `<row> <col>` to select a piece then a destination, `hints`, `board`, `quit`.";

/// Read one line, `None` once input is exhausted.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, SessionError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask `question` until `parse` accepts the answer.
fn ask<R, W, T>(
    input: &mut R,
    output: &mut W,
    question: &str,
    parse: impl Fn(&str) -> Result<T, SessionError>,
) -> Result<Option<T>, SessionError>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{question}")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}

/// Prompt for the session settings. `None` if input closes first.
pub fn configure<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    capture_rule: CaptureRule,
) -> Result<Option<SessionConfig>, SessionError> {
    let depth_prompt = format!("Search depth (1-5) [{DEFAULT_DEPTH}]: ");
    let Some(depth) = ask(input, output, &depth_prompt, parse_depth)? else {
        return Ok(None);
    };
    let Some(show_hints) = ask(input, output, "Show hints? (yes/no) [yes]: ", |s| {
        parse_yes_no(s, true)
    })?
    else {
        return Ok(None);
    };
    let Some(show_rules) = ask(input, output, "Show the rules first? (yes/no) [no]: ", |s| {
        parse_yes_no(s, false)
    })?
    else {
        return Ok(None);
    };
    if show_rules {
        writeln!(output, "{RULES}")?;
    }
    SessionConfig::new(depth, show_hints, capture_rule).map(Some)
}

fn print_board<W: Write>(output: &mut W, game: &Game) -> Result<(), SessionError> {
    let hints = game.hints();
    writeln!(output, "{}", game.board().pretty_with_hints(&hints))?;
    let (black, red) = game.board().counts();
    writeln!(output, "black {black}  red {red}")?;
    Ok(())
}

/// Play one game on the given streams until it ends, `quit`, or input closes.
pub fn play<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: SessionConfig,
) -> Result<(), SessionError> {
    info!(
        depth = config.depth,
        hints = config.show_hints,
        rule = ?config.capture_rule,
        "game started"
    );
    let mut game = Game::new(config);
    print_board(output, &game)?;

    loop {
        match game.phase() {
            Phase::Finished { winner } => {
                writeln!(output, "{winner} wins")?;
                return Ok(());
            }
            Phase::AutomatedTurn => {
                let result = game.play_automated_turn()?;
                if let Some(mv) = &result.best_move {
                    writeln!(output, "red plays {mv}")?;
                }
                print_board(output, &game)?;
                continue;
            }
            Phase::AwaitingSelection | Phase::PieceSelected { .. } => {}
        }

        write!(output, "{}> ", game.turn())?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            debug!("input closed");
            return Ok(());
        };
        if line.is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                warn!(error = %e, "rejected input");
                writeln!(output, "{e}")?;
                continue;
            }
        };

        match command {
            Command::Quit => {
                info!("player quit");
                return Ok(());
            }
            Command::Board => print_board(output, &game)?,
            Command::Hints => {
                let on = game.toggle_hints();
                writeln!(output, "hints {}", if on { "on" } else { "off" })?;
            }
            Command::Click(sq) => match game.click(sq) {
                Ok(ClickOutcome::Selected { from }) => {
                    writeln!(output, "selected {from}")?;
                    print_board(output, &game)?;
                }
                Ok(ClickOutcome::Ignored) => writeln!(output, "select one of your pieces")?,
                Ok(ClickOutcome::Moved { mv, captured }) => {
                    writeln!(output, "black plays {mv}")?;
                    if captured > 0 {
                        writeln!(output, "captured {captured}")?;
                    }
                    print_board(output, &game)?;
                }
                Err(e) => {
                    warn!(error = %e, "rejected click");
                    writeln!(output, "{e}")?;
                }
            },
        }
    }
}

/// Configure and play one game on the given streams.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    capture_rule: CaptureRule,
) -> Result<(), SessionError> {
    match configure(input, output, capture_rule)? {
        Some(config) => play(input, output, config),
        None => Ok(()),
    }
}
