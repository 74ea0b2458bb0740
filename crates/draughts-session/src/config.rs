//! Session configuration.

use draughts_core::CaptureRule;

use crate::error::SessionError;

/// Shallowest search depth a session accepts.
pub const MIN_DEPTH: u8 = 1;

/// Deepest search depth a session accepts.
pub const MAX_DEPTH: u8 = 5;

/// Depth used when none is given.
pub const DEFAULT_DEPTH: u8 = 3;

/// Knobs fixed at the start of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Plies searched on the automated turn.
    pub depth: u8,
    /// Mark the selected piece's destinations when printing the board.
    pub show_hints: bool,
    /// Forced-capture scope for both players.
    pub capture_rule: CaptureRule,
}

impl SessionConfig {
    /// Build a configuration, rejecting a depth outside `1..=5`.
    pub fn new(
        depth: u8,
        show_hints: bool,
        capture_rule: CaptureRule,
    ) -> Result<Self, SessionError> {
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&depth) {
            return Err(SessionError::InvalidDepth {
                value: depth.to_string(),
            });
        }
        Ok(Self {
            depth,
            show_hints,
            capture_rule,
        })
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            show_hints: true,
            capture_rule: CaptureRule::default(),
        }
    }
}

/// Parse a depth answer. A blank answer selects [`DEFAULT_DEPTH`].
pub fn parse_depth(input: &str) -> Result<u8, SessionError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(DEFAULT_DEPTH);
    }
    match input.parse::<u8>() {
        Ok(depth) if (MIN_DEPTH..=MAX_DEPTH).contains(&depth) => Ok(depth),
        _ => Err(SessionError::InvalidDepth {
            value: input.to_string(),
        }),
    }
}

/// Parse a yes/no answer. A blank answer selects `default`.
pub fn parse_yes_no(input: &str, default: bool) -> Result<bool, SessionError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        other => Err(SessionError::InvalidCommand {
            input: other.to_string(),
        }),
    }
}
