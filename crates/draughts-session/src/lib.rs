//! Human-versus-engine checkers sessions.

pub mod command;
pub mod config;
pub mod error;
pub mod game;
pub mod terminal;

pub use command::{Command, parse_command};
pub use config::SessionConfig;
pub use error::SessionError;
pub use game::{ClickOutcome, Game, HUMAN, Phase};
