use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use draughts_core::CaptureRule;
use draughts_session::terminal;

/// Play checkers against the engine in the terminal.
#[derive(Debug, Parser)]
#[command(name = "draughts", version)]
struct Cli {
    /// Force a side to capture whenever any of its pieces can.
    #[arg(long)]
    mandatory_capture: bool,
}

impl Cli {
    fn capture_rule(&self) -> CaptureRule {
        if self.mandatory_capture {
            CaptureRule::Mandatory
        } else {
            CaptureRule::PerPiece
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let capture_rule = cli.capture_rule();
    info!(?capture_rule, "draughts starting");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    terminal::run(&mut input, &mut output, capture_rule).context("terminal session failed")?;

    info!("draughts shutting down");
    Ok(())
}
