//! Command-line interface for the terminal game.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tictactoe_core::Mode;

/// Tic-tac-toe in the terminal, against the computer or a friend
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game mode to start in (overrides the config file)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Mode as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Play against the computer
    Singleplayer,
    /// Two players on one keyboard
    Multiplayer,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Singleplayer => Mode::Singleplayer,
            ModeArg::Multiplayer => Mode::Multiplayer,
        }
    }
}
