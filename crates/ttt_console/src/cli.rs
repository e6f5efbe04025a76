//! Command-line interface for the `ttt` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use ttt_engine::Difficulty;

/// Tic-tac-toe against random, lookahead or minimax opponents
#[derive(Parser, Debug)]
#[command(name = "ttt")]
#[command(about = "Console tic-tac-toe with an unbeatable minimax player", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./ttt.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for random players, overriding the config file
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run (defaults to `repl`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Read `start <x> <o>` / `exit` commands from standard input
    Repl,

    /// Play a single game between two players
    Play {
        /// Player for X: user, easy, medium or hard
        #[arg(long, default_value = "user")]
        x: Difficulty,

        /// Player for O: user, easy, medium or hard
        #[arg(long, default_value = "hard")]
        o: Difficulty,
    },

    /// Evaluate a 9-character board and show the minimax move
    Analyze {
        /// Board in row-major order using X, O and _ for empty squares
        board: String,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}

static DEFAULT_COMMAND: Command = Command::Repl;

impl Cli {
    /// Returns the chosen command, `repl` when none was given.
    pub fn selected_command(&self) -> &Command {
        self.command.as_ref().unwrap_or(&DEFAULT_COMMAND)
    }
}
