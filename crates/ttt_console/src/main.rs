//! `ttt` - console tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use ttt_console::{Cli, Command, ConsoleConfig, Session, analyze};
use ttt_engine::{Board, Difficulty};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ConsoleConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .seeded(cli.seed);

    init_tracing(&config);
    debug!(?config, "Configuration ready");

    match cli.selected_command() {
        Command::Repl => run_repl(&config),
        Command::Play { x, o } => run_game(&config, *x, *o),
        Command::Analyze { board, json } => run_analyze(board, *json),
    }
}

/// Logs go to stderr so stdout carries only the game.
fn init_tracing(config: &ConsoleConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();
}

/// Run the `Input command:` loop on stdin/stdout
fn run_repl(config: &ConsoleConfig) -> Result<()> {
    info!("Starting console session");
    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), config.rng());
    let outcomes = session.run().context("Console session failed")?;
    info!(games = outcomes.len(), "Console session ended");
    Ok(())
}

/// Play a single game
fn run_game(config: &ConsoleConfig, x: Difficulty, o: Difficulty) -> Result<()> {
    info!(%x, %o, "Starting single game");
    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), config.rng());
    session.play(x, o).context("Game aborted")?;
    Ok(())
}

/// Analyze a serialized board
fn run_analyze(board: &str, json: bool) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))?;
    let analysis = analyze(&board);

    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &analysis)
            .context("Failed to encode analysis")?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "{}", analysis)?;
    }
    Ok(())
}
