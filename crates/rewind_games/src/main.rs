//! Rewind - tic-tac-toe with time travel.

use anyhow::Result;
use clap::Parser;
use rewind_games::{Cli, Command, RewindConfig, SessionManager, SortOrder, replay, run_interactive};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RewindConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay {
            moves,
            jump,
            descending,
        } => {
            let order = if descending {
                SortOrder::Descending
            } else {
                SortOrder::from_ascending(*config.ascending())
            };
            print!("{}", replay(&moves, jump, order, &config)?);
            Ok(())
        }
    }
}

/// Run the interactive game on stdin/stdout
fn run_play(config: &RewindConfig) -> Result<()> {
    info!("Starting interactive game");

    let manager = SessionManager::new();
    let session_id = manager.create_session("local".to_string())?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_interactive(stdin.lock(), stdout.lock(), &manager, &session_id, config)
}
