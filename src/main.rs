//! Tic-tac-toe bot - terminal front end.

#![warn(missing_docs)]

mod cli;
mod terminal;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_bot::{BotStrategy, Difficulty, GameConfig, MatchTally, play_out};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,tictactoe_bot=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            difficulty,
            delay_ms,
            seed,
        } => {
            let config =
                GameConfig::load_or_default(&cli.config)?.with_overrides(difficulty, delay_ms, seed);
            terminal::run(config).await
        }
        Command::Simulate {
            x,
            o,
            games,
            seed,
            json,
        } => run_simulation(x, o, games, seed, json),
    }
}

/// Plays `games` bot-vs-bot games and prints the tally.
#[instrument]
fn run_simulation(
    x: Difficulty,
    o: Difficulty,
    games: u32,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    info!("Starting simulation");
    let mut tally = MatchTally::default();
    for _ in 0..games {
        let state = play_out(BotStrategy::from(x), BotStrategy::from(o), &mut rng)?;
        tally.record(state.outcome());
    }
    info!(?tally, "Simulation finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("X ({}) vs O ({}) over {} games", x, o, tally.games());
        println!("  X wins: {}", tally.x_wins);
        println!("  O wins: {}", tally.o_wins);
        println!("  Draws:  {}", tally.draws);
    }
    Ok(())
}
