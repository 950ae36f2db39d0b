//! Command-line interface for tictactoe_bot.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_bot::Difficulty;

/// Tic-tac-toe against a bot
#[derive(Parser, Debug)]
#[command(name = "tictactoe_bot")]
#[command(about = "Play tic-tac-toe against a random, blocking, or minimax bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the bot in the terminal
    Play {
        /// Bot difficulty (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Pause before the bot answers, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for the bot's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play bots against each other and print the results
    Simulate {
        /// Difficulty of the X bot
        #[arg(long, default_value = "hard")]
        x: Difficulty,

        /// Difficulty of the O bot
        #[arg(long, default_value = "hard")]
        o: Difficulty,

        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for the bots' random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
}
