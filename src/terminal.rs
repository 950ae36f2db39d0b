//! Line-based terminal session driving a [`GameController`].
//!
//! Stdin lines and the bot delay timer are multiplexed with `tokio::select!`,
//! so a reset typed while the bot is "thinking" cancels its move.

use anyhow::Result;
use strum::IntoEnumIterator;
use tictactoe_bot::{
    BotTurn, Difficulty, GameConfig, GameController, GameEvent, Phase, Position, Scoreboard,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, instrument};

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Move(Position),
    Reset,
    SetDifficulty(Difficulty),
    Help,
    Quit,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Input::Quit,
        "r" | "reset" | "new" => Input::Reset,
        "?" | "h" | "help" => Input::Help,
        other => {
            if let Ok(difficulty) = other.parse::<Difficulty>() {
                Input::SetDifficulty(difficulty)
            } else if let Some(position) = Position::from_label_or_number(other) {
                Input::Move(position)
            } else {
                Input::Unknown(trimmed.to_string())
            }
        }
    }
}

fn print_help() {
    let levels: Vec<String> = Difficulty::iter().map(|d| d.to_string()).collect();
    println!("Enter a cell number 1-9 or a name like \"center\" to move.");
    println!("Commands: reset, {}, help, quit", levels.join(", "));
}

fn show_event(event: GameEvent, score: &mut Scoreboard) {
    match event {
        GameEvent::BoardChanged(board) => println!("\n{}\n", board.display()),
        GameEvent::GameEnded { outcome, line } => {
            println!("{}", outcome);
            if let Some([a, b, c]) = line {
                println!("Winning line: {}-{}-{}", a + 1, b + 1, c + 1);
            }
            println!("Type \"reset\" to play again.");
        }
        GameEvent::ScoreShouldIncrement(mark) => {
            score.record(mark);
            println!("{}", score);
        }
    }
}

/// Runs an interactive game until the player quits or stdin closes.
#[instrument(skip(config), fields(difficulty = %config.difficulty()))]
pub async fn run(config: GameConfig) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut controller =
        GameController::new(*config.difficulty(), config.bot_delay(), *config.seed(), event_tx);
    let mut score = Scoreboard::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending: Option<(BotTurn, Instant)> = None;

    info!("Starting terminal session");
    print_help();
    println!("\n{}\n", controller.state().board().display());
    println!("Difficulty: {}. You are X.", controller.difficulty());

    loop {
        let deadline = pending.map(|(_, at)| at);

        tokio::select! {
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                if let Some((turn, _)) = pending.take() {
                    controller.bot_turn_elapsed(turn);
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("Stdin closed");
                    break;
                };
                match parse_input(&line) {
                    Input::Move(position) => {
                        if let Some(turn) = controller.request_move(position.to_index()) {
                            pending = Some((turn, Instant::now() + turn.delay()));
                            println!("Bot is thinking...");
                        } else if controller.phase() == Phase::AwaitingHumanMove
                            && !controller.state().board().is_empty(position.to_index())
                        {
                            println!("{} is taken.", position);
                        }
                    }
                    Input::Reset => {
                        pending = None;
                        controller.request_reset();
                    }
                    Input::SetDifficulty(difficulty) => {
                        controller.set_difficulty(difficulty);
                        println!("Difficulty: {}", difficulty);
                    }
                    Input::Help => print_help(),
                    Input::Quit => break,
                    Input::Unknown(text) => println!("Unrecognised input: {:?}", text),
                }
            }
        }

        while let Ok(event) = event_rx.try_recv() {
            show_event(event, &mut score);
        }
    }

    info!(%score, "Session finished");
    Ok(())
}
