//! Turn orchestration between the human player and the bot.
//!
//! The controller is driven by discrete events: a human move request, the
//! elapsed bot delay, a reset, a difficulty change. It never sleeps itself;
//! when the bot is due it hands back a [`BotTurn`] and the caller schedules
//! [`GameController::bot_turn_elapsed`] after [`BotTurn::delay`].

use super::bot::{BotStrategy, Difficulty};
use super::game::GameState;
use super::rules::{Line, winning_line};
use super::types::{Board, Mark, Outcome};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

/// Mark played by the human.
pub const HUMAN_MARK: Mark = Mark::X;

/// Mark played by the bot.
pub const BOT_MARK: Mark = Mark::O;

/// Controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the human to pick a square.
    AwaitingHumanMove,
    /// The bot's delayed move is pending.
    AwaitingBotMove,
    /// The game ended; only a reset leaves this phase.
    GameOver,
}

/// Events sent from the controller to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The board changed and should be redrawn.
    BoardChanged(Board),
    /// The game ended with a win or draw.
    GameEnded {
        /// Terminal outcome (never `Undecided`).
        outcome: Outcome,
        /// Completed line for a win, for highlighting.
        line: Option<Line>,
    },
    /// The given mark won and its score counter should go up.
    ScoreShouldIncrement(Mark),
}

/// A scheduled bot move.
///
/// Only the most recently issued turn is honoured; resets and new games
/// make older turns stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotTurn {
    ticket: u64,
    delay: Duration,
}

impl BotTurn {
    /// How long to wait before calling [`GameController::bot_turn_elapsed`].
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Identifier of this scheduled turn.
    pub fn ticket(&self) -> u64 {
        self.ticket
    }
}

/// Drives a human-vs-bot game over a [`GameState`].
#[derive(Debug)]
pub struct GameController {
    state: GameState,
    phase: Phase,
    difficulty: Difficulty,
    bot_delay: Duration,
    rng: StdRng,
    next_ticket: u64,
    pending: Option<BotTurn>,
    events: mpsc::UnboundedSender<GameEvent>,
}

impl GameController {
    /// Creates a controller with a fresh game.
    ///
    /// `seed` fixes the bot's random choices; `None` draws from OS entropy.
    #[instrument(skip(events))]
    pub fn new(
        difficulty: Difficulty,
        bot_delay: Duration,
        seed: Option<u64>,
        events: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        info!("Game controller ready");
        Self {
            state: GameState::new(),
            phase: Phase::AwaitingHumanMove,
            difficulty,
            bot_delay,
            rng,
            next_ticket: 0,
            pending: None,
            events,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the configured difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the bot turn waiting for its delay, if any.
    pub fn pending_bot_turn(&self) -> Option<BotTurn> {
        self.pending
    }

    /// Changes the difficulty used for the next bot move.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!("Difficulty changed");
        self.difficulty = difficulty;
    }

    /// Handles a human move request.
    ///
    /// Requests outside [`Phase::AwaitingHumanMove`] and invalid squares are
    /// ignored. Returns the bot turn to schedule when the game continues.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn request_move(&mut self, index: usize) -> Option<BotTurn> {
        if self.phase != Phase::AwaitingHumanMove {
            debug!("Ignoring move outside the human turn");
            return None;
        }

        let outcome = match self.state.apply_move(index) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(error = %e, "Ignoring invalid move");
                return None;
            }
        };
        self.emit(GameEvent::BoardChanged(*self.state.board()));

        if outcome.is_terminal() {
            self.finish(outcome);
            return None;
        }

        let turn = BotTurn {
            ticket: self.next_ticket,
            delay: self.bot_delay,
        };
        self.next_ticket += 1;
        self.pending = Some(turn);
        self.phase = Phase::AwaitingBotMove;
        debug!(ticket = turn.ticket, "Bot turn scheduled");
        Some(turn)
    }

    /// Plays the bot move for a turn whose delay has elapsed.
    ///
    /// Returns `false` without doing anything if `turn` is stale: the game
    /// was reset, or a newer turn was issued, after it was scheduled.
    #[instrument(skip(self), fields(ticket = turn.ticket))]
    pub fn bot_turn_elapsed(&mut self, turn: BotTurn) -> bool {
        if self.phase != Phase::AwaitingBotMove || self.pending != Some(turn) {
            debug!("Dropping stale bot turn");
            return false;
        }
        self.pending = None;

        let strategy = BotStrategy::from(self.difficulty);
        let index = match strategy.select_move(self.state.board(), BOT_MARK, &mut self.rng) {
            Ok(index) => index,
            Err(e) => {
                error!(error = %e, ?strategy, "Bot found no move on a live board");
                debug_assert!(false, "bot invoked without an empty square");
                self.phase = Phase::GameOver;
                return false;
            }
        };

        let outcome = match self.state.apply_move(index) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, index, "Bot chose an illegal square");
                debug_assert!(false, "bot chose an illegal square");
                self.phase = Phase::GameOver;
                return false;
            }
        };
        info!(index, ?strategy, "Bot moved");
        self.emit(GameEvent::BoardChanged(*self.state.board()));

        if outcome.is_terminal() {
            self.finish(outcome);
        } else {
            self.phase = Phase::AwaitingHumanMove;
        }
        true
    }

    /// Starts a new game from any phase, cancelling a pending bot turn.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn request_reset(&mut self) {
        if let Some(turn) = self.pending.take() {
            debug!(ticket = turn.ticket, "Pending bot turn cancelled");
        }
        self.state.reset();
        self.phase = Phase::AwaitingHumanMove;
        info!("Game reset");
        self.emit(GameEvent::BoardChanged(*self.state.board()));
    }

    fn finish(&mut self, outcome: Outcome) {
        self.phase = Phase::GameOver;
        self.pending = None;
        let line = winning_line(self.state.board()).map(|(_, line)| line);
        info!(%outcome, "Game over");
        self.emit(GameEvent::GameEnded { outcome, line });
        if let Some(mark) = outcome.winner() {
            self.emit(GameEvent::ScoreShouldIncrement(mark));
        }
    }

    fn emit(&self, event: GameEvent) {
        if self.events.send(event).is_err() {
            warn!("Event receiver dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(difficulty: Difficulty) -> (GameController, mpsc::UnboundedReceiver<GameEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = GameController::new(difficulty, Duration::from_millis(500), Some(7), tx);
        (controller, rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[test]
    fn test_starts_awaiting_human() {
        let (controller, _rx) = controller(Difficulty::Easy);
        assert_eq!(controller.phase(), Phase::AwaitingHumanMove);
        assert_eq!(controller.state().current_mover(), HUMAN_MARK);
        assert_eq!(controller.pending_bot_turn(), None);
    }

    #[test]
    fn test_human_move_schedules_bot() {
        let (mut controller, mut rx) = controller(Difficulty::Hard);
        let turn = controller.request_move(0).unwrap();
        assert_eq!(turn.delay(), Duration::from_millis(500));
        assert_eq!(controller.phase(), Phase::AwaitingBotMove);

        let events = drain(&mut rx);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], GameEvent::BoardChanged(_)));

        assert!(controller.bot_turn_elapsed(turn));
        assert_eq!(controller.phase(), Phase::AwaitingHumanMove);
        assert!(!controller.state().board().is_empty(4));
    }

    #[test]
    fn test_moves_ignored_while_bot_pending() {
        let (mut controller, _rx) = controller(Difficulty::Easy);
        controller.request_move(4).unwrap();
        let before = controller.state().clone();
        assert_eq!(controller.request_move(0), None);
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn test_occupied_square_is_a_no_op() {
        let (mut controller, mut rx) = controller(Difficulty::Easy);
        let turn = controller.request_move(4).unwrap();
        controller.bot_turn_elapsed(turn);
        drain(&mut rx);

        let before = controller.state().clone();
        assert_eq!(controller.request_move(4), None);
        assert_eq!(controller.state(), &before);
        assert_eq!(controller.phase(), Phase::AwaitingHumanMove);
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_reset_drops_pending_turn() {
        let (mut controller, _rx) = controller(Difficulty::Easy);
        let turn = controller.request_move(4).unwrap();
        controller.request_reset();

        assert!(!controller.bot_turn_elapsed(turn));
        assert_eq!(controller.state(), &GameState::new());
        assert_eq!(controller.phase(), Phase::AwaitingHumanMove);
    }

    #[test]
    fn test_stale_turn_from_previous_game_is_dropped() {
        let (mut controller, _rx) = controller(Difficulty::Easy);
        let stale = controller.request_move(4).unwrap();
        controller.request_reset();
        let fresh = controller.request_move(0).unwrap();
        assert_ne!(stale, fresh);

        assert!(!controller.bot_turn_elapsed(stale));
        assert_eq!(controller.phase(), Phase::AwaitingBotMove);
        assert!(controller.bot_turn_elapsed(fresh));
    }

    #[test]
    fn test_turn_cannot_fire_twice() {
        let (mut controller, _rx) = controller(Difficulty::Easy);
        let turn = controller.request_move(4).unwrap();
        assert!(controller.bot_turn_elapsed(turn));
        assert!(!controller.bot_turn_elapsed(turn));
        assert_eq!(controller.state().history().len(), 2);
    }

    /// Human always takes the lowest empty square; bot turns fire at once.
    fn play_lowest_squares(controller: &mut GameController) {
        let mut turn = controller.request_move(0);
        while controller.phase() != Phase::GameOver {
            match turn.take() {
                Some(t) => {
                    controller.bot_turn_elapsed(t);
                }
                None => {
                    let next = controller.state().board().empty_indices()[0];
                    turn = controller.request_move(next);
                }
            }
        }
    }

    #[test]
    fn test_game_over_emits_single_end_event() {
        let (mut controller, mut rx) = controller(Difficulty::Medium);
        play_lowest_squares(&mut controller);

        let events = drain(&mut rx);
        let ended = events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameEnded { .. }))
            .count();
        assert_eq!(ended, 1);
        assert!(!controller.state().is_active());
        assert!(controller.request_move(8).is_none());
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_terminal_events_match_state() {
        let (mut controller, mut rx) = controller(Difficulty::Hard);
        play_lowest_squares(&mut controller);

        let outcome = controller.state().outcome();
        let events = drain(&mut rx);
        let last_board = events.iter().rev().find_map(|e| match e {
            GameEvent::BoardChanged(board) => Some(*board),
            _ => None,
        });
        assert_eq!(last_board.as_ref(), Some(controller.state().board()));
        assert!(events.contains(&GameEvent::GameEnded {
            outcome,
            line: winning_line(controller.state().board()).map(|(_, l)| l),
        }));
        match outcome {
            Outcome::WinFor(mark) => {
                assert_eq!(events.last(), Some(&GameEvent::ScoreShouldIncrement(mark)));
            }
            _ => assert!(
                !events
                    .iter()
                    .any(|e| matches!(e, GameEvent::ScoreShouldIncrement(_)))
            ),
        }
        assert_ne!(outcome, Outcome::WinFor(HUMAN_MARK));
    }

    #[test]
    fn test_reset_after_game_over() {
        let (mut controller, mut rx) = controller(Difficulty::Hard);
        play_lowest_squares(&mut controller);
        drain(&mut rx);

        controller.request_reset();
        assert_eq!(controller.phase(), Phase::AwaitingHumanMove);
        assert_eq!(controller.state(), &GameState::new());
        assert_eq!(drain(&mut rx), vec![GameEvent::BoardChanged(Board::new())]);
    }

    #[test]
    fn test_difficulty_read_when_bot_acts() {
        let (mut controller, _rx) = controller(Difficulty::Easy);
        let turn = controller.request_move(0).unwrap();
        controller.set_difficulty(Difficulty::Hard);
        assert!(controller.bot_turn_elapsed(turn));
        // Hard answers a corner opening with the center.
        assert!(!controller.state().board().is_empty(4));
    }

    #[test]
    fn test_closed_receiver_does_not_fail() {
        let (mut controller, rx) = controller(Difficulty::Easy);
        drop(rx);
        let turn = controller.request_move(4).unwrap();
        assert!(controller.bot_turn_elapsed(turn));
    }
}
