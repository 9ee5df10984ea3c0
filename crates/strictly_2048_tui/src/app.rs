//! Application state and logic.

use crate::input::{Command, KeyBindings};
use crate::session::{GameSession, MoveReport};
use crate::store::BestScoreStore;
use crossterm::event::KeyCode;
use rand::Rng;
use tracing::debug;

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep polling input.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
pub struct App<S, R> {
    session: GameSession<S, R>,
    keys: KeyBindings,
    status_message: String,
}

impl<S: BestScoreStore, R: Rng> App<S, R> {
    /// Creates a new application around a session and its key map.
    pub fn new(session: GameSession<S, R>, keys: KeyBindings) -> Self {
        Self {
            session,
            keys,
            status_message: "Use the arrow keys to join tiles and reach 2048!".to_string(),
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &GameSession<S, R> {
        &self.session
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        let Some(command) = self.keys.resolve(key) else {
            return Flow::Continue;
        };
        debug!(%command, "Handling command");

        match command {
            Command::Move(direction) => {
                let report = self.session.apply_move(direction);
                self.status_message = self.describe(&report);
            }
            Command::NewGame => {
                self.session.restart();
                self.status_message = "New game. Good luck!".to_string();
            }
            Command::KeepPlaying => {
                if self.session.won() {
                    self.session.keep_playing();
                    self.status_message = "Keep going!".to_string();
                }
            }
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn describe(&self, report: &MoveReport) -> String {
        if report.game_over {
            format!(
                "Game over! Final score {}. Press 'n' for a new game.",
                self.session.score()
            )
        } else if report.just_won {
            "You made 2048! Press 'c' to keep playing or 'n' for a new game.".to_string()
        } else if !report.moved {
            format!("Can't move {}.", report.direction)
        } else if report.new_best {
            format!("+{} New best!", report.points)
        } else if report.points > 0 {
            format!("+{}", report.points)
        } else {
            format!("Moved {}.", report.direction)
        }
    }
}
