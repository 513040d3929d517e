//! Application state and key handling.

use crate::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use tictactoe_core::{Mode, Position, Session};
use tracing::{debug, info, instrument, warn};

/// Main application state.
///
/// Rendering reads from here; only key handling writes.
pub struct App {
    session: Session,
    cursor: Position,
    status: String,
    replay_prompt: bool,
    locked: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game in `mode`.
    pub fn new(mode: Mode) -> Self {
        let session = Session::new(mode);
        let status = session.turn_label();
        Self {
            session,
            cursor: Position::Center,
            status,
            replay_prompt: false,
            locked: false,
            should_quit: false,
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gets the highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// True while the end-of-game dialog is shown.
    pub fn replay_prompt(&self) -> bool {
        self.replay_prompt
    }

    /// True once the player declined a replay; moves are ignored.
    pub fn locked(&self) -> bool {
        self.locked
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if self.replay_prompt {
            self.handle_prompt_key(key);
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.restart(),
            KeyCode::Char('s') => self.switch_mode(Mode::Singleplayer),
            KeyCode::Char('m') => self.switch_mode(Mode::Multiplayer),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            KeyCode::Char(c) => {
                if let Some(cell) = digit_cell(c) {
                    self.cursor = Position::from_index(cell).unwrap_or(self.cursor);
                    self.play(cell);
                }
            }
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_prompt_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('y') => self.restart(),
            KeyCode::Char('n') | KeyCode::Esc => {
                debug!("Replay declined, locking board");
                self.replay_prompt = false;
                self.locked = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn play(&mut self, cell: usize) {
        if self.locked {
            return;
        }
        match self.session.play(cell) {
            Ok(report) => {
                debug!(moves = report.moves.len(), outcome = ?report.outcome, "Turn applied");
                match self.session.outcome_message() {
                    Some(message) => {
                        info!(%message, "Game over");
                        self.status = message;
                        self.replay_prompt = true;
                    }
                    None => self.status = self.session.turn_label(),
                }
            }
            Err(e) => {
                warn!(error = %e, cell, "Move rejected");
                self.status = e.to_string();
            }
        }
    }

    /// Restarts the game in the current mode.
    pub fn restart(&mut self) {
        self.session.new_game();
        self.reset_view();
    }

    fn switch_mode(&mut self, mode: Mode) {
        self.session.set_mode(mode);
        self.reset_view();
    }

    fn reset_view(&mut self) {
        self.cursor = Position::Center;
        self.replay_prompt = false;
        self.locked = false;
        self.status = self.session.turn_label();
    }
}
