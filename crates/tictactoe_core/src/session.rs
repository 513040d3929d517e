//! Game session: the mode plus the current game.

use crate::{GameError, GameState, InvalidMove, Move, Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who plays Player 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Human as Player 1 against the computer as Player 2.
    #[default]
    Singleplayer,
    /// Two humans sharing the board.
    Multiplayer,
}

impl Mode {
    /// The player the computer controls in this mode, if any.
    pub fn computer(self) -> Option<Player> {
        match self {
            Mode::Singleplayer => Some(Player::COMPUTER),
            Mode::Multiplayer => None,
        }
    }
}

/// Moves applied by one [`Session::play`] call and the resulting outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// The human move followed by the computer reply, if one was made.
    pub moves: Vec<Move>,
    /// Outcome after the last applied move.
    pub outcome: Outcome,
}

/// A running game together with its mode.
#[derive(Debug, Clone, Default)]
pub struct Session {
    mode: Mode,
    game: GameState,
}

impl Session {
    /// Creates a session with a fresh game.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        info!(%mode, "Creating new session");
        Self {
            mode,
            game: GameState::new(),
        }
    }

    /// Returns the mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Discards the current game and starts a new one in the same mode.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn new_game(&mut self) {
        info!("Starting new game");
        self.game = GameState::new();
    }

    /// Switches mode and starts a new game.
    #[instrument(skip(self), fields(from = %self.mode))]
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.new_game();
    }

    /// Plays `cell` for the player to move.
    ///
    /// In single-player mode the computer answers within the same call
    /// unless the human move ended the game.
    ///
    /// # Errors
    ///
    /// Propagates [`GameError`] from the engine. A rejected human move
    /// leaves the game unchanged. In single-player mode, playing on the
    /// computer's turn is rejected as
    /// [`InvalidMove::WrongPlayer`].
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn play(&mut self, cell: usize) -> Result<TurnReport, GameError> {
        let player = self.game.to_move();
        if self.mode.computer() == Some(player) {
            return Err(InvalidMove::WrongPlayer(player).into());
        }

        let position = Position::from_index(cell)
            .ok_or(InvalidMove::OutOfRange(cell))?;
        self.game.register_turn(cell, player)?;
        let human = Move::new(player, position);
        debug!(%human, "Human moved");
        let mut moves = vec![human];

        if let Some(computer) = self.mode.computer()
            && !self.game.outcome().is_over()
        {
            let reply = self.game.computer_turn()?;
            self.game.register_turn(reply.to_index(), computer)?;
            let reply = Move::new(computer, reply);
            debug!(%reply, "Computer replied");
            moves.push(reply);
        }

        Ok(TurnReport {
            moves,
            outcome: self.game.outcome(),
        })
    }

    /// "Player N's turn" for the player to move.
    pub fn turn_label(&self) -> String {
        format!("{}'s turn", self.game.to_move().label())
    }

    /// End-of-game message, or `None` while the game is in progress.
    pub fn outcome_message(&self) -> Option<String> {
        match self.game.outcome() {
            Outcome::InProgress => None,
            Outcome::Win(winner) => Some(format!("{} has won the game!", winner.label())),
            Outcome::Tie => Some("The game was a tie.".to_string()),
        }
    }
}
