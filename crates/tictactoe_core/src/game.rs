//! Game state: board, turn bookkeeping, outcome and computer moves.

use crate::rules::{self, has_won_through};
use crate::strategy::pick_move;
use crate::{Board, GameError, InvalidMove, Move, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Result of a game so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// The player completed a line.
    Win(Player),
    /// Board filled with no line completed.
    Tie,
}

impl Outcome {
    /// True for `Win` and `Tie`.
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// State of one game, from an empty board to a win or tie.
///
/// A new game is a new `GameState`; marks are never removed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameState {
    board: Board,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Number of marks on the board.
    pub fn marks_placed(&self) -> usize {
        self.history.len()
    }

    /// Player whose turn it is.
    pub fn to_move(&self) -> Player {
        match self.last_move() {
            Some(last) => last.player.opponent(),
            None => Player::X,
        }
    }

    /// Places `player`'s mark on cell `cell` (0-8, row-major).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] and leaves the board untouched if
    /// the cell is out of range or occupied, if it is not `player`'s turn,
    /// or if the game is already over.
    #[instrument(skip(self), fields(marks = self.history.len()))]
    pub fn register_turn(&mut self, cell: usize, player: Player) -> Result<(), GameError> {
        let position = Position::from_index(cell)
            .ok_or(InvalidMove::OutOfRange(cell))?;

        if self.outcome().is_over() {
            warn!("Move after game end rejected");
            return Err(InvalidMove::GameOver.into());
        }
        if !self.board.is_empty(position) {
            warn!(%position, "Square already occupied");
            return Err(InvalidMove::Occupied(position).into());
        }
        if player != self.to_move() {
            warn!(%player, expected = %self.to_move(), "Out of turn");
            return Err(InvalidMove::WrongPlayer(player).into());
        }

        self.board.set(position, Square::Occupied(player));
        self.history.push(Move::new(player, position));
        debug!(%player, %position, "Mark placed");

        match self.outcome() {
            Outcome::Win(winner) => info!(%winner, board = %self.board.display(), "Game won"),
            Outcome::Tie => info!(board = %self.board.display(), "Game tied"),
            Outcome::InProgress => {}
        }
        Ok(())
    }

    /// Checks whether `player` has three in a row through cell `last_cell`.
    ///
    /// Only the row, column and diagonals through `last_cell` are checked.
    /// Out-of-range cells never win.
    pub fn has_player_won(&self, player: Player, last_cell: usize) -> bool {
        Position::from_index(last_cell)
            .is_some_and(|pos| has_won_through(&self.board, player, pos))
    }

    /// True if the board is full and the move that filled it did not win.
    pub fn is_tie(&self) -> bool {
        self.outcome() == Outcome::Tie
    }

    /// Outcome derived from the board and the most recent move.
    pub fn outcome(&self) -> Outcome {
        let Some(last) = self.last_move() else {
            return Outcome::InProgress;
        };
        if has_won_through(&self.board, last.player, last.position) {
            Outcome::Win(last.player)
        } else if self.history.len() == 9 {
            debug_assert!(rules::is_full(&self.board));
            Outcome::Tie
        } else {
            Outcome::InProgress
        }
    }

    /// Chooses a move for the computer ([`Player::COMPUTER`]) without
    /// applying it.
    ///
    /// Commit the returned cell with [`register_turn`](Self::register_turn).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoMovesAvailable`] once the game is over.
    #[instrument(skip(self), fields(to_move = %self.to_move()))]
    pub fn computer_turn(&self) -> Result<Position, GameError> {
        if self.outcome().is_over() {
            warn!("Computer asked to move in a finished game");
            return Err(GameError::NoMovesAvailable);
        }
        let pos = pick_move(&self.board, Player::COMPUTER)
            .ok_or(GameError::NoMovesAvailable)?;
        debug!(position = %pos, "Computer chose position");
        Ok(pos)
    }
}
