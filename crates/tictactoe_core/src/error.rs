//! Error types for the game engine.

use super::{Player, Position};

/// Why a mark could not be placed. The board is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The index is not on the board.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    Occupied(Position),

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0.label())]
    WrongPlayer(Player),

    /// The game is already won or tied.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for InvalidMove {}

/// Errors surfaced by [`GameState`](crate::GameState) and [`Session`](crate::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// A move was rejected.
    #[display("Invalid move: {}", _0)]
    InvalidMove(InvalidMove),

    /// The computer was asked to move with nothing left to play.
    #[display("No moves available")]
    NoMovesAvailable,
}

impl From<InvalidMove> for GameError {
    fn from(reason: InvalidMove) -> Self {
        GameError::InvalidMove(reason)
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::InvalidMove(reason) => Some(reason),
            GameError::NoMovesAvailable => None,
        }
    }
}
