//! Move type: a player placing a mark at a position.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// One mark placed during a game, as kept in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Who placed the mark.
    pub player: Player,
    /// Where it went.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.player, self.position)
    }
}
