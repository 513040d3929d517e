//! Computer opponent: take a win, block a win, else fixed preference.

use crate::rules::lines_through;
use crate::{Board, Player, Position, Square};
use tracing::{debug, instrument};

/// Fallback order: center, corners, then edges.
pub const PREFERENCE: [Position; 9] = [
    Position::Center,
    Position::TopLeft,
    Position::TopRight,
    Position::BottomLeft,
    Position::BottomRight,
    Position::TopCenter,
    Position::MiddleLeft,
    Position::MiddleRight,
    Position::BottomCenter,
];

/// Picks a move for `me`, or `None` if the board has no empty square.
///
/// Candidates are scanned in [`PREFERENCE`] order for each rule.
#[instrument(skip(board))]
pub fn pick_move(board: &Board, me: Player) -> Option<Position> {
    if let Some(pos) = finishing_cell(board, me) {
        debug!(position = %pos, "Taking winning cell");
        return Some(pos);
    }
    if let Some(pos) = finishing_cell(board, me.opponent()) {
        debug!(position = %pos, "Blocking opponent");
        return Some(pos);
    }
    let pos = PREFERENCE.iter().copied().find(|pos| board.is_empty(*pos));
    debug!(position = ?pos, "Falling back to preference order");
    pos
}

/// An empty cell that would give `player` three in a row.
fn finishing_cell(board: &Board, player: Player) -> Option<Position> {
    PREFERENCE.iter().copied().find(|&pos| {
        board.is_empty(pos)
            && lines_through(pos).any(|line| {
                line.iter()
                    .filter(|&&other| other != pos)
                    .all(|&other| board.get(other) == Square::Occupied(player))
            })
    })
}
