//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines: rows, columns, diagonals.
pub static LINES: [[Position; 3]; 8] = [
    // Rows
    [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
    ],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [
        Position::TopLeft,
        Position::Center,
        Position::BottomRight,
    ],
    [
        Position::TopRight,
        Position::Center,
        Position::BottomLeft,
    ],
];

/// Lines passing through `pos`.
///
/// Every cell has its row and column; corners add one diagonal and the
/// center adds both.
pub fn lines_through(pos: Position) -> impl Iterator<Item = &'static [Position; 3]> {
    LINES.iter().filter(move |line| line.contains(&pos))
}

/// Checks whether all three cells of `line` hold `player`'s mark.
pub fn completes_line(board: &Board, player: Player, line: &[Position; 3]) -> bool {
    line.iter()
        .all(|pos| board.get(*pos) == Square::Occupied(player))
}

/// Checks whether `player` has three in a row on a line through `last`.
///
/// Only the lines through the most recently marked cell are inspected: a
/// win can only have been completed by that move.
#[instrument(skip(board))]
pub fn has_won_through(board: &Board, player: Player, last: Position) -> bool {
    lines_through(last).any(|line| completes_line(board, player, line))
}
