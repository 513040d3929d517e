//! Tic-tac-toe game engine.
//!
//! Pure game logic with no UI dependencies. A front-end (terminal,
//! graphical, web) drives a [`Session`] or a bare [`GameState`] and renders
//! the [`Board`] it reads back.
//!
//! # Architecture
//!
//! - **GameState**: board, turn bookkeeping, win/tie detection, computer moves
//! - **Session**: game mode plus the current game, handles computer replies
//! - **Rules**: line tables and board-full checks
//! - **Strategy**: win, block, then fixed preference order
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, Outcome, Player};
//!
//! # fn main() -> Result<(), tictactoe_core::GameError> {
//! let mut game = GameState::new();
//! for (cell, player) in [(0, Player::X), (3, Player::O), (1, Player::X), (4, Player::O), (2, Player::X)] {
//!     game.register_turn(cell, player)?;
//! }
//! assert!(game.has_player_won(Player::X, 2));
//! assert_eq!(game.outcome(), Outcome::Win(Player::X));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
mod position;
pub mod rules;
mod session;
mod strategy;
mod types;

pub use action::Move;
pub use error::{GameError, InvalidMove};
pub use game::{GameState, Outcome};
pub use position::Position;
pub use session::{Mode, Session, TurnReport};
pub use strategy::{PREFERENCE, pick_move};
pub use types::{Board, Player, Square};
