//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are separated from
//! board storage so the engine and the computer strategy share one
//! definition of a line.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, completes_line, has_won_through, lines_through};
