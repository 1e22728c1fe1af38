//! Core Connect Four game logic: board representation, player tokens, and the
//! game state tracked by the driver.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, COLS, ROWS, TO_WIN};
pub use player::Player;
pub use state::{GameOutcome, GameState};
