use crate::error::StrategyError;
use crate::game::{Board, Player};

/// Universal interface for anything that picks moves: search engines, random
/// baselines, humans at a console.
///
/// A strategy only recommends a column. The caller owns the board and applies
/// the move itself.
pub trait Strategy {
    /// Who wrote this strategy.
    fn authors(&self) -> &str;

    /// Select a currently playable column for `player` on `board`.
    fn play(&mut self, board: &Board, player: Player) -> Result<usize, StrategyError>;
}
