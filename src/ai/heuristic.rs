use crate::game::{Board, Player};

/// Score awarded for every column where a single drop leaves a line.
pub const THREAT_SCORE: i32 = 100;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// One-ply threat count: +100 per column where a drop by `player` leaves a
/// line on the board, -100 per column where a drop by the opponent would.
///
/// A board that already holds a line therefore scores every playable column
/// for both sides, which cancels out. Nothing positional is scored; playing
/// strength comes from search depth.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreatHeuristic;

impl ThreatHeuristic {
    /// Number of columns where a single drop by `player` leaves a line.
    fn winning_drops(board: &Board, player: Player) -> i32 {
        let mut count = 0;
        for col in board.playable_columns() {
            let mut trial = board.clone();
            if trial.play(col, player).is_ok() && trial.has_winning_line() {
                count += 1;
            }
        }
        count
    }
}

impl Heuristic for ThreatHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        THREAT_SCORE * Self::winning_drops(board, player)
            - THREAT_SCORE * Self::winning_drops(board, player.opponent())
    }
}
