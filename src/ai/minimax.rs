//! Depth-limited minimax with alpha-beta pruning.
//!
//! Every node works on its own clone of the board, so sibling branches never
//! see each other's trial moves and the caller's board is never touched.

use tracing::debug;

use crate::error::StrategyError;
use crate::game::{Board, Player};

use super::heuristic::{Heuristic, ThreatHeuristic};
use super::strategy::Strategy;

/// Search depth in plies used when none is configured.
pub const DEFAULT_DEPTH: usize = 4;

/// Deepest search accepted from configuration: every cell of a standard board.
pub const MAX_DEPTH: usize = 42;

/// Base score of a position where a line has just been completed. The
/// remaining depth is added so that faster wins rank higher.
pub const WIN_SCORE: i32 = 1_000_000;

pub const NEG_INFINITY: i32 = i32::MIN + 1;
pub const INFINITY: i32 = i32::MAX;

/// Score and column chosen by one minimax call.
///
/// `column` is `None` at leaves, where no move is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub column: Option<usize>,
}

/// Minimax search engine, scoring every position from the root player's
/// perspective.
pub struct Minimax<H = ThreatHeuristic> {
    heuristic: H,
    nodes: u64,
}

impl Minimax<ThreatHeuristic> {
    pub fn new() -> Self {
        Self::with_heuristic(ThreatHeuristic)
    }
}

impl Default for Minimax<ThreatHeuristic> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Heuristic> Minimax<H> {
    pub fn with_heuristic(heuristic: H) -> Self {
        Minimax {
            heuristic,
            nodes: 0,
        }
    }

    /// Nodes visited since the last [`Minimax::search`].
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Full-window search from the root, maximizing for `player`.
    pub fn search(
        &mut self,
        board: &Board,
        player: Player,
        depth: usize,
    ) -> Result<SearchResult, StrategyError> {
        self.nodes = 0;
        let result = self.minimax(board, player, depth, NEG_INFINITY, INFINITY, true)?;
        debug!(
            player = %player,
            depth,
            nodes = self.nodes,
            score = result.score,
            column = ?result.column,
            "minimax search finished"
        );
        Ok(result)
    }

    /// One minimax node.
    ///
    /// `player` is always the root player; `maximizing` selects whether this
    /// node moves for `player` or for the opponent. Columns are tried in
    /// ascending order and only a strictly better score replaces the current
    /// best, so ties go to the lowest column.
    pub fn minimax(
        &mut self,
        board: &Board,
        player: Player,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> Result<SearchResult, StrategyError> {
        self.nodes += 1;

        if depth == 0 || board.is_full() {
            return Ok(SearchResult {
                score: self.heuristic.evaluate(board, player),
                column: None,
            });
        }

        let mover = if maximizing { player } else { player.opponent() };
        let mut best = SearchResult {
            score: if maximizing { NEG_INFINITY } else { INFINITY },
            column: None,
        };

        for col in board.playable_columns() {
            let mut child = board.clone();
            let row = child.play(col, mover)?;

            let score = if child.check_win(row, col) {
                self.nodes += 1;
                let win = WIN_SCORE + depth as i32;
                if maximizing {
                    win
                } else {
                    -win
                }
            } else {
                self.minimax(&child, player, depth - 1, alpha, beta, !maximizing)?
                    .score
            };

            if maximizing {
                if score > best.score {
                    best = SearchResult {
                        score,
                        column: Some(col),
                    };
                }
                alpha = alpha.max(score);
            } else {
                if score < best.score {
                    best = SearchResult {
                        score,
                        column: Some(col),
                    };
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        if best.column.is_none() {
            // Unreachable while `is_full` guards the loop, kept as a leaf.
            best.score = self.heuristic.evaluate(board, player);
        }
        Ok(best)
    }
}

/// Strategy wrapping [`Minimax`] at a fixed depth.
pub struct MinimaxStrategy<H = ThreatHeuristic> {
    depth: usize,
    engine: Minimax<H>,
}

impl MinimaxStrategy<ThreatHeuristic> {
    pub fn new(depth: usize) -> Self {
        MinimaxStrategy {
            depth,
            engine: Minimax::new(),
        }
    }
}

impl Default for MinimaxStrategy<ThreatHeuristic> {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl<H: Heuristic> MinimaxStrategy<H> {
    pub fn with_heuristic(depth: usize, heuristic: H) -> Self {
        MinimaxStrategy {
            depth,
            engine: Minimax::with_heuristic(heuristic),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl<H: Heuristic> Strategy for MinimaxStrategy<H> {
    fn authors(&self) -> &str {
        "Minimax"
    }

    fn play(&mut self, board: &Board, player: Player) -> Result<usize, StrategyError> {
        let playable = board.playable_columns();
        let first = *playable.first().ok_or(StrategyError::NoPlayableColumn)?;

        let result = self.engine.search(board, player, self.depth)?;
        // A zero-depth search makes no move; fall back to the lowest column.
        Ok(result.column.unwrap_or(first))
    }
}
