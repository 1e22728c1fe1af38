use crate::error::GameError;

use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// A board plus whose turn it is and how the game ended, if it has.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state on the standard board
    pub fn initial() -> Self {
        Self::with_board(Board::standard())
    }

    /// Start from an arbitrary board, Red to move.
    pub fn with_board(board: Board) -> Self {
        let outcome = Self::outcome_of(&board);
        GameState {
            board,
            current_player: Player::Red, // Red starts
            outcome,
        }
    }

    fn outcome_of(board: &Board) -> Option<GameOutcome> {
        if let Some(player) = board.winner() {
            Some(GameOutcome::Winner(player))
        } else if board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Apply a move for the current player in place, returning the landing row.
    pub fn apply_move(&mut self, column: usize) -> Result<usize, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }

        let row = self.board.play(column, self.current_player)?;

        if self.board.check_win(row, column) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = self.current_player.opponent();

        Ok(row)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
