//! The turn loop: owns the game state and asks each side's strategy for a
//! column in turn.

use tracing::info;

use crate::ai::Strategy;
use crate::error::MatchError;
use crate::game::{Board, GameOutcome, GameState, Player};

/// One applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub player: Player,
    pub column: usize,
    pub row: usize,
}

/// Result of a finished match.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub outcome: GameOutcome,
    pub moves: Vec<MoveRecord>,
    pub final_board: Board,
}

/// A game between two strategies. Red moves first.
pub struct Match {
    state: GameState,
    red: Box<dyn Strategy>,
    yellow: Box<dyn Strategy>,
    moves: Vec<MoveRecord>,
}

impl Match {
    pub fn new(board: Board, red: Box<dyn Strategy>, yellow: Box<dyn Strategy>) -> Self {
        Match {
            state: GameState::with_board(board),
            red,
            yellow,
            moves: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    fn strategy_mut(&mut self, player: Player) -> &mut dyn Strategy {
        match player {
            Player::Red => self.red.as_mut(),
            Player::Yellow => self.yellow.as_mut(),
        }
    }

    /// Ask the player to move for a column, check it, and apply it.
    ///
    /// Returns `None` once the game is over.
    pub fn play_turn(&mut self) -> Result<Option<MoveRecord>, MatchError> {
        if self.state.is_terminal() {
            return Ok(None);
        }

        let player = self.state.current_player();
        let board = self.state.board().clone();
        let strategy = self.strategy_mut(player);
        let column = strategy.play(&board, player)?;

        let playable = board.playable_columns();
        if !playable.contains(&column) {
            return Err(MatchError::IllegalAction {
                player: format!("{player} ({})", self.strategy_mut(player).authors()),
                column,
                playable,
            });
        }

        let row = self.state.apply_move(column)?;
        let record = MoveRecord {
            player,
            column,
            row,
        };
        self.moves.push(record);
        info!(player = %player, column, row, "move played");

        Ok(Some(record))
    }

    /// Play until the game ends, calling `observer` after every move.
    pub fn run<F>(mut self, mut observer: F) -> Result<MatchResult, MatchError>
    where
        F: FnMut(&MoveRecord, &GameState),
    {
        let outcome = loop {
            if let Some(outcome) = self.state.outcome() {
                break outcome;
            }
            if let Some(record) = self.play_turn()? {
                observer(&record, &self.state);
            }
        };

        match outcome {
            GameOutcome::Winner(player) => {
                info!(winner = %player, moves = self.moves.len(), "game over")
            }
            GameOutcome::Draw => info!(moves = self.moves.len(), "game drawn"),
        }

        Ok(MatchResult {
            outcome,
            moves: self.moves,
            final_board: self.state.board().clone(),
        })
    }
}
