use std::fmt;

use crate::error::GameError;

use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const TO_WIN: usize = 4;

/// Line directions as (row step, column step): horizontal, vertical, and the
/// two diagonals (`\` and `/`).
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// Single-character glyph used by the textual board dump.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }

    /// The player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }
}

/// A gravity board of `height` x `width` cells where `to_win` aligned tokens win.
///
/// Row 0 is the top, row `height - 1` is the bottom. Cells only change through
/// [`Board::play`], so filled cells of a column are always contiguous from the
/// bottom upward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    to_win: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with the given dimensions and win length.
    pub fn new(height: usize, width: usize, to_win: usize) -> Result<Self, GameError> {
        if height == 0 || width == 0 || to_win == 0 || to_win > height.max(width) {
            return Err(GameError::InvalidDimensions {
                height,
                width,
                to_win,
            });
        }

        Ok(Board {
            height,
            width,
            to_win,
            cells: vec![Cell::Empty; height * width],
        })
    }

    /// The standard 6x7 board with four to win.
    pub fn standard() -> Self {
        Board {
            height: ROWS,
            width: COLS,
            to_win: TO_WIN,
            cells: vec![Cell::Empty; ROWS * COLS],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn to_win(&self) -> usize {
        self.to_win
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    fn check_column(&self, col: usize) -> Result<(), GameError> {
        if col >= self.width {
            return Err(GameError::ColumnOutOfBounds {
                column: col,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Get the cell at a specific position.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        if row >= self.height || col >= self.width {
            return Err(GameError::OutOfBounds { row, column: col });
        }
        Ok(self.cells[self.index(row, col)])
    }

    /// Cells of a column, top to bottom.
    pub fn column(&self, col: usize) -> Result<Vec<Cell>, GameError> {
        self.check_column(col)?;
        Ok((0..self.height)
            .map(|row| self.cells[self.index(row, col)])
            .collect())
    }

    /// Cells of a row, left to right.
    pub fn row(&self, row: usize) -> Result<Vec<Cell>, GameError> {
        if row >= self.height {
            return Err(GameError::OutOfBounds { row, column: 0 });
        }
        let start = self.index(row, 0);
        Ok(self.cells[start..start + self.width].to_vec())
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.cells[self.index(0, col)] != Cell::Empty
    }

    /// Number of tokens stacked in a column.
    pub fn filled_in_column(&self, col: usize) -> Result<usize, GameError> {
        self.check_column(col)?;
        Ok((0..self.height)
            .filter(|&row| self.cells[self.index(row, col)] != Cell::Empty)
            .count())
    }

    /// Number of tokens on the whole board.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Columns with at least one empty cell, ascending.
    pub fn playable_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// Drop a token in a column, returns the row where it landed.
    ///
    /// A full column leaves the board untouched.
    pub fn play(&mut self, col: usize, player: Player) -> Result<usize, GameError> {
        self.check_column(col)?;

        if self.is_column_full(col) {
            return Err(GameError::ColumnFull { column: col });
        }

        let row = (0..self.height)
            .rev()
            .find(|&row| self.cells[self.index(row, col)] == Cell::Empty)
            .ok_or(GameError::ColumnFull { column: col })?;
        let idx = self.index(row, col);
        self.cells[idx] = player.to_cell();
        Ok(row)
    }

    /// Check if the token at (row, col) is part of a winning line.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = match self.cell(row, col) {
            Ok(Cell::Empty) | Err(_) => return false,
            Ok(cell) => cell,
        };

        DIRECTIONS.iter().any(|&(d_row, d_col)| {
            1 + self.count_from(row, col, d_row, d_col, cell)
                + self.count_from(row, col, -d_row, -d_col, cell)
                >= self.to_win
        })
    }

    /// Count same-colored cells stepping away from (row, col), exclusive.
    fn count_from(&self, row: usize, col: usize, d_row: isize, d_col: isize, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as isize + d_row;
        let mut c = col as isize + d_col;
        while self.in_bounds(r, c) && self.cells[self.index(r as usize, c as usize)] == cell {
            count += 1;
            r += d_row;
            c += d_col;
        }
        count
    }

    fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Owner of the first run of `length` same-colored tokens found.
    fn first_run(&self, length: usize) -> Option<Player> {
        if length == 0 {
            return None;
        }
        let span = length as isize - 1;

        for row in 0..self.height {
            for col in 0..self.width {
                let cell = self.cells[self.index(row, col)];
                if cell == Cell::Empty {
                    continue;
                }
                for &(d_row, d_col) in &DIRECTIONS {
                    let (r, c) = (row as isize, col as isize);
                    if !self.in_bounds(r + d_row * span, c + d_col * span) {
                        continue;
                    }
                    let complete = (1..length as isize).all(|i| {
                        let idx = self.index((r + d_row * i) as usize, (c + d_col * i) as usize);
                        self.cells[idx] == cell
                    });
                    if complete {
                        return cell.player();
                    }
                }
            }
        }
        None
    }

    /// True if any row, column or diagonal holds `length` consecutive tokens of
    /// one color.
    pub fn has_line(&self, length: usize) -> bool {
        self.first_run(length).is_some()
    }

    /// [`Board::has_line`] with the board's own win length.
    pub fn has_winning_line(&self) -> bool {
        self.has_line(self.to_win)
    }

    /// The player owning a winning line, if any.
    pub fn winner(&self) -> Option<Player> {
        self.first_run(self.to_win)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.width {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[self.index(row, col)].glyph())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(ROWS, COLS, TO_WIN).unwrap();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.cell(row, col).unwrap(), Cell::Empty);
            }
        }
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            Board::new(0, 7, 4),
            Err(GameError::InvalidDimensions { .. })
        ));
        assert!(Board::new(6, 0, 4).is_err());
        assert!(Board::new(6, 7, 0).is_err());
        assert!(Board::new(3, 3, 4).is_err());
        assert!(Board::new(1, 4, 4).is_ok());
    }

    #[test]
    fn test_play() {
        let mut board = Board::new(ROWS, COLS, TO_WIN).unwrap();

        // First token lands at the bottom
        let row = board.play(3, Player::Red).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.cell(5, 3).unwrap(), Cell::Red);

        // Second token stacks on top
        let row = board.play(3, Player::Yellow).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.cell(4, 3).unwrap(), Cell::Yellow);
        assert_eq!(board.filled_in_column(3).unwrap(), 2);
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::standard();

        for _ in 0..ROWS {
            board.play(0, Player::Red).unwrap();
        }

        assert!(board.is_column_full(0));
        let before = board.clone();
        assert_eq!(
            board.play(0, Player::Yellow),
            Err(GameError::ColumnFull { column: 0 })
        );
        assert_eq!(board, before);
        assert_eq!(board.playable_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::standard();
        assert_eq!(
            board.play(7, Player::Red),
            Err(GameError::ColumnOutOfBounds { column: 7, width: 7 })
        );
        assert!(board.column(7).is_err());
        assert!(board.filled_in_column(9).is_err());
    }

    #[test]
    fn test_cell_out_of_bounds() {
        let board = Board::standard();
        assert_eq!(
            board.cell(6, 0),
            Err(GameError::OutOfBounds { row: 6, column: 0 })
        );
        assert!(board.cell(0, 7).is_err());
        assert!(board.row(6).is_err());
    }

    #[test]
    fn test_column_is_top_to_bottom() {
        let mut board = Board::standard();
        board.play(2, Player::Red).unwrap();
        board.play(2, Player::Yellow).unwrap();
        let column = board.column(2).unwrap();
        assert_eq!(column.len(), ROWS);
        assert_eq!(column[5], Cell::Red);
        assert_eq!(column[4], Cell::Yellow);
        assert!(column[..4].iter().all(|&c| c == Cell::Empty));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::standard();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.play(col, Player::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.playable_columns().is_empty());
    }

    #[test]
    fn test_empty_board_has_no_line() {
        let board = Board::standard();
        assert!(!board.has_line(4));
        assert!(!board.has_winning_line());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::standard();
        for col in 0..4 {
            board.play(col, Player::Red).unwrap();
        }
        assert!(board.check_win(5, 2));
        assert!(board.has_line(4));
        assert_eq!(board.winner(), Some(Player::Red));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::standard();
        for _ in 0..4 {
            board.play(3, Player::Yellow).unwrap();
        }
        assert!(board.check_win(2, 3));
        assert!(board.has_winning_line());
        assert_eq!(board.winner(), Some(Player::Yellow));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::standard();
        // `/` pattern
        board.play(0, Player::Red).unwrap();

        board.play(1, Player::Yellow).unwrap();
        board.play(1, Player::Red).unwrap();

        board.play(2, Player::Yellow).unwrap();
        board.play(2, Player::Yellow).unwrap();
        board.play(2, Player::Red).unwrap();

        board.play(3, Player::Yellow).unwrap();
        board.play(3, Player::Yellow).unwrap();
        board.play(3, Player::Yellow).unwrap();
        let row = board.play(3, Player::Red).unwrap();

        assert!(board.check_win(row, 3));
        assert_eq!(board.winner(), Some(Player::Red));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::standard();
        // `\` pattern
        board.play(6, Player::Red).unwrap();

        board.play(5, Player::Yellow).unwrap();
        board.play(5, Player::Red).unwrap();

        board.play(4, Player::Yellow).unwrap();
        board.play(4, Player::Yellow).unwrap();
        board.play(4, Player::Red).unwrap();

        board.play(3, Player::Yellow).unwrap();
        board.play(3, Player::Yellow).unwrap();
        board.play(3, Player::Yellow).unwrap();
        let row = board.play(3, Player::Red).unwrap();

        assert!(board.check_win(row, 3));
        assert_eq!(board.winner(), Some(Player::Red));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::standard();
        for col in 0..3 {
            board.play(col, Player::Red).unwrap();
        }
        assert!(!board.check_win(5, 1));
        assert!(!board.has_line(4));
        assert!(board.has_line(3));
    }

    #[test]
    fn test_mixed_colors_do_not_form_a_line() {
        let mut board = Board::standard();
        board.play(0, Player::Red).unwrap();
        board.play(1, Player::Red).unwrap();
        board.play(2, Player::Yellow).unwrap();
        board.play(3, Player::Red).unwrap();
        assert!(!board.has_winning_line());
    }

    #[test]
    fn test_custom_win_length() {
        let mut board = Board::new(4, 5, 3).unwrap();
        for col in 1..4 {
            board.play(col, Player::Yellow).unwrap();
        }
        assert_eq!(board.winner(), Some(Player::Yellow));
        assert!(board.check_win(3, 2));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = Board::standard();
        board.play(3, Player::Red).unwrap();
        let mut copy = board.clone();
        copy.play(3, Player::Yellow).unwrap();
        copy.play(0, Player::Yellow).unwrap();
        assert_eq!(board.cell(4, 3).unwrap(), Cell::Empty);
        assert_eq!(board.cell(5, 0).unwrap(), Cell::Empty);
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(2, 3, 2).unwrap();
        board.play(0, Player::Red).unwrap();
        board.play(2, Player::Yellow).unwrap();
        assert_eq!(board.to_string(), ". . .\nR . Y");
    }
}
