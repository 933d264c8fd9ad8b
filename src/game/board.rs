use std::fmt;

use super::PlayerId;
use crate::error::{BoardError, MoveError};

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;
pub const DEFAULT_RUN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player(PlayerId),
}

/// A `rows x cols` grid of cells plus the run length needed to win.
///
/// Row 0 is the bottom. Pieces only enter through [`Board::drop_piece`], so
/// the occupied cells of every column always form a contiguous run from
/// row 0 upward.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    run_length: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize, run_length: usize) -> Result<Self, BoardError> {
        let invalid = BoardError::InvalidDimensions {
            rows,
            cols,
            run_length,
        };
        if rows == 0 || cols == 0 || run_length == 0 {
            return Err(invalid);
        }
        let size = rows.checked_mul(cols).ok_or(invalid)?;
        Ok(Board {
            rows,
            cols,
            run_length,
            cells: vec![Cell::Empty; size],
        })
    }

    /// The classic 6x7 board, four in a row to win.
    pub fn standard() -> Self {
        Board {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            run_length: DEFAULT_RUN_LENGTH,
            cells: vec![Cell::Empty; DEFAULT_ROWS * DEFAULT_COLS],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// Get the cell at a specific position, `None` when off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    fn check_column(&self, col: usize) -> Result<(), MoveError> {
        if col < self.cols {
            Ok(())
        } else {
            Err(MoveError::InvalidColumn {
                column: col,
                cols: self.cols,
            })
        }
    }

    /// True iff the topmost cell of `col` is empty.
    pub fn is_column_playable(&self, col: usize) -> Result<bool, MoveError> {
        self.check_column(col)?;
        Ok(self.cells[(self.rows - 1) * self.cols + col] == Cell::Empty)
    }

    /// Scan upward from row 0 for the first empty cell in `col`.
    pub fn lowest_open_row(&self, col: usize) -> Result<usize, MoveError> {
        self.check_column(col)?;
        (0..self.rows)
            .find(|&row| self.cells[row * self.cols + col] == Cell::Empty)
            .ok_or(MoveError::ColumnFull(col))
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: PlayerId) -> Result<usize, MoveError> {
        let row = self.lowest_open_row(col)?;
        self.cells[row * self.cols + col] = Cell::Player(player);
        Ok(row)
    }

    /// Playable columns in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        let top = (self.rows - 1) * self.cols;
        (0..self.cols)
            .filter(|&col| self.cells[top + col] == Cell::Empty)
            .collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        let top = (self.rows - 1) * self.cols;
        self.cells[top..].iter().all(|&c| c != Cell::Empty)
    }

    /// An empty board of the same shape.
    pub fn cleared(&self) -> Board {
        Board {
            rows: self.rows,
            cols: self.cols,
            run_length: self.run_length,
            cells: vec![Cell::Empty; self.rows * self.cols],
        }
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(2 * self.cols + 1);
        writeln!(f, "{rule}")?;
        for row in (0..self.rows).rev() {
            let line: Vec<String> = (0..self.cols)
                .map(|col| match self.cells[row * self.cols + col] {
                    Cell::Empty => ".".to_string(),
                    Cell::Player(p) => p.glyph().to_string(),
                })
                .collect();
            writeln!(f, "|{}|", line.join(" "))?;
        }
        write!(f, "{rule}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const RED: PlayerId = PlayerId::FIRST;
    const YELLOW: PlayerId = PlayerId::SECOND;

    fn assert_gravity(board: &Board) {
        for col in 0..board.cols() {
            let mut seen_empty = false;
            for row in 0..board.rows() {
                match board.cell(row, col) {
                    Some(Cell::Empty) => seen_empty = true,
                    Some(Cell::Player(_)) => {
                        assert!(!seen_empty, "floating piece at ({row}, {col})")
                    }
                    None => unreachable!(),
                }
            }
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::standard();
        for row in 0..DEFAULT_ROWS {
            for col in 0..DEFAULT_COLS {
                assert_eq!(board.cell(row, col), Some(Cell::Empty));
            }
        }
        assert_eq!(board.piece_count(), 0);
        assert_eq!(board.legal_moves(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(Board::new(0, 7, 4).is_err());
        assert!(Board::new(6, 0, 4).is_err());
        assert_eq!(
            Board::new(6, 7, 0),
            Err(BoardError::InvalidDimensions {
                rows: 6,
                cols: 7,
                run_length: 0
            })
        );
    }

    #[test]
    fn test_rejects_overflowing_dimensions() {
        assert_eq!(
            Board::new(usize::MAX, 2, 4),
            Err(BoardError::InvalidDimensions {
                rows: usize::MAX,
                cols: 2,
                run_length: 4
            })
        );
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::standard();

        // Drop first piece in column 3
        let row = board.drop_piece(3, RED).unwrap();
        assert_eq!(row, 0); // Should land at bottom
        assert_eq!(board.cell(0, 3), Some(Cell::Player(RED)));

        // Drop second piece in same column
        let row = board.drop_piece(3, YELLOW).unwrap();
        assert_eq!(row, 1); // Should land on top of first piece
        assert_eq!(board.cell(1, 3), Some(Cell::Player(YELLOW)));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::standard();

        // Fill column 0
        for _ in 0..DEFAULT_ROWS {
            board.drop_piece(0, RED).unwrap();
        }

        assert_eq!(board.is_column_playable(0), Ok(false));
        assert_eq!(board.lowest_open_row(0), Err(MoveError::ColumnFull(0)));
        let before = board.clone();
        assert_eq!(board.drop_piece(0, YELLOW), Err(MoveError::ColumnFull(0)));
        assert_eq!(board, before);
        assert_eq!(board.legal_moves(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::standard();
        let err = MoveError::InvalidColumn { column: 7, cols: 7 };
        assert_eq!(board.drop_piece(7, RED), Err(err.clone()));
        assert_eq!(board.is_column_playable(7), Err(err.clone()));
        assert_eq!(board.lowest_open_row(7), Err(err));
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::standard();
        for col in 0..DEFAULT_COLS {
            assert!(!board.is_full());
            for _ in 0..DEFAULT_ROWS {
                board.drop_piece(col, RED).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = Board::standard();
        board.drop_piece(2, RED).unwrap();
        let snapshot = board.clone();
        board.drop_piece(2, YELLOW).unwrap();
        assert_eq!(snapshot.cell(1, 2), Some(Cell::Empty));
        assert_eq!(snapshot.piece_count(), 1);
        assert_eq!(board.piece_count(), 2);
    }

    #[test]
    fn test_gravity_holds_for_random_drops() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let mut board = Board::new(5, 4, 3).unwrap();
            for turn in 0..40u8 {
                let col = rng.random_range(0..board.cols());
                let _ = board.drop_piece(col, PlayerId::new(turn % 2));
                assert_gravity(&board);
            }
        }
    }

    #[test]
    fn test_playable_iff_drop_succeeds() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = Board::new(3, 4, 3).unwrap();
        for _ in 0..30 {
            let col = rng.random_range(0..board.cols());
            let playable = board.is_column_playable(col).unwrap();
            let mut probe = board.clone();
            assert_eq!(playable, probe.drop_piece(col, RED).is_ok());
            let _ = board.drop_piece(col, YELLOW);
        }
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(2, 3, 2).unwrap();
        board.drop_piece(0, RED).unwrap();
        board.drop_piece(0, YELLOW).unwrap();
        board.drop_piece(2, RED).unwrap();
        assert_eq!(board.to_string(), "=======\n|O . .|\n|X . X|\n=======");
    }
}
