use super::{Board, Cell, PlayerId};

/// The four axis directions an alignment can run in, as `(row, col)` steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// `run_length` collinear `(row, col)` coordinates all held by `player`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alignment {
    pub player: PlayerId,
    pub direction: Direction,
    pub cells: Vec<(usize, usize)>,
}

/// Scans boards for runs of one player's pieces.
///
/// Every occupied cell is tried as a starting point in every direction, in
/// row-major then direction order, so results are stable for a given board.
pub struct AlignmentDetector;

impl AlignmentDetector {
    /// True as soon as any run of `run_length` cells held by `player` is found.
    /// A zero run length never matches.
    pub fn has_alignment(board: &Board, player: PlayerId, run_length: usize) -> bool {
        if run_length == 0 {
            return false;
        }
        Self::starts(board, player).any(|(row, col)| {
            Direction::ALL
                .iter()
                .any(|&dir| Self::run_from(board, player, row, col, dir) >= run_length)
        })
    }

    /// Every winning run of `player`. Longer runs yield one entry per
    /// starting cell, so a run of five at `run_length` four gives two.
    pub fn find_alignments(board: &Board, player: PlayerId, run_length: usize) -> Vec<Alignment> {
        let mut found = Vec::new();
        if run_length == 0 {
            return found;
        }
        for (row, col) in Self::starts(board, player) {
            for dir in Direction::ALL {
                if Self::run_from(board, player, row, col, dir) >= run_length {
                    let (dr, dc) = dir.step();
                    let cells = (0..run_length)
                        .map(|i| {
                            let i = i as isize;
                            (
                                (row as isize + dr * i) as usize,
                                (col as isize + dc * i) as usize,
                            )
                        })
                        .collect();
                    found.push(Alignment {
                        player,
                        direction: dir,
                        cells,
                    });
                }
            }
        }
        found
    }

    /// Would `player` complete a run by dropping into `col`? Off-board or
    /// full columns are never winning.
    pub fn is_winning_drop(board: &Board, col: usize, player: PlayerId) -> bool {
        let mut probe = board.clone();
        match probe.drop_piece(col, player) {
            Ok(_) => Self::has_alignment(&probe, player, probe.run_length()),
            Err(_) => false,
        }
    }

    /// Columns in which `player` could win right now, ascending.
    pub fn winning_drops(board: &Board, player: PlayerId) -> Vec<usize> {
        board
            .legal_moves()
            .into_iter()
            .filter(|&col| Self::is_winning_drop(board, col, player))
            .collect()
    }

    fn starts(board: &Board, player: PlayerId) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..board.rows())
            .flat_map(move |row| (0..board.cols()).map(move |col| (row, col)))
            .filter(move |&(row, col)| board.cell(row, col) == Some(Cell::Player(player)))
    }

    /// Count of consecutive `player` cells from `(row, col)` along `dir`.
    fn run_from(board: &Board, player: PlayerId, row: usize, col: usize, dir: Direction) -> usize {
        let (dr, dc) = dir.step();
        let mut count = 0;
        let (mut r, mut c) = (row as isize, col as isize);
        while r >= 0 && c >= 0 {
            match board.cell(r as usize, c as usize) {
                Some(Cell::Player(p)) if p == player => count += 1,
                _ => break,
            }
            r += dr;
            c += dc;
        }
        count
    }
}
