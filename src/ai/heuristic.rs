use crate::game::{Board, Cell, Direction, PlayerId};

/// Trait for evaluating a leaf position from a player's perspective.
///
/// The search engine only consults a heuristic once it has ruled out an
/// immediate win for either side, so implementations score quiet positions.
pub trait Heuristic: Send + Sync {
    fn evaluate(&self, board: &Board, player: PlayerId, opponent: PlayerId) -> i32;
}

/// Scores every quiet position as even.
pub struct NeutralHeuristic;

impl Heuristic for NeutralHeuristic {
    fn evaluate(&self, _board: &Board, _player: PlayerId, _opponent: PlayerId) -> i32 {
        0
    }
}

/// Scans every `run_length` window and scores near-complete runs.
pub struct WindowHeuristic;

impl WindowHeuristic {
    fn score_window(run_length: usize, own: usize, opp: usize, empty: usize) -> i32 {
        if run_length < 2 {
            return 0;
        }
        let pair_rule = run_length >= 3 && empty == 2;
        if own == run_length - 1 && empty == 1 {
            50
        } else if pair_rule && own == run_length - 2 {
            10
        } else if opp == run_length - 1 && empty == 1 {
            -80
        } else if pair_rule && opp == run_length - 2 {
            -10
        } else {
            0
        }
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: PlayerId, opponent: PlayerId) -> i32 {
        let own_cell = Cell::Player(player);
        let opp_cell = Cell::Player(opponent);
        let k = board.run_length();
        let mut score = 0;

        // Center column bonus
        let center = board.cols() / 2;
        for row in 0..board.rows() {
            match board.cell(row, center) {
                Some(c) if c == own_cell => score += 3,
                Some(c) if c == opp_cell => score -= 3,
                _ => {}
            }
        }

        for row in 0..board.rows() {
            for col in 0..board.cols() {
                for dir in Direction::ALL {
                    let (dr, dc) = dir.step();
                    let last_row = row as isize + dr * (k as isize - 1);
                    let last_col = col as isize + dc * (k as isize - 1);
                    if last_row < 0 || last_col < 0 {
                        continue;
                    }
                    if board.cell(last_row as usize, last_col as usize).is_none() {
                        continue;
                    }

                    let (mut own, mut opp, mut empty) = (0, 0, 0);
                    for i in 0..k as isize {
                        let r = (row as isize + dr * i) as usize;
                        let c = (col as isize + dc * i) as usize;
                        match board.cell(r, c) {
                            Some(Cell::Empty) => empty += 1,
                            Some(c) if c == own_cell => own += 1,
                            Some(c) if c == opp_cell => opp += 1,
                            _ => {}
                        }
                    }
                    score += Self::score_window(k, own, opp, empty);
                }
            }
        }

        score
    }
}
