use rayon::prelude::*;
use tracing::{debug, instrument, trace};

use super::heuristic::{Heuristic, NeutralHeuristic, WindowHeuristic};
use crate::config::{HeuristicKind, SearchConfig};
use crate::error::SearchError;
use crate::game::{AlignmentDetector, Board, PlayerId};

/// Score of a move that wins on the spot.
pub const WIN_SCORE: i32 = 1_000_000;

/// Score of a move after which the opponent can win immediately.
pub const LOSS_NEXT_PLY: i32 = -(WIN_SCORE - 1);

/// Leaf heuristics are clamped to this magnitude so they never rival a
/// forced result.
const HEURISTIC_LIMIT: i32 = WIN_SCORE / 2;

/// The chosen column and its score from the mover's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMove {
    pub column: usize,
    pub score: i32,
}

/// Depth-bounded minimax with a win-now shortcut.
///
/// Scores are negamax style: a child's score is negated for the parent and
/// moved one point toward zero per ply, so quicker wins and slower losses are
/// preferred. Ties always go to the lowest column.
pub struct SearchEngine {
    heuristic: Box<dyn Heuristic>,
    parallel: bool,
}

impl SearchEngine {
    pub fn new() -> Self {
        SearchEngine {
            heuristic: Box::new(NeutralHeuristic),
            parallel: false,
        }
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic>) -> Self {
        SearchEngine {
            heuristic,
            parallel: false,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        let heuristic: Box<dyn Heuristic> = match config.heuristic {
            HeuristicKind::Neutral => Box::new(NeutralHeuristic),
            HeuristicKind::Window => Box::new(WindowHeuristic),
        };
        Self::with_heuristic(heuristic).parallel(config.parallel)
    }

    /// Evaluate root candidates on the rayon pool. Results are identical to
    /// the sequential search.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Pick the best column for `moving`, looking `depth` plies past the
    /// candidate move.
    #[instrument(level = "debug", skip(self, board), fields(rows = board.rows(), cols = board.cols()))]
    pub fn best_move(
        &self,
        board: &Board,
        moving: PlayerId,
        opponent: PlayerId,
        depth: usize,
    ) -> Result<BestMove, SearchError> {
        let legal = board.legal_moves();
        if legal.is_empty() {
            return Err(SearchError::NoMoveAvailable);
        }

        if let Some(column) = Self::immediate_win(board, &legal, moving) {
            debug!(column, "winning move available");
            return Ok(BestMove {
                column,
                score: WIN_SCORE,
            });
        }

        let scored: Vec<(usize, i32)> = if self.parallel {
            legal
                .par_iter()
                .filter_map(|&col| {
                    self.score_move(board, col, moving, opponent, depth)
                        .map(|score| (col, score))
                })
                .collect()
        } else {
            legal
                .iter()
                .filter_map(|&col| {
                    self.score_move(board, col, moving, opponent, depth)
                        .map(|score| (col, score))
                })
                .collect()
        };

        for &(column, score) in &scored {
            trace!(column, score, "candidate scored");
        }
        let best = Self::pick(&scored).ok_or(SearchError::NoMoveAvailable)?;
        debug!(column = best.column, score = best.score, "search complete");
        Ok(best)
    }

    /// Best score for `moving`, or `None` if the board is full.
    fn negamax(
        &self,
        board: &Board,
        moving: PlayerId,
        opponent: PlayerId,
        depth: usize,
    ) -> Option<i32> {
        let legal = board.legal_moves();
        if legal.is_empty() {
            return None;
        }
        if Self::immediate_win(board, &legal, moving).is_some() {
            return Some(WIN_SCORE);
        }

        legal
            .iter()
            .filter_map(|&col| self.score_move(board, col, moving, opponent, depth))
            .max()
    }

    /// Score of dropping into `col`, given that no column wins immediately.
    fn score_move(
        &self,
        board: &Board,
        col: usize,
        moving: PlayerId,
        opponent: PlayerId,
        depth: usize,
    ) -> Option<i32> {
        let mut next = board.clone();
        next.drop_piece(col, moving).ok()?;

        let score = if depth == 0 {
            self.leaf(&next, moving, opponent)
        } else {
            match self.negamax(&next, opponent, moving, depth - 1) {
                Some(reply) => toward_zero(-reply),
                // Board filled up: a draw
                None => 0,
            }
        };
        Some(score)
    }

    fn leaf(&self, board: &Board, moving: PlayerId, opponent: PlayerId) -> i32 {
        let legal = board.legal_moves();
        if Self::immediate_win(board, &legal, opponent).is_some() {
            LOSS_NEXT_PLY
        } else {
            self.heuristic
                .evaluate(board, moving, opponent)
                .clamp(-HEURISTIC_LIMIT, HEURISTIC_LIMIT)
        }
    }

    fn immediate_win(board: &Board, legal: &[usize], player: PlayerId) -> Option<usize> {
        legal
            .iter()
            .copied()
            .find(|&col| AlignmentDetector::is_winning_drop(board, col, player))
    }

    /// Highest score, first (lowest) column on ties. Expects ascending columns.
    fn pick(scored: &[(usize, i32)]) -> Option<BestMove> {
        let mut best: Option<BestMove> = None;
        for &(column, score) in scored {
            if best.is_none_or(|b| score > b.score) {
                best = Some(BestMove { column, score });
            }
        }
        best
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn toward_zero(score: i32) -> i32 {
    score - score.signum()
}
