use super::minimax::SearchEngine;
use crate::error::SearchError;
use crate::game::{Board, PlayerId};

/// Anything that can choose a column for a player.
pub trait Agent {
    /// Select a column for `me` on `board`. Fails only when no column is
    /// playable.
    fn select_column(
        &mut self,
        board: &Board,
        me: PlayerId,
        opponent: PlayerId,
    ) -> Result<usize, SearchError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Plays the move the search engine recommends at a fixed depth.
pub struct SearchAgent {
    engine: SearchEngine,
    depth: usize,
}

impl SearchAgent {
    pub fn new(depth: usize) -> Self {
        SearchAgent {
            engine: SearchEngine::new(),
            depth,
        }
    }

    pub fn with_engine(engine: SearchEngine, depth: usize) -> Self {
        SearchAgent { engine, depth }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Agent for SearchAgent {
    fn select_column(
        &mut self,
        board: &Board,
        me: PlayerId,
        opponent: PlayerId,
    ) -> Result<usize, SearchError> {
        self.engine
            .best_move(board, me, opponent, self.depth)
            .map(|best| best.column)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
