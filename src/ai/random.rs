use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::agent::Agent;
use crate::error::SearchError;
use crate::game::{Board, PlayerId};

/// An agent that selects uniformly at random from legal columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible agent for tests and benchmarks.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(
        &mut self,
        board: &Board,
        _me: PlayerId,
        _opponent: PlayerId,
    ) -> Result<usize, SearchError> {
        let columns = board.legal_moves();
        if columns.is_empty() {
            return Err(SearchError::NoMoveAvailable);
        }
        let idx = self.rng.random_range(0..columns.len());
        Ok(columns[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}
