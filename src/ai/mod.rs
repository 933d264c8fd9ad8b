mod agent;
mod heuristic;
mod minimax;
mod random;

pub use agent::{Agent, SearchAgent};
pub use heuristic::{Heuristic, NeutralHeuristic, WindowHeuristic};
pub use minimax::{BestMove, SearchEngine, LOSS_NEXT_PLY, WIN_SCORE};
pub use random::RandomAgent;
