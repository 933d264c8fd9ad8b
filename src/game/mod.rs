//! Core game logic: board, players, alignment scanning and the turn-taking
//! session, plus an undo/redo history for callers that keep one.

mod alignment;
mod board;
mod history;
mod player;
mod session;

pub use alignment::{Alignment, AlignmentDetector, Direction};
pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_RUN_LENGTH};
pub use history::History;
pub use player::PlayerId;
pub use session::{GameSession, GameStatus, MoveOutcome, DEFAULT_PLAYERS};
