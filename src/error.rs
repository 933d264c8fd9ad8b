use std::path::PathBuf;

use crate::game::PlayerId;

/// Errors raised when a piece cannot be dropped.
///
/// None of these change any state: the board and session are left exactly as
/// they were before the rejected call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {cols} columns)")]
    InvalidColumn { column: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is over")]
    GameOver,
}

/// Errors that can occur when building a board or a game on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {rows}x{cols} with run length {run_length}")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        run_length: usize,
    },

    #[error("a game needs at least one player, got {0}")]
    InvalidPlayerCount(u8),
}

/// Errors raised by session bookkeeping other than moves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("player {player} does not exist in a {players}-player game")]
    UnknownPlayer { player: PlayerId, players: u8 },
}

/// Errors returned by the search engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no move available: the board is full")]
    NoMoveAvailable,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::InvalidColumn { column: 9, cols: 7 };
        assert_eq!(
            err.to_string(),
            "column 9 is out of range (board has 7 columns)"
        );
        assert_eq!(MoveError::ColumnFull(3).to_string(), "column 3 is full");
    }

    #[test]
    fn test_board_error_display() {
        assert_eq!(
            BoardError::InvalidPlayerCount(0).to_string(),
            "a game needs at least one player, got 0"
        );
    }

    #[test]
    fn test_session_error_display() {
        let err = SessionError::UnknownPlayer {
            player: PlayerId::new(4),
            players: 2,
        };
        assert_eq!(
            err.to_string(),
            "player 4 does not exist in a 2-player game"
        );
    }

    #[test]
    fn test_search_error_display() {
        assert_eq!(
            SearchError::NoMoveAvailable.to_string(),
            "no move available: the board is full"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.rows must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.rows must be >= 1"
        );
    }
}
