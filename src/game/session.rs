use tracing::{debug, info};

use super::{Alignment, AlignmentDetector, Board, PlayerId};
use crate::error::{BoardError, MoveError, SessionError};

pub const DEFAULT_PLAYERS: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
    Drawn,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub player: PlayerId,
    pub column: usize,
    pub row: usize,
    /// Status after the move: `Won(player)`, `Drawn` or `InProgress`.
    pub status: GameStatus,
}

/// Turn order, the live board and the terminal status of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    players: u8,
    current_player: PlayerId,
    turn: usize,
    status: GameStatus,
}

impl GameSession {
    /// Two-player game on an empty `rows x cols` board.
    pub fn new(rows: usize, cols: usize, run_length: usize) -> Result<Self, BoardError> {
        Self::with_players(rows, cols, run_length, DEFAULT_PLAYERS)
    }

    pub fn with_players(
        rows: usize,
        cols: usize,
        run_length: usize,
        players: u8,
    ) -> Result<Self, BoardError> {
        if players == 0 {
            return Err(BoardError::InvalidPlayerCount(players));
        }
        let board = Board::new(rows, cols, run_length)?;
        Ok(GameSession {
            board,
            players,
            current_player: PlayerId::FIRST,
            turn: 0,
            status: GameStatus::InProgress,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn player_count(&self) -> u8 {
        self.players
    }

    /// Number of moves applied so far.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Drop a piece for the current player. Rejected moves leave the session
    /// untouched; the turn only passes on if the game is still running.
    pub fn apply_move(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player)?;
        self.turn += 1;

        let run_length = self.board.run_length();
        self.status = if AlignmentDetector::has_alignment(&self.board, player, run_length) {
            GameStatus::Won(player)
        } else if self.board.is_full() {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        };

        debug!(player = %player, column, row, turn = self.turn, "move applied");
        match self.status {
            GameStatus::InProgress => self.current_player = player.next(self.players),
            GameStatus::Won(winner) => info!(winner = %winner, turn = self.turn, "game won"),
            GameStatus::Drawn => info!(turn = self.turn, "game drawn"),
        }

        Ok(MoveOutcome {
            player,
            column,
            row,
            status: self.status,
        })
    }

    /// Alignments of the winner, for highlighting. Empty unless won.
    pub fn winning_alignments(&self) -> Vec<Alignment> {
        match self.status {
            GameStatus::Won(p) => {
                AlignmentDetector::find_alignments(&self.board, p, self.board.run_length())
            }
            _ => Vec::new(),
        }
    }

    /// Independent copy of the current board.
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Replace the board with `board` and resume with `player` to move.
    ///
    /// Turn ownership cannot be read off the board, so the caller supplies it.
    /// The status and turn counter are recomputed from the restored board.
    pub fn restore(&mut self, board: Board, player: PlayerId) -> Result<(), SessionError> {
        if player.index() >= self.players as usize {
            return Err(SessionError::UnknownPlayer {
                player,
                players: self.players,
            });
        }

        let run_length = board.run_length();
        let winner = (0..self.players)
            .map(PlayerId::new)
            .find(|&p| AlignmentDetector::has_alignment(&board, p, run_length));
        self.status = match winner {
            Some(p) => GameStatus::Won(p),
            None if board.is_full() => GameStatus::Drawn,
            None => GameStatus::InProgress,
        };
        self.turn = board.piece_count();
        self.board = board;
        self.current_player = player;
        debug!(player = %player, turn = self.turn, status = ?self.status, "session restored");
        Ok(())
    }

    /// Start a new game on an empty board of the same shape.
    pub fn reset(&mut self) {
        self.board = self.board.cleared();
        self.current_player = PlayerId::FIRST;
        self.turn = 0;
        self.status = GameStatus::InProgress;
    }
}
