use std::fmt;

/// Identifier of a player. The classic game has two: 0 (Red) and 1 (Yellow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(u8);

impl PlayerId {
    pub const FIRST: PlayerId = PlayerId(0);
    pub const SECOND: PlayerId = PlayerId(1);

    pub const fn new(id: u8) -> Self {
        PlayerId(id)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The player who moves after this one in a round-robin of `players`.
    pub fn next(self, players: u8) -> PlayerId {
        PlayerId((self.0 + 1) % players)
    }

    /// Get player name for display
    pub fn name(self) -> String {
        match self.0 {
            0 => "Red".to_string(),
            1 => "Yellow".to_string(),
            n => format!("Player {n}"),
        }
    }

    /// Single-character glyph used when printing a board.
    pub fn glyph(self) -> char {
        const GLYPHS: &[u8] = b"XOABCDEFGHIJKLMNPQRSTUVWYZ";
        GLYPHS.get(self.index()).map_or('?', |&g| g as char)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
