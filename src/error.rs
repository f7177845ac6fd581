//! Error types for the engine and the session on top of it.

use thiserror::Error;

use crate::cell::Cell;

/// A move string that does not name a move on this board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty move")]
    Empty,

    #[error("'{0}' is not a column letter")]
    InvalidColumn(char),

    #[error("'{0}' is not a row number")]
    InvalidRow(String),

    /// Anything after the row other than a single `h` or `v`.
    #[error("unknown move suffix '{0}' (expected 'h', 'v' or nothing)")]
    UnknownSuffix(String),

    #[error("{notation} is outside the {width}x{height} board")]
    OutOfBounds {
        notation: String,
        width: usize,
        height: usize,
    },
}

/// Board parameters that cannot be set up.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board must be at least 2x2, got {width}x{height}")]
    BoardTooSmall { width: usize, height: usize },

    /// Columns are named by a single letter.
    #[error("board can be at most 26 columns wide, got {0}")]
    BoardTooWide(usize),

    #[error("{0} fences cannot be split evenly between two players")]
    OddFenceTotal(usize),
}

/// A move that breaks the rules. Returned as a value, never as a failure of
/// the engine itself: the board is left untouched and the same player may
/// try again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    /// Only reachable with hand-built moves; parsing already rejects these.
    #[error("{cell} is not on the board")]
    OffBoard { cell: Cell },

    #[error("pawn cannot move from {from} to {to}")]
    UnreachableSquare { from: Cell, to: Cell },

    #[error("player {player} has no fences left")]
    NoFencesLeft { player: usize },

    #[error("a fence is already anchored there")]
    DuplicateFence,

    #[error("fence would overlap an existing fence")]
    OverlappingFence,

    #[error("fence would cut player {player} off from their goal")]
    TrapsPlayer { player: usize },
}

/// A session operation that was called in the wrong state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("the game has not started")]
    NotStarted,

    #[error("the game is over, player {winner} won")]
    Finished { winner: usize },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
