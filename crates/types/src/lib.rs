//! Core types module - shared data structures and constants
//!
//! Pure data with no external dependencies, usable from core logic, input
//! mapping, and rendering alike.
//!
//! # Board dimensions
//!
//! The board size is chosen at setup; both dimensions must fall in
//! `[MIN_DIM, MAX_DIM]` (6-15). The classic game is 6 rows x 7 columns,
//! which is also the default.
//!
//! # Players
//!
//! A game has 2 to 10 players. The core identifies a player only by an
//! opaque [`Owner`] token; names, glyphs and colors are a rendering-side
//! mapping keyed off the owner's roster index.

use std::error::Error;
use std::fmt;

/// Smallest accepted board dimension (rows or columns).
pub const MIN_DIM: u8 = 6;

/// Largest accepted board dimension (rows or columns).
pub const MAX_DIM: u8 = 15;

/// Default board height (classic 6 rows).
pub const DEFAULT_ROWS: u8 = 6;

/// Default board width (classic 7 columns).
pub const DEFAULT_COLS: u8 = 7;

/// Run length that wins the game.
pub const WIN_RUN: usize = 4;

/// Smallest accepted roster size.
pub const MIN_PLAYERS: u8 = 2;

/// Largest accepted roster size.
pub const MAX_PLAYERS: u8 = 10;

/// Opaque token identifying which player occupies a cell.
///
/// The core only ever compares owners for equality. The wrapped value is
/// the player's position in turn order, starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Owner(u8);

impl Owner {
    pub const fn new(index: u8) -> Self {
        Owner(index)
    }

    /// Position in turn order (0-based).
    pub const fn index(self) -> u8 {
        self.0
    }
}

/// A board cell (`None` = empty, `Some` = occupied by that owner).
pub type Cell = Option<Owner>;

/// Actions a player can take at the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the column cursor one column left.
    MoveLeft,
    /// Move the column cursor one column right.
    MoveRight,
    /// Drop a disc into the cursor column.
    Drop,
    /// Drop a disc into a specific 1-based column.
    SelectColumn(u8),
    /// Start a fresh game with the same setup.
    Restart,
}

/// Board construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Rows or columns outside the accepted `[MIN_DIM, MAX_DIM]` range.
    InvalidDimensions { rows: u8, cols: u8 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimensions { rows, cols } => write!(
                f,
                "invalid grid dimensions {rows}x{cols}: both must be in {MIN_DIM}..={MAX_DIM}"
            ),
        }
    }
}

impl Error for GridError {}
