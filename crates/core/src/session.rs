//! Session: explicit game state owned by the orchestrator.
//!
//! Holds the grid, the roster size, whose turn it is, and the outcome once
//! the game ends. A rejected move leaves every piece of state untouched and
//! it stays the same player's turn; the session never blocks or retries.

use std::error::Error;
use std::fmt;

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::win::check_winner;
use tui_connect_types::{GridError, Owner, MAX_DIM, MAX_PLAYERS, MIN_PLAYERS};

/// 1-based columns that can still accept a drop, without allocating.
pub type ColumnList = ArrayVec<u8, { MAX_DIM as usize }>;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Owner),
    Draw,
}

/// Session construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    Grid(GridError),
    /// Roster size outside `[MIN_PLAYERS, MAX_PLAYERS]`.
    InvalidPlayerCount(u8),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::Grid(err) => err.fmt(f),
            SetupError::InvalidPlayerCount(n) => write!(
                f,
                "invalid player count {n}: must be in {MIN_PLAYERS}..={MAX_PLAYERS}"
            ),
        }
    }
}

impl Error for SetupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SetupError::Grid(err) => Some(err),
            SetupError::InvalidPlayerCount(_) => None,
        }
    }
}

impl From<GridError> for SetupError {
    fn from(err: GridError) -> Self {
        SetupError::Grid(err)
    }
}

/// Why a move was rejected. All of these are routine during play and leave
/// the session unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    InvalidColumn,
    ColumnFull,
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MoveError::InvalidColumn => "column number out of range",
            MoveError::ColumnFull => "column is full",
            MoveError::GameOver => "game is already over",
        })
    }
}

impl Error for MoveError {}

/// One game from setup to win or draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    grid: Grid,
    player_count: u8,
    current: u8,
    outcome: Option<Outcome>,
}

impl Session {
    /// Create a session with an empty grid and the first player to move.
    ///
    /// Dimensions are validated by [`Grid::new`]; the roster size must be
    /// within `[MIN_PLAYERS, MAX_PLAYERS]`.
    pub fn new(rows: u8, cols: u8, players: u8) -> Result<Self, SetupError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
            return Err(SetupError::InvalidPlayerCount(players));
        }
        Ok(Self {
            grid: Grid::new(rows, cols)?,
            player_count: players,
            current: 0,
            outcome: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player_count(&self) -> u8 {
        self.player_count
    }

    /// Whose turn it is. Once a game is won this stays on the winner.
    pub fn current_player(&self) -> Owner {
        Owner::new(self.current)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Columns that can still accept a drop (1-based); empty once terminal.
    pub fn legal_columns(&self) -> ColumnList {
        let mut columns = ColumnList::new();
        if self.is_terminal() {
            return columns;
        }
        for column in 1..=self.grid.cols() {
            if !self.grid.is_column_full(column) {
                columns.push(column);
            }
        }
        columns
    }

    /// Drop the current player's disc into a 1-based column.
    ///
    /// On success returns the landing `(row, col)`, records a win or draw
    /// if the move ended the game, and otherwise passes the turn.
    pub fn try_drop(&mut self, column: u8) -> Result<(u8, u8), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let owner = self.current_player();
        let (row, col) = match self.grid.drop_disc(column, owner) {
            Some(pos) => pos,
            None if !self.grid.is_column_valid(column) => return Err(MoveError::InvalidColumn),
            None => return Err(MoveError::ColumnFull),
        };

        if check_winner(&self.grid, row, col, owner) {
            self.outcome = Some(Outcome::Winner(owner));
        } else if self.grid.is_board_full() {
            self.outcome = Some(Outcome::Draw);
        } else {
            self.current = (self.current + 1) % self.player_count;
        }

        Ok((row, col))
    }

    /// Fresh grid, same dimensions and roster; the first player starts.
    pub fn reset(&mut self) {
        let Ok(grid) = Grid::new(self.grid.rows(), self.grid.cols()) else {
            unreachable!("dimensions validated at construction")
        };
        self.grid = grid;
        self.current = 0;
        self.outcome = None;
    }
}
