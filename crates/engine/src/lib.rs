//! Move application layer: turns [`GameAction`]s into session calls.
//!
//! [`MatchControl`] owns the column cursor players steer with the arrow
//! keys. Rejected moves come back as [`MoveRejected`] with stable
//! code/message strings the status line can show; the session is never
//! touched on rejection.

use tui_connect_core::{MoveError, Session};
use tui_connect_types::GameAction;

/// What an accepted action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Cursor moved to a new 1-based column.
    CursorMoved(u8),
    /// Disc landed at 0-based `(row, col)`.
    Dropped { row: u8, col: u8 },
    /// Session reset to an empty grid.
    Restarted,
}

/// Why an action was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejected {
    InvalidColumn,
    ColumnFull,
    GameOver,
    AtEdge,
}

impl MoveRejected {
    pub fn code(self) -> &'static str {
        match self {
            MoveRejected::InvalidColumn => "invalid_column",
            MoveRejected::ColumnFull => "column_full",
            MoveRejected::GameOver => "game_over",
            MoveRejected::AtEdge => "at_edge",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            MoveRejected::InvalidColumn => "no such column, pick another",
            MoveRejected::ColumnFull => "that column is full, pick another",
            MoveRejected::GameOver => "game over, press r to play again",
            MoveRejected::AtEdge => "already at the edge of the board",
        }
    }
}

impl From<MoveError> for MoveRejected {
    fn from(err: MoveError) -> Self {
        match err {
            MoveError::InvalidColumn => MoveRejected::InvalidColumn,
            MoveError::ColumnFull => MoveRejected::ColumnFull,
            MoveError::GameOver => MoveRejected::GameOver,
        }
    }
}

/// Column cursor plus action dispatch for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchControl {
    cursor: u8,
}

impl MatchControl {
    /// Start with the cursor on the middle column.
    pub fn new(session: &Session) -> Self {
        Self {
            cursor: home_column(session),
        }
    }

    /// Current cursor column (1-based, always valid for the grid).
    pub fn cursor(&self) -> u8 {
        self.cursor
    }

    /// Apply one action to the session.
    ///
    /// Cursor movement is allowed even after the game ends (it is
    /// harmless); drops are not.
    pub fn apply(
        &mut self,
        session: &mut Session,
        action: GameAction,
    ) -> Result<Applied, MoveRejected> {
        match action {
            GameAction::MoveLeft => {
                if self.cursor <= 1 {
                    return Err(MoveRejected::AtEdge);
                }
                self.cursor -= 1;
                Ok(Applied::CursorMoved(self.cursor))
            }
            GameAction::MoveRight => {
                if self.cursor >= session.grid().cols() {
                    return Err(MoveRejected::AtEdge);
                }
                self.cursor += 1;
                Ok(Applied::CursorMoved(self.cursor))
            }
            GameAction::Drop => drop_at(session, self.cursor),
            GameAction::SelectColumn(column) => {
                let applied = drop_at(session, column)?;
                self.cursor = column;
                Ok(applied)
            }
            GameAction::Restart => {
                session.reset();
                self.cursor = home_column(session);
                Ok(Applied::Restarted)
            }
        }
    }
}

fn drop_at(session: &mut Session, column: u8) -> Result<Applied, MoveRejected> {
    let (row, col) = session.try_drop(column)?;
    Ok(Applied::Dropped { row, col })
}

fn home_column(session: &Session) -> u8 {
    (session.grid().cols() + 1) / 2
}
