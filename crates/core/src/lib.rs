//! Core game logic - pure, deterministic, and testable
//!
//! Everything here is synchronous and free of I/O: a session is driven one
//! move at a time by whoever owns it, and nothing blocks, retries, or keeps
//! state between calls beyond the board itself.
//!
//! # Module structure
//!
//! - [`grid`]: placement state, drop rules, and the gravity invariant
//! - [`win`]: four-axis run detection around a just-placed disc
//! - [`session`]: turn order, outcome tracking, and restart
//!
//! # Example
//!
//! ```
//! use tui_connect_core::{Outcome, Session};
//!
//! let mut session = Session::new(6, 7, 2).unwrap();
//!
//! // Player 1 stacks column 1 while player 2 parks in column 7.
//! for column in [1, 7, 1, 7, 1, 7, 1] {
//!     session.try_drop(column).unwrap();
//! }
//!
//! assert!(session.is_terminal());
//! assert!(matches!(session.outcome(), Some(Outcome::Winner(_))));
//! ```

pub mod grid;
pub mod session;
pub mod win;

pub use tui_connect_types as types;

pub use grid::Grid;
pub use session::{ColumnList, MoveError, Outcome, Session, SetupError};
pub use win::check_winner;
