//! TUI Connect: a terminal four-in-a-row game for 2-10 players.
//!
//! Facade crate re-exporting the workspace members:
//! - [`types`]: shared constants, [`types::Owner`], actions and errors
//! - [`core`]: grid, win detection and the game session
//! - [`engine`]: cursor handling and action application
//! - [`input`]: key event mapping
//! - [`term`]: canvas, board view and terminal renderer

pub use tui_connect_core as core;
pub use tui_connect_engine as engine;
pub use tui_connect_input as input;
pub use tui_connect_term as term;
pub use tui_connect_types as types;
