//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Play is
//! turn-based, one action per key press, so there is no auto-repeat or
//! key-release handling here.

pub mod map;

pub use tui_connect_types as types;

pub use map::{handle_key_event, should_quit};
