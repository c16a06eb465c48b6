//! Terminal rendering module.
//!
//! A pure [`BoardView`] maps session state into a [`Canvas`] of styled
//! glyphs, and [`TerminalRenderer`] flushes a canvas to the real terminal.
//! The view touches no I/O, so it can be unit-tested; the Owner -> glyph
//! mapping lives here so the core can stay a board of opaque tokens.

pub mod canvas;
pub mod renderer;
pub mod view;

pub use tui_connect_core as core;
pub use tui_connect_types as types;

pub use canvas::{Canvas, Rgb, Style, Tile};
pub use renderer::TerminalRenderer;
pub use view::{owner_style, BoardView, Viewport};
