//! Terminal output: raw mode, alternate screen, full-frame draws.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::canvas::{Canvas, Rgb, Style};

/// Owns stdout for the lifetime of a match and redraws whole frames.
///
/// Frames are encoded into an internal byte buffer and written with a
/// single flush, so a slow terminal never shows a half-drawn board.
pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::new(),
        }
    }

    /// Enter raw mode on the alternate screen with the cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        queue!(self.stdout, EnterAlternateScreen, cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call even if `enter` failed partway.
    pub fn exit(&mut self) -> Result<()> {
        queue!(
            self.stdout,
            ResetColor,
            SetAttribute(Attribute::Reset),
            cursor::Show,
            LeaveAlternateScreen
        )?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Write one full frame.
    pub fn draw(&mut self, canvas: &Canvas) -> Result<()> {
        self.buf.clear();
        encode_frame_into(canvas, &mut self.buf)?;
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a canvas as a terminal byte stream.
///
/// Style commands are emitted only when the style changes between tiles,
/// which keeps frames small since boards are long runs of one style.
pub fn encode_frame_into(canvas: &Canvas, out: &mut Vec<u8>) -> Result<()> {
    queue!(out, Clear(ClearType::All))?;

    let mut current: Option<Style> = None;
    for y in 0..canvas.height() {
        queue!(out, cursor::MoveTo(0, y))?;
        for x in 0..canvas.width() {
            let Some(tile) = canvas.get(x, y) else {
                continue;
            };
            if current != Some(tile.style) {
                apply_style_into(out, tile.style)?;
                current = Some(tile.style);
            }
            queue!(out, Print(tile.ch))?;
        }
    }

    queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: Style) -> Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(rgb_to_color(style.fg)),
        SetBackgroundColor(rgb_to_color(style.bg))
    )?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
