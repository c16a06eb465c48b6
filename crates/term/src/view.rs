//! Pure board-to-canvas rendering.

use tui_connect_core::{Outcome, Session};
use tui_connect_types::Owner;

use crate::canvas::{Canvas, Rgb, Style, Tile};

/// Glyph and color per player slot. Ten slots, one per roster seat.
pub const PALETTE: [(char, Rgb); 10] = [
    ('●', Rgb::new(0xFF, 0x00, 0x00)),
    ('■', Rgb::new(0x00, 0x00, 0xFF)),
    ('▲', Rgb::new(0x00, 0xFF, 0x00)),
    ('♦', Rgb::new(0xFF, 0xFF, 0x00)),
    ('★', Rgb::new(0xFF, 0x00, 0xFF)),
    ('◆', Rgb::new(0x00, 0xFF, 0xFF)),
    ('▼', Rgb::new(0xFF, 0x80, 0x00)),
    ('◉', Rgb::new(0x80, 0x00, 0xFF)),
    ('⬢', Rgb::new(0xFF, 0x00, 0x80)),
    ('⬣', Rgb::new(0x00, 0xFF, 0x80)),
];

/// Glyph and color for a player.
pub fn owner_style(owner: Owner) -> (char, Rgb) {
    PALETTE[owner.index() as usize % PALETTE.len()]
}

/// Terminal dimensions the frame is laid out against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BG: Rgb = Rgb::new(0, 0, 0);
const FRAME_FG: Rgb = Rgb::new(120, 120, 120);
const TEXT_FG: Rgb = Rgb::new(220, 220, 220);

/// Stateless view that draws one frame of a match into a [`Canvas`].
#[derive(Debug, Clone, Copy)]
pub struct BoardView {
    /// Horizontal tiles per board column.
    pub cell_w: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl BoardView {
    /// Draw a full frame: title, drop marker, column numbers, framed board,
    /// status line and an optional notice.
    pub fn render_into(
        &self,
        session: &Session,
        cursor: u8,
        notice: Option<&str>,
        viewport: Viewport,
        canvas: &mut Canvas,
    ) {
        canvas.resize(viewport.width, viewport.height);
        canvas.clear(Tile::default());

        let grid = session.grid();
        let cols = grid.cols() as u16;
        let frame_w = cols * self.cell_w + 1;
        let frame_h = grid.rows() as u16 + 2;
        let start_x = (viewport.width.saturating_sub(frame_w)) / 2;

        let text = Style::plain(TEXT_FG, BG);
        let frame = Style::plain(FRAME_FG, BG);

        let title = "TUI CONNECT";
        let title_x = (viewport.width.saturating_sub(title.len() as u16)) / 2;
        canvas.put_str(title_x, 0, title, text.bold());

        let marker_y = 1;
        let header_y = 2;
        let frame_y = 3;

        // Drop marker above the cursor column, in the mover's color.
        if !session.is_terminal() {
            let (_, color) = owner_style(session.current_player());
            canvas.put_char(
                self.cell_x(start_x, cursor as u16 - 1),
                marker_y,
                '▼',
                Style::plain(color, BG).bold(),
            );
        }

        for col in 0..cols {
            canvas.put_u16(self.cell_x(start_x, col), header_y, col + 1, text.dim());
        }

        draw_border(canvas, start_x, frame_y, frame_w, frame_h, frame);

        for ((row, col), cell) in grid.iter() {
            let x = self.cell_x(start_x, col as u16);
            let y = frame_y + 1 + row as u16;
            match cell {
                Some(owner) => {
                    let (glyph, color) = owner_style(owner);
                    canvas.put_char(x, y, glyph, Style::plain(color, BG).bold());
                }
                None => canvas.put_char(x, y, '·', frame.dim()),
            }
        }

        let status_y = frame_y + frame_h + 1;
        self.draw_status(session, canvas, start_x, status_y, text);

        if let Some(notice) = notice {
            canvas.put_str(start_x, status_y + 1, notice, text.dim());
        }

        canvas.put_str(
            start_x,
            status_y + 3,
            "←/→ move  ⏎ drop  1-9 column  r restart  q quit",
            text.dim(),
        );
    }

    /// Convenience wrapper that allocates a fresh canvas.
    pub fn render(&self, session: &Session, cursor: u8, viewport: Viewport) -> Canvas {
        let mut canvas = Canvas::new(viewport.width, viewport.height);
        self.render_into(session, cursor, None, viewport, &mut canvas);
        canvas
    }

    fn draw_status(&self, session: &Session, canvas: &mut Canvas, x: u16, y: u16, text: Style) {
        match session.outcome() {
            Some(Outcome::Winner(owner)) => {
                let (glyph, color) = owner_style(owner);
                let cx = canvas.put_str(x, y, "PLAYER ", text.bold());
                let cx = canvas.put_u16(cx, y, owner.index() as u16 + 1, text.bold());
                let cx = canvas.put_str(cx, y, " WINS ", text.bold());
                canvas.put_char(cx, y, glyph, Style::plain(color, BG).bold());
            }
            Some(Outcome::Draw) => {
                canvas.put_str(x, y, "DRAW - THE BOARD IS FULL", text.bold());
            }
            None => {
                let owner = session.current_player();
                let (glyph, color) = owner_style(owner);
                let cx = canvas.put_str(x, y, "PLAYER ", text);
                let cx = canvas.put_u16(cx, y, owner.index() as u16 + 1, text);
                let cx = canvas.put_str(cx, y, " TO MOVE ", text);
                canvas.put_char(cx, y, glyph, Style::plain(color, BG).bold());
            }
        }
    }

    /// Screen x of a 0-based board column inside the frame.
    fn cell_x(&self, start_x: u16, col: u16) -> u16 {
        start_x + 1 + col * self.cell_w
    }
}

fn draw_border(canvas: &mut Canvas, x: u16, y: u16, w: u16, h: u16, style: Style) {
    let right = x + w;
    let bottom = y + h - 1;

    canvas.put_char(x, y, '┌', style);
    canvas.put_char(right, y, '┐', style);
    canvas.put_char(x, bottom, '└', style);
    canvas.put_char(right, bottom, '┘', style);
    for cx in x + 1..right {
        canvas.put_char(cx, y, '─', style);
        canvas.put_char(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        canvas.put_char(x, cy, '│', style);
        canvas.put_char(right, cy, '│', style);
    }
}
