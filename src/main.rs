//! Interactive terminal four-in-a-row.
//!
//! Usage: `tui-connect [ROWS [COLS [PLAYERS]]]`
//!
//! Defaults to a 6x7 board with 2 players. Rows and columns accept 6-15,
//! players 2-10; bad values are rejected before the terminal is touched.

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

use tui_connect_core::Session;
use tui_connect_engine::MatchControl;
use tui_connect_input::{handle_key_event, should_quit};
use tui_connect_term::{BoardView, Canvas, TerminalRenderer, Viewport};
use tui_connect_types::{DEFAULT_COLS, DEFAULT_ROWS};

const USAGE: &str = "usage: tui-connect [ROWS [COLS [PLAYERS]]]

  ROWS     board rows, 6-15 (default 6)
  COLS     board columns, 6-15 (default 7)
  PLAYERS  number of players, 2-10 (default 2)";

struct Setup {
    rows: u8,
    cols: u8,
    players: u8,
}

fn parse_args() -> Result<Setup> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        std::process::exit(0);
    }
    if args.len() > 3 {
        bail!("too many arguments\n{USAGE}");
    }

    let parse_field = |i: usize, name: &str, default: u8| -> Result<u8> {
        match args.get(i) {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("{name} must be a number, got {raw:?}")),
            None => Ok(default),
        }
    };

    Ok(Setup {
        rows: parse_field(0, "ROWS", DEFAULT_ROWS)?,
        cols: parse_field(1, "COLS", DEFAULT_COLS)?,
        players: parse_field(2, "PLAYERS", 2)?,
    })
}

fn main() -> Result<()> {
    let setup = parse_args()?;
    let mut session = Session::new(setup.rows, setup.cols, setup.players)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term, &mut session);
    // Always restore the terminal, even when the loop errored.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = BoardView::default();
    let mut control = MatchControl::new(session);
    let mut canvas = Canvas::new(0, 0);
    let mut notice: Option<&'static str> = None;

    loop {
        let (width, height) = terminal::size().unwrap_or((80, 24));
        view.render_into(
            session,
            control.cursor(),
            notice,
            Viewport::new(width, height),
            &mut canvas,
        );
        term.draw(&canvas)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    notice = match control.apply(session, action) {
                        Ok(_) => None,
                        Err(rejected) => Some(rejected.message()),
                    };
                }
            }
            Event::Resize(..) => {}
            _ => {}
        }
    }
}
