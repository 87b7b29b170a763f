//! Terminal gem-swap runner (default binary).
//!
//! Blocks on keyboard events and redraws after every command; the engine is
//! synchronous, so there is no tick loop.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_gemswap::core::GameState;
use tui_gemswap::input::{handle_key_event, should_quit};
use tui_gemswap::term::{GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(board_seed());
    let view = GameView::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, Viewport::new(w, h));
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(command) = handle_key_event(key) {
                    if let Err(err) = game.apply(command) {
                        // Blocked moves are part of normal play.
                        log::debug!("{err}");
                    }
                }
            }
            Event::Resize(..) => {}
            _ => {}
        }
    }
}

fn board_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
