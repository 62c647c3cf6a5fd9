//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and a custom framebuffer-based renderer.
//! The game is turn-based, so the loop blocks on the next key event instead
//! of running a fixed tick.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::core::Game;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{GameView, TerminalRenderer, Viewport};
use tui_2048::types::{GameAction, GRID_SIZE};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new(GRID_SIZE, time_seed())?;
    game.start();

    let view = GameView::default();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(game.board(), Viewport::new(w, h));
        term.draw(&fb)?;

        // One move runs to completion before the next event is read.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(GameAction::Move(direction)) => {
                        game.apply_move(direction);
                    }
                    Some(GameAction::Restart) => game.reset(),
                    None => {}
                }
            }
            Event::Resize(..) => {
                // Redrawn at the top of the loop.
            }
            _ => {}
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
