//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tui_2048::term`.
//! The loop is event-driven: it blocks on the next terminal event and only
//! redraws when the game changed or the terminal was resized.

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::{info, warn};

use tui_2048::config::AppConfig;
use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::logging;
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    logging::init(&config)?;
    info!(seed = config.seed, "starting");

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &config));

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!(error = %err, "failed to restore terminal");
    }
    if let Err(err) = &result {
        warn!(error = %err, "exiting with error");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut game = GameState::new(config.seed);
    game.start();

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.present(&fb)?;
            dirty = false;
        }

        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    info!(
                        score = game.score(),
                        episode = game.episode_id(),
                        "quit"
                    );
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    game.apply_action(action);
                    dirty = true;
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}
