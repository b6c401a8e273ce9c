//! Terminal runner (default binary).
//!
//! Reads keys with crossterm, advances the game on a fixed frame clock, and
//! draws through the framebuffer renderer. Configuration comes from the
//! environment, see [`mini_tetris::config`].

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::info;

use mini_tetris::engine::{Session, Ticker};
use mini_tetris::input::{handle_key_event, is_key_down, should_quit};
use mini_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use mini_tetris::types::GameAction;
use mini_tetris::{logging, AppConfig};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;
    info!(
        seed = config.seed,
        tick_ms = config.tick.as_millis() as u64,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut session = Session::new(config.seed);
    let view = GameView::new(config.cell_width, 1);
    let mut fb = FrameBuffer::new(0, 0);

    let mut ticker = Ticker::new(config.tick);
    ticker.start(Instant::now());

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(session.game(), Viewport::new(w, h), &mut fb);
        term.present(&fb)?;

        // Wait for input until the next frame; block while the clock is stopped.
        let ready = match ticker.time_until_next(Instant::now()) {
            Some(timeout) => event::poll(timeout)?,
            None => true,
        };

        if ready {
            match event::read()? {
                Event::Key(key) if is_key_down(&key) => {
                    if should_quit(key) {
                        info!("quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply(action);
                        if action == GameAction::Restart && !ticker.is_running() {
                            ticker.start(Instant::now());
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Frames.
        for _ in 0..ticker.poll(Instant::now()) {
            session.tick();
        }

        if session.is_over() && ticker.is_running() {
            info!(
                pieces = session.game().pieces_spawned(),
                rows = session.game().rows_cleared(),
                "game over"
            );
            ticker.cancel();
        }
    }
}
