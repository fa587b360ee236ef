//! Terminal runner (default binary).
//!
//! crossterm for input, the framebuffer renderer for output, and a fixed-frame
//! poll loop feeding elapsed time into the engine's [`GameLoop`].

mod logging;

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};

use pharaoh_blocks::core::GameSnapshot;
use pharaoh_blocks::engine::{GameConfig, GameLoop};
use pharaoh_blocks::input::{handle_key_event, should_quit, InputHandler};
use pharaoh_blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init(config.log_path.as_deref(), config.log_level)?;
    info!(
        "starting: seed {}, frame {}ms, fast-drop grace {}ms",
        config.seed, config.frame_ms, config.fast_drop_grace_ms
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    log::logger().flush();
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut game = GameLoop::new(config.seed);
    let mut input = InputHandler::with_grace_ms(config.fast_drop_grace_ms);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let frame = Duration::from_millis(config.frame_ms as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        input.observe_fast_drop(snap.fast_drop);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until the next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Repeat => {
                        // Keeps a held fast-drop alive; other repeats are ignored.
                        input.handle_key_press(key.code);
                    }
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            info!("quit requested");
                            return Ok(());
                        }
                        if let Some(action) = input
                            .handle_key_press(key.code)
                            .or_else(|| handle_key_event(key))
                        {
                            game.handle(action);
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(action) = input.handle_key_release(key.code) {
                            game.handle(action);
                        }
                    }
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Advance.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            let ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            last_frame += Duration::from_millis(ms as u64);

            if let Some(action) = input.update(ms) {
                game.handle(action);
            }
            game.advance(ms);

            if let Some(event) = game.take_last_event() {
                debug!(
                    "lock {}: {} rows, +{} points{}",
                    event.kind.as_str(),
                    event.rows_cleared,
                    event.points,
                    if event.game_over { ", game over" } else { "" }
                );
            }
        }
    }
}
