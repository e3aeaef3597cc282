//! Terminal tank game runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tui_tanks::term`.
//! Resources and the journal are set up before raw mode so startup failures
//! print normally and exit non-zero.

use std::time::{Duration, Instant};

use anyhow::Result;

use tui_tanks::config::GameConfig;
use tui_tanks::core::{GameSnapshot, GameState};
use tui_tanks::input::{drain_frame, InputHandler};
use tui_tanks::journal::{Journal, Record};
use tui_tanks::load_resources;
use tui_tanks::term::{FrameBuffer, GameView, Resources, TerminalRenderer, Viewport};
use tui_tanks::types::WINDOW_TITLE;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let resources = load_resources(&config)?;
    let journal = match config.log_path.as_deref() {
        Some(path) => Journal::open(path)?,
        None => Journal::disabled(),
    };

    let mut term = TerminalRenderer::new();
    term.enter(WINDOW_TITLE)?;

    let result = run(&mut term, &config, &resources, &journal);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    config: &GameConfig,
    resources: &Resources,
    journal: &Journal,
) -> Result<()> {
    let mut game = GameState::new();
    let mut input = InputHandler::new().with_key_release_timeout_ms(config.key_release_ms);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let frame = Duration::from_millis(config.frame_ms as u64);
    let mut last_tick = Instant::now();
    let mut first_frame = true;

    journal.record(game.tick_count(), Record::start());

    loop {
        // Input with timeout until next tick.
        let timeout = if first_frame {
            Duration::ZERO
        } else {
            frame.saturating_sub(last_tick.elapsed())
        };
        let frame_input = drain_frame(&mut input, timeout)?;

        if frame_input.quit {
            journal.record(
                game.tick_count(),
                Record::Quit {
                    fired: game.tank.fired(),
                },
            );
            return Ok(());
        }
        if frame_input.resized {
            term.invalidate();
        }
        for action in frame_input.actions {
            game.apply_action(action);
        }

        // Tick.
        if first_frame || last_tick.elapsed() >= frame {
            first_frame = false;
            last_tick = Instant::now();

            game.tick(input.forward_held());
            journal.record_events(game.tick_count(), game.drain_events());

            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            game.snapshot_into(&mut snap);
            view.render_into(&snap, resources, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }
    }
}
