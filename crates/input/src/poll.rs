//! Per-frame event draining.

use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use crate::handler::InputHandler;
use crate::map::should_quit;
use crate::types::GameAction;

/// Actions beyond this many in a single frame are dropped.
pub const MAX_FRAME_ACTIONS: usize = 32;

/// Everything the input side produced for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub actions: ArrayVec<GameAction, MAX_FRAME_ACTIONS>,
    pub quit: bool,
    pub resized: bool,
}

impl FrameInput {
    /// Route one terminal event through the handler.
    pub fn push_event(&mut self, handler: &mut InputHandler, ev: Event) {
        match ev {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Release && should_quit(key) {
                    self.quit = true;
                    return;
                }
                if let Some(action) = handler.handle_key(key) {
                    let _ = self.actions.try_push(action);
                }
            }
            Event::Resize(_, _) => self.resized = true,
            _ => {}
        }
    }
}

/// Drain every pending terminal event.
///
/// Waits up to `timeout` for the first event, then takes whatever else is
/// already queued without blocking. Stops early on a quit request.
pub fn drain_frame(handler: &mut InputHandler, timeout: Duration) -> Result<FrameInput> {
    let mut frame = FrameInput::default();
    let mut wait = timeout;
    while event::poll(wait)? {
        frame.push_event(handler, event::read()?);
        if frame.quit {
            break;
        }
        wait = Duration::ZERO;
    }
    Ok(frame)
}
