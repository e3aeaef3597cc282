//! Held-key tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, is_forward_key};
use crate::types::GameAction;

// In terminals without key-release events, a hold only lasts this long past the
// last press or auto-repeat of the key. Auto-repeat keeps refreshing it.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks the forward key and turns key events into actions.
#[derive(Debug, Clone)]
pub struct InputHandler {
    forward_held: bool,
    last_forward_time: Instant,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            forward_held: false,
            last_forward_time: Instant::now(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Feed one key event.
    ///
    /// `Press` events produce actions. Legacy terminals report auto-repeat as
    /// further presses, so holding D keeps turning and holding Space keeps
    /// firing. Only terminals with keyboard enhancement send `Repeat`, which
    /// just keeps the forward key alive.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<GameAction> {
        match key.kind {
            KeyEventKind::Press => {
                if is_forward_key(key.code) {
                    self.press_forward();
                    return None;
                }
                handle_key_event(key)
            }
            KeyEventKind::Repeat => {
                if is_forward_key(key.code) {
                    self.press_forward();
                }
                None
            }
            KeyEventKind::Release => {
                self.handle_key_release(key.code);
                None
            }
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if is_forward_key(code) {
            self.forward_held = false;
        }
    }

    fn press_forward(&mut self) {
        self.forward_held = true;
        self.last_forward_time = Instant::now();
    }

    /// Whether the forward key counts as held this frame.
    pub fn forward_held(&mut self) -> bool {
        if self.forward_held {
            let timeout = Duration::from_millis(self.key_release_timeout_ms as u64);
            if self.last_forward_time.elapsed() > timeout {
                self.forward_held = false;
            }
        }
        self.forward_held
    }

    pub fn reset(&mut self) {
        self.forward_held = false;
        self.last_forward_time = Instant::now();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
