//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`], tracks the held
//! forward key (including terminals without key-release events) and drains
//! all pending events once per frame.

pub mod handler;
pub mod map;
pub mod poll;

pub use tui_tanks_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, is_forward_key, should_quit};
pub use poll::{drain_frame, FrameInput, MAX_FRAME_ACTIONS};
