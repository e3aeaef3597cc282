//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! into a simple framebuffer that is diffed and flushed to the terminal.
//!
//! - [`game_view`] projects the pixel world onto terminal cells (pure)
//! - [`resources`] holds the tile map and palette loaded at startup
//! - [`renderer`] owns raw mode / alternate screen and writes frames

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod resources;

pub use tui_tanks_core as core;
pub use tui_tanks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use resources::{Palette, Resources};
