//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and state. It has **zero dependencies**
//! on terminal I/O, making it:
//!
//! - **Deterministic**: The same input sequence always produces the same frames
//! - **Testable**: Every rule is exercised without a terminal
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`cursor`]: 4-state facing cycle with its two-branch advance policy
//! - [`projectile`]: straight-line flight and bounds expiry
//! - [`tank`]: position, sprite orientation, fire cap and owned projectiles
//! - [`tile_map`]: read-only background grid
//! - [`game_state`]: input application and the per-frame tick
//! - [`snapshot`]: copyable frame view for rendering and journaling
//!
//! # Example
//!
//! ```
//! use tui_tanks_core::GameState;
//! use tui_tanks_types::{Direction, GameAction};
//!
//! let mut game = GameState::new();
//! game.apply_action(GameAction::RotateRight);
//! game.apply_action(GameAction::Fire);
//! game.tick(false);
//!
//! assert_eq!(game.facing(), Direction::Right);
//! assert_eq!(game.tank.projectiles()[0].position(), (318, 311));
//! ```

pub mod cursor;
pub mod game_state;
pub mod projectile;
pub mod snapshot;
pub mod tank;
pub mod tile_map;

pub use tui_tanks_types as types;

pub use cursor::DirectionCursor;
pub use game_state::{GameEvent, GameState, MAX_EVENTS};
pub use projectile::Projectile;
pub use snapshot::{GameSnapshot, ProjectileSnapshot, TankSnapshot, MAX_LIVE_PROJECTILES};
pub use tank::Tank;
pub use tile_map::{TileMap, TileMapError, DEFAULT_TILES};
