//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, journaling).
//!
//! # World Dimensions
//!
//! The playfield is a fixed logical pixel world, independent of the terminal size:
//!
//! - **Width**: 1280 px
//! - **Height**: 720 px
//! - **Tank**: 128x128 px, spawned at (250, 250)
//! - **Projectile**: 12x5 px
//!
//! # Gameplay Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TANK_SPEED` | 2 | Pixels per tick while the forward key is held |
//! | `PROJECTILE_STEP` | 10 | Pixels per tick a projectile travels |
//! | `FIRE_CAP` | 24 | Lifetime shots per tank |
//! | `GRASS_SIZE` | 256 | Background tile edge in pixels |
//! | `TICK_MS` | 16 | Default frame interval |
//!
//! # Examples
//!
//! ```
//! use tui_tanks_types::{Direction, GameAction, Turn, WIDTH, HEIGHT};
//!
//! let d = Direction::from_str("top").unwrap();
//! assert_eq!(d, Direction::Top);
//! assert_eq!(Turn::from_str("left"), Some(Turn::Left));
//! assert_eq!(GameAction::from_str("fire"), Some(GameAction::Fire));
//!
//! assert_eq!(WIDTH, 1280);
//! assert_eq!(HEIGHT, 720);
//! ```

/// Logical world width in pixels
pub const WIDTH: i32 = 1280;

/// Logical world height in pixels
pub const HEIGHT: i32 = 720;

/// Tank sprite width in pixels
pub const TANK_WIDTH: i32 = 128;

/// Tank sprite height in pixels
pub const TANK_HEIGHT: i32 = 128;

/// Projectile sprite width in pixels
pub const PROJECTILE_WIDTH: i32 = 12;

/// Projectile sprite height in pixels
pub const PROJECTILE_HEIGHT: i32 = 5;

/// Background tile edge length in pixels
pub const GRASS_SIZE: i32 = 256;

/// Lifetime number of shots a single tank may fire
pub const FIRE_CAP: u32 = 24;

/// Distance a projectile travels per tick
pub const PROJECTILE_STEP: i32 = 10;

/// Distance the tank travels per tick while moving forward
pub const TANK_SPEED: i32 = 2;

/// Tank spawn position (top-left corner)
pub const TANK_START: (i32, i32) = (250, 250);

/// Default frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Terminal title
pub const WINDOW_TITLE: &str = "Танчики";


/// The four cardinal facings
///
/// Screen coordinates grow right (x) and down (y), so `Top` moves toward y=0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    Left,
    Bottom,
    Right,
}

impl Direction {
    /// Parse direction from its label (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tanks_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("bottom"), Some(Direction::Bottom));
    /// assert_eq!(Direction::from_str("RIGHT"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("up"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "top" => Some(Direction::Top),
            "left" => Some(Direction::Left),
            "bottom" => Some(Direction::Bottom),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Top => "top",
            Direction::Left => "left",
            Direction::Bottom => "bottom",
            Direction::Right => "right",
        }
    }

    /// Unit step `(dx, dy)` in screen coordinates.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Top => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Bottom => (0, 1),
            Direction::Right => (1, 0),
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// A rotation request from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Left,
    Right,
}

impl Turn {
    /// Parse a turn label. Only the exact labels "left" and "right" are turns.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "left" => Some(Turn::Left),
            "right" => Some(Turn::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Turn::Left => "left",
            Turn::Right => "right",
        }
    }

    /// Sprite rotation in degrees applied by this turn (counter-clockwise positive).
    pub fn degrees(&self) -> i32 {
        match self {
            Turn::Left => 90,
            Turn::Right => -90,
        }
    }
}

/// Game actions produced by input and applied to the game state
///
/// Driving forward is not an action: it is level-triggered and passed to
/// the tick as a held flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Rotate the tank 90° counter-clockwise
    RotateLeft,
    /// Rotate the tank 90° clockwise
    RotateRight,
    /// Fire a projectile from the tank center
    Fire,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tanks_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("rotateLeft"), Some(GameAction::RotateLeft));
    /// assert_eq!(GameAction::from_str("fire"), Some(GameAction::Fire));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rotateleft" => Some(GameAction::RotateLeft),
            "rotateright" => Some(GameAction::RotateRight),
            "fire" => Some(GameAction::Fire),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::RotateLeft => "rotateLeft",
            GameAction::RotateRight => "rotateRight",
            GameAction::Fire => "fire",
        }
    }
}

/// Axis-aligned rectangle in world pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Top-left corner at which an `inner_w` x `inner_h` rect is centered inside this one.
    pub fn centered(&self, inner_w: i32, inner_h: i32) -> (i32, i32) {
        (
            self.x + (self.w - inner_w).div_euclid(2),
            self.y + (self.h - inner_h).div_euclid(2),
        )
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }
}

/// Background tile kinds
///
/// Tile maps store raw integers; `1` is grass and everything else is left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Empty,
    Grass,
}

impl TileKind {
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => TileKind::Grass,
            _ => TileKind::Empty,
        }
    }
}
