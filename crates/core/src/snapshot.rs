use arrayvec::ArrayVec;

use crate::types::{Direction, Rect, FIRE_CAP, TANK_HEIGHT, TANK_START, TANK_WIDTH};

/// Live projectiles never exceed the lifetime fire cap.
pub const MAX_LIVE_PROJECTILES: usize = FIRE_CAP as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TankSnapshot {
    pub rect: Rect,
    pub sprite_degrees: i32,
    pub facing: Direction,
    pub fired: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectileSnapshot {
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub tick: u64,
    pub tank: TankSnapshot,
    pub projectiles: ArrayVec<ProjectileSnapshot, MAX_LIVE_PROJECTILES>,
}

impl GameSnapshot {
    pub fn shots_left(&self) -> u32 {
        FIRE_CAP.saturating_sub(self.tank.fired)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            tick: 0,
            tank: TankSnapshot {
                rect: Rect::new(TANK_START.0, TANK_START.1, TANK_WIDTH, TANK_HEIGHT),
                sprite_degrees: 0,
                facing: Direction::Top,
                fired: 0,
            },
            projectiles: ArrayVec::new(),
        }
    }
}
