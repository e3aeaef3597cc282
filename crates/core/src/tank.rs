//! The player tank.

use crate::cursor::DirectionCursor;
use crate::projectile::Projectile;
use crate::types::{
    Direction, Rect, Turn, FIRE_CAP, PROJECTILE_HEIGHT, PROJECTILE_WIDTH, TANK_HEIGHT, TANK_WIDTH,
};

/// The player tank and everything it owns.
///
/// The tank's [`DirectionCursor`] is the single record of which way the tank
/// faces; movement and projectile flight both read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tank {
    rect: Rect,
    /// Sprite orientation in degrees, counter-clockwise, normalized to `0..360`.
    sprite_degrees: i32,
    cursor: DirectionCursor,
    last_turn: Option<Turn>,
    projectiles: Vec<Projectile>,
    fired: u32,
}

impl Tank {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            rect: Rect::new(x, y, TANK_WIDTH, TANK_HEIGHT),
            sprite_degrees: 0,
            cursor: DirectionCursor::new(),
            last_turn: None,
            projectiles: Vec::with_capacity(FIRE_CAP as usize),
            fired: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn position(&self) -> (i32, i32) {
        self.rect.position()
    }

    pub fn facing(&self) -> Direction {
        self.cursor.current()
    }

    pub fn sprite_degrees(&self) -> i32 {
        self.sprite_degrees
    }

    pub fn last_turn(&self) -> Option<Turn> {
        self.last_turn
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    /// Total shots fired over the tank's lifetime.
    pub fn fired(&self) -> u32 {
        self.fired
    }

    pub fn shots_left(&self) -> u32 {
        FIRE_CAP.saturating_sub(self.fired)
    }

    /// Fire a projectile from the tank's center.
    ///
    /// Returns `false` once the lifetime cap is reached; the counter never
    /// goes down, so a capped tank stays capped.
    pub fn fire(&mut self) -> bool {
        if self.fired >= FIRE_CAP {
            return false;
        }
        let (x, y) = self.rect.centered(PROJECTILE_WIDTH, PROJECTILE_HEIGHT);
        self.projectiles.push(Projectile::new(x, y));
        self.fired += 1;
        true
    }

    /// Translate by `speed` pixels along `direction`. No clamping.
    pub fn move_by(&mut self, speed: i32, direction: Direction) {
        let (dx, dy) = direction.delta();
        self.rect.translate(dx * speed, dy * speed);
    }

    /// Rotate the sprite a quarter turn and advance the facing.
    pub fn rotate(&mut self, turn: Turn) {
        self.sprite_degrees = (self.sprite_degrees + turn.degrees()).rem_euclid(360);
        self.cursor.next(Some(turn));
        self.last_turn = Some(turn);
    }

    /// Fly every live projectile one step and drop the ones that left the world.
    ///
    /// Returns how many projectiles expired.
    pub fn fly_projectiles(&mut self, direction: Direction) -> usize {
        let before = self.projectiles.len();
        self.projectiles.retain_mut(|p| !p.fly(direction));
        before - self.projectiles.len()
    }
}

impl Default for Tank {
    fn default() -> Self {
        let (x, y) = crate::types::TANK_START;
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HEIGHT, TANK_START, WIDTH};

    #[test]
    fn default_tank_spawns_at_start_facing_top() {
        let t = Tank::default();
        assert_eq!(t.position(), TANK_START);
        assert_eq!(t.facing(), Direction::Top);
        assert_eq!(t.sprite_degrees(), 0);
        assert!(t.projectiles().is_empty());
    }

    #[test]
    fn fire_spawns_projectile_at_center() {
        let mut t = Tank::new(250, 250);
        assert!(t.fire());
        assert_eq!(t.projectiles()[0].position(), (308, 311));
        assert_eq!(t.fired(), 1);
        assert_eq!(t.shots_left(), FIRE_CAP - 1);
    }

    #[test]
    fn rotate_tracks_sprite_and_last_turn() {
        let mut t = Tank::default();
        t.rotate(Turn::Right);
        assert_eq!(t.sprite_degrees(), 270);
        assert_eq!(t.facing(), Direction::Right);
        assert_eq!(t.last_turn(), Some(Turn::Right));

        t.rotate(Turn::Left);
        assert_eq!(t.sprite_degrees(), 0);
        assert_eq!(t.facing(), Direction::Top);
        assert_eq!(t.last_turn(), Some(Turn::Left));
    }

    #[test]
    fn fly_projectiles_drops_expired() {
        let mut t = Tank::new(WIDTH - TANK_WIDTH, HEIGHT / 2);
        t.fire();
        // Center x = 1152 + 58 = 1210; 7 steps reach 1280, the 8th leaves.
        for _ in 0..7 {
            assert_eq!(t.fly_projectiles(Direction::Right), 0);
        }
        assert_eq!(t.projectiles().len(), 1);
        assert_eq!(t.fly_projectiles(Direction::Right), 1);
        assert!(t.projectiles().is_empty());
    }
}
