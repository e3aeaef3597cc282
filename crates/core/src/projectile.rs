//! Projectiles fired by the tank.

use crate::types::{Direction, Rect, HEIGHT, PROJECTILE_HEIGHT, PROJECTILE_STEP, PROJECTILE_WIDTH, WIDTH};

/// A projectile in flight.
///
/// Projectiles carry no heading of their own: each tick they move along the
/// direction the caller passes to [`Projectile::fly`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Projectile {
    pub rect: Rect,
}

impl Projectile {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            rect: Rect::new(x, y, PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
        }
    }

    pub fn position(&self) -> (i32, i32) {
        self.rect.position()
    }

    /// Advance one step and report whether the projectile left the world.
    ///
    /// The bounds are inclusive: a projectile sitting exactly on `x == WIDTH`
    /// or `y == HEIGHT` is still live.
    pub fn fly(&mut self, direction: Direction) -> bool {
        let (dx, dy) = direction.delta();
        self.rect.translate(dx * PROJECTILE_STEP, dy * PROJECTILE_STEP);
        self.is_out_of_bounds()
    }

    pub fn is_out_of_bounds(&self) -> bool {
        self.rect.x > WIDTH || self.rect.x < 0 || self.rect.y > HEIGHT || self.rect.y < 0
    }
}
