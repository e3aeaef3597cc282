//! Game state - one tank, its projectiles and the tick counter.
//!
//! All mutation happens through [`GameState::apply_action`] (edge-triggered
//! input) and [`GameState::tick`] (per-frame update). Both are total: nothing
//! in here can fail once the game is running.

use arrayvec::ArrayVec;

use crate::snapshot::{GameSnapshot, ProjectileSnapshot, TankSnapshot};
use crate::tank::Tank;
use crate::types::{Direction, GameAction, Turn, TANK_SPEED};

/// Capacity of the per-frame event buffer.
pub const MAX_EVENTS: usize = 64;

/// Something observable that happened while applying input or ticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Turned { turn: Turn, facing: Direction },
    Fired { x: i32, y: i32, shot: u32 },
    FireSuppressed,
    ProjectilesExpired { count: u32 },
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub tank: Tank,
    tick: u64,
    events: ArrayVec<GameEvent, MAX_EVENTS>,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_tank(Tank::default())
    }

    pub fn with_tank(tank: Tank) -> Self {
        Self {
            tank,
            tick: 0,
            events: ArrayVec::new(),
        }
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn facing(&self) -> Direction {
        self.tank.facing()
    }

    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::RotateLeft => self.turn(Turn::Left),
            GameAction::RotateRight => self.turn(Turn::Right),
            GameAction::Fire => {
                if self.tank.fire() {
                    let shot = self.tank.fired();
                    let (x, y) = self
                        .tank
                        .projectiles()
                        .last()
                        .map(|p| p.position())
                        .unwrap_or_default();
                    self.push_event(GameEvent::Fired { x, y, shot });
                } else {
                    self.push_event(GameEvent::FireSuppressed);
                }
            }
        }
    }

    fn turn(&mut self, turn: Turn) {
        self.tank.rotate(turn);
        let facing = self.tank.facing();
        self.push_event(GameEvent::Turned { turn, facing });
    }

    /// Advance one frame.
    ///
    /// Drives the tank forward when `forward_held` is set, then flies every
    /// projectile along the current facing and drops the expired ones.
    pub fn tick(&mut self, forward_held: bool) {
        let facing = self.tank.facing();
        if forward_held {
            self.tank.move_by(TANK_SPEED, facing);
        }

        let expired = self.tank.fly_projectiles(facing);
        if expired > 0 {
            self.push_event(GameEvent::ProjectilesExpired {
                count: expired as u32,
            });
        }

        self.tick += 1;
    }

    /// Take the events recorded since the last drain.
    pub fn drain_events(&mut self) -> ArrayVec<GameEvent, MAX_EVENTS> {
        std::mem::take(&mut self.events)
    }

    // Events past capacity are dropped; they only feed the journal.
    fn push_event(&mut self, ev: GameEvent) {
        let _ = self.events.try_push(ev);
    }

    /// Copy the current frame into `out` without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.tick = self.tick;
        out.tank = TankSnapshot {
            rect: self.tank.rect(),
            sprite_degrees: self.tank.sprite_degrees(),
            facing: self.tank.facing(),
            fired: self.tank.fired(),
        };
        out.projectiles.clear();
        for p in self.tank.projectiles() {
            let _ = out.projectiles.try_push(ProjectileSnapshot { rect: p.rect });
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
