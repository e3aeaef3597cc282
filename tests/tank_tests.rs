//! Tank fire cap, movement and rotation.

use tui_tanks::core::Tank;
use tui_tanks::types::{Direction, Turn, FIRE_CAP};

#[test]
fn fire_cap_is_lifetime_and_silent() {
    let mut tank = Tank::new(250, 250);
    for i in 0..FIRE_CAP {
        assert!(tank.fire(), "shot {} should fire", i + 1);
    }
    assert_eq!(tank.projectiles().len(), 24);

    assert!(!tank.fire());
    assert_eq!(tank.projectiles().len(), 24);
    assert_eq!(tank.fired(), 24);
    assert_eq!(tank.shots_left(), 0);
}

#[test]
fn cap_holds_after_projectiles_expire() {
    let mut tank = Tank::new(250, 250);
    for _ in 0..FIRE_CAP {
        tank.fire();
    }
    while !tank.projectiles().is_empty() {
        tank.fly_projectiles(Direction::Top);
    }
    assert!(!tank.fire());
    assert!(tank.projectiles().is_empty());
    assert_eq!(tank.fired(), 24);
}

#[test]
fn move_by_changes_one_axis() {
    let cases = [
        (Direction::Left, (248, 250)),
        (Direction::Right, (252, 250)),
        (Direction::Top, (250, 248)),
        (Direction::Bottom, (250, 252)),
    ];
    for (dir, expected) in cases {
        let mut tank = Tank::new(250, 250);
        tank.move_by(2, dir);
        assert_eq!(tank.position(), expected, "{:?}", dir);
    }
}

#[test]
fn movement_is_not_clamped() {
    let mut tank = Tank::new(0, 0);
    for _ in 0..10 {
        tank.move_by(2, Direction::Left);
    }
    assert_eq!(tank.position(), (-20, 0));
}

#[test]
fn four_right_turns_come_full_circle() {
    let mut tank = Tank::default();
    for _ in 0..4 {
        tank.rotate(Turn::Right);
    }
    assert_eq!(tank.sprite_degrees(), 0);
    assert_eq!(tank.facing(), Direction::Top);
    assert_eq!(tank.last_turn(), Some(Turn::Right));
}
