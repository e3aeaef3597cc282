//! Straight-line flight and bounds expiry.

use tui_tanks::core::Projectile;
use tui_tanks::types::{Direction, HEIGHT, WIDTH};

#[test]
fn n_steps_move_ten_pixels_each() {
    let cases = [
        (Direction::Right, (10, 0)),
        (Direction::Left, (-10, 0)),
        (Direction::Top, (0, -10)),
        (Direction::Bottom, (0, 10)),
    ];
    for (dir, (dx, dy)) in cases {
        let mut p = Projectile::new(600, 300);
        for _ in 0..5 {
            p.fly(dir);
        }
        assert_eq!(p.position(), (600 + 5 * dx, 300 + 5 * dy), "{:?}", dir);
    }
}

/// Place a projectile so that one step in `dir` lands it on `(x, y)`.
fn landing_at(x: i32, y: i32, dir: Direction) -> bool {
    let (dx, dy) = dir.delta();
    let mut p = Projectile::new(x - dx * 10, y - dy * 10);
    let expired = p.fly(dir);
    assert_eq!(p.position(), (x, y));
    expired
}

#[test]
fn boundary_values() {
    assert!(!landing_at(WIDTH, 100, Direction::Right));
    assert!(landing_at(WIDTH + 1, 100, Direction::Right));
    assert!(!landing_at(0, 100, Direction::Left));
    assert!(landing_at(-1, 100, Direction::Left));
    assert!(!landing_at(100, HEIGHT, Direction::Bottom));
    assert!(landing_at(100, HEIGHT + 1, Direction::Bottom));
    assert!(!landing_at(100, 0, Direction::Top));
    assert!(landing_at(100, -1, Direction::Top));
}

#[test]
fn expiry_checks_both_axes() {
    // Already off to the left: moving vertically does not bring it back.
    let mut p = Projectile::new(-5, 300);
    assert!(p.fly(Direction::Top));
}
