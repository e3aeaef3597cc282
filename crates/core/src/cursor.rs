//! Direction cursor - the 4-state facing cycle
//!
//! The cursor is a fixed ring of the four labels `[top, left, bottom, right]`.
//! It never grows or shrinks; advancing only rotates the ring, and the current
//! facing is whatever sits at the front.
//!
//! Advancing takes the *turn* that drives the rotation:
//!
//! - no turn (`None`) or `Right`: the last element moves to the front
//! - `Left`: the front element moves to the back
//!
//! From the initial ring, repeated right turns visit top → right → bottom →
//! left → top and repeated left turns visit top → left → bottom → right → top.

use crate::types::{Direction, Turn};

const INITIAL: [Direction; 4] = [
    Direction::Top,
    Direction::Left,
    Direction::Bottom,
    Direction::Right,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectionCursor {
    ring: [Direction; 4],
}

impl DirectionCursor {
    pub fn new() -> Self {
        Self { ring: INITIAL }
    }

    /// Advance the ring by one position.
    pub fn next(&mut self, last: Option<Turn>) {
        match last {
            None | Some(Turn::Right) => self.ring.rotate_right(1),
            Some(Turn::Left) => self.ring.rotate_left(1),
        }
    }

    /// Advance using a raw turn label.
    ///
    /// `""` and `"right"` shift right, `"left"` shifts left, and any other
    /// label leaves the ring untouched. Labels are matched exactly.
    pub fn next_label(&mut self, last: &str) {
        match last {
            "" => self.next(None),
            "right" => self.next(Some(Turn::Right)),
            "left" => self.next(Some(Turn::Left)),
            _ => {}
        }
    }

    pub fn current(&self) -> Direction {
        self.ring[0]
    }

    pub fn ring(&self) -> &[Direction; 4] {
        &self.ring
    }
}

impl Default for DirectionCursor {
    fn default() -> Self {
        Self::new()
    }
}
