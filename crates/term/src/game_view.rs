//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The 1280x720 world is stretched over the viewport: world x maps to
//! `x * cols / WIDTH`, world y to `y * rows / HEIGHT`. Every visible sprite
//! covers at least one cell.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::resources::Resources;
use crate::types::{Direction, Rect, TileKind, GRASS_SIZE, HEIGHT, WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the tank game.
pub struct GameView {
    /// Reserve the bottom row for the status strip.
    hud: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self { hud: true }
    }
}

impl GameView {
    pub fn with_hud(mut self, hud: bool) -> Self {
        self.hud = hud;
        self
    }

    /// Rows available to the playfield.
    pub fn play_rows(&self, viewport: Viewport) -> u16 {
        if self.hud && viewport.height >= 2 {
            viewport.height - 1
        } else {
            viewport.height
        }
    }

    /// Render the frame into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        res: &Resources,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(res.palette.empty.into_cell(' '));

        let cols = viewport.width;
        let rows = self.play_rows(viewport);
        if cols == 0 || rows == 0 {
            return;
        }

        // Background tiles.
        for (wx, wy, kind) in res.tile_map.iter() {
            if kind != TileKind::Grass {
                continue;
            }
            let shade = ((wx / GRASS_SIZE) + (wy / GRASS_SIZE)) % 2 == 1;
            let style = if shade {
                res.palette.grass_alt
            } else {
                res.palette.grass
            };
            let tile = Rect::new(wx, wy, GRASS_SIZE, GRASS_SIZE);
            fill_world_rect(fb, tile, cols, rows, ' ', style);
        }

        // Tank body, then the barrel marker at its center.
        let tank = snap.tank.rect;
        fill_world_rect(fb, tank, cols, rows, ' ', res.palette.tank);
        let cx = span_center(tank.x, tank.w, WIDTH, cols);
        let cy = span_center(tank.y, tank.h, HEIGHT, rows);
        if let (Some(cx), Some(cy)) = (cx, cy) {
            fb.put_char(cx, cy, barrel_glyph(snap.tank.sprite_degrees), res.palette.barrel);
        }

        // Projectiles keep whatever background they fly over.
        let glyph = projectile_glyph(snap.tank.facing);
        for p in snap.projectiles.iter() {
            let xs = cell_span(p.rect.x, p.rect.w, WIDTH, cols);
            let ys = cell_span(p.rect.y, p.rect.h, HEIGHT, rows);
            if let (Some((x, _)), Some((y, _))) = (xs, ys) {
                fb.overlay_char(x, y, glyph, res.palette.projectile, true);
            }
        }

        if rows < viewport.height {
            self.draw_hud(fb, snap, res, rows, cols);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, res: &Resources, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, res, viewport, &mut fb);
        fb
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, res: &Resources, y: u16, cols: u16) {
        let label = res.palette.hud_label;
        let value = res.palette.hud_value;

        let mut x = 1u16;
        x += fb.put_str(x, y, "AMMO ", label);
        x += fb.put_u32(x, y, snap.shots_left(), value);
        x += 2;
        if x >= cols {
            return;
        }
        x += fb.put_str(x, y, "FACING ", label);
        x += fb.put_str(x, y, snap.tank.facing.as_str(), value);
        x += 2;
        if x >= cols {
            return;
        }
        x += fb.put_str(x, y, "LIVE ", label);
        fb.put_u32(x, y, snap.projectiles.len() as u32, value);
    }
}

fn fill_world_rect(fb: &mut FrameBuffer, r: Rect, cols: u16, rows: u16, ch: char, style: CellStyle) {
    let xs = cell_span(r.x, r.w, WIDTH, cols);
    let ys = cell_span(r.y, r.h, HEIGHT, rows);
    if let (Some((x, w)), Some((y, h))) = (xs, ys) {
        fb.fill_rect(x, y, w, h, ch, style);
    }
}

fn project(v: i32, world: i32, cells: u16) -> i64 {
    (v as i64 * cells as i64).div_euclid(world as i64)
}

/// Unclipped `[start, end)` cell range covered by a world span.
fn raw_span(start: i32, len: i32, world: i32, cells: u16) -> (i64, i64) {
    let a = project(start, world, cells);
    let b = project(start + len, world, cells).max(a + 1);
    (a, b)
}

/// Visible `(first_cell, cell_count)` of a world span, or `None` when off-screen.
fn cell_span(start: i32, len: i32, world: i32, cells: u16) -> Option<(u16, u16)> {
    let (a, b) = raw_span(start, len, world, cells);
    let a = a.max(0);
    let b = b.min(cells as i64);
    if a >= b {
        return None;
    }
    Some((a as u16, (b - a) as u16))
}

fn span_center(start: i32, len: i32, world: i32, cells: u16) -> Option<u16> {
    let (a, b) = raw_span(start, len, world, cells);
    let c = (a + b - 1) / 2;
    if c < 0 || c >= cells as i64 {
        return None;
    }
    Some(c as u16)
}

fn barrel_glyph(sprite_degrees: i32) -> char {
    match sprite_degrees.rem_euclid(360) {
        90 => '◀',
        180 => '▼',
        270 => '▶',
        _ => '▲',
    }
}

fn projectile_glyph(facing: Direction) -> char {
    if facing.is_horizontal() {
        '─'
    } else {
        '│'
    }
}
