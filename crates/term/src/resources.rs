//! Read-only rendering resources.
//!
//! Loaded once at startup and handed to the view by shared reference.

use crate::core::TileMap;
use crate::fb::{CellStyle, Rgb};

/// Cell styles standing in for the sprite images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub grass: CellStyle,
    /// Every other tile gets this shade so tile seams stay visible.
    pub grass_alt: CellStyle,
    pub empty: CellStyle,
    pub tank: CellStyle,
    pub barrel: CellStyle,
    pub projectile: Rgb,
    pub hud_label: CellStyle,
    pub hud_value: CellStyle,
}

impl Default for Palette {
    fn default() -> Self {
        let hud_bg = Rgb::new(0, 0, 0);
        Self {
            grass: CellStyle::new(Rgb::new(60, 120, 50), Rgb::new(58, 118, 48)),
            grass_alt: CellStyle::new(Rgb::new(66, 130, 56), Rgb::new(64, 128, 54)),
            empty: CellStyle::default(),
            tank: CellStyle::new(Rgb::new(110, 110, 80), Rgb::new(96, 96, 70)),
            barrel: CellStyle::new(Rgb::new(230, 230, 200), Rgb::new(96, 96, 70)).bold(),
            projectile: Rgb::new(255, 210, 60),
            hud_label: CellStyle::new(Rgb::new(220, 220, 220), hud_bg).bold(),
            hud_value: CellStyle::new(Rgb::new(200, 200, 200), hud_bg),
        }
    }
}

/// Everything the view needs besides the frame itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resources {
    pub tile_map: TileMap,
    pub palette: Palette,
}

impl Resources {
    pub fn new(tile_map: TileMap) -> Self {
        Self {
            tile_map,
            palette: Palette::default(),
        }
    }
}
