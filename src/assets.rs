//! Startup resource loading.
//!
//! Everything here runs once before the terminal enters raw mode. Any failure
//! is fatal: `main` reports it and exits non-zero.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::GameConfig;
use crate::core::TileMap;
use crate::term::Resources;

/// Build the resource bundle for a session.
pub fn load_resources(config: &GameConfig) -> Result<Resources> {
    let tile_map = match config.map_path.as_deref() {
        Some(path) => load_tile_map(path)?,
        None => TileMap::default(),
    };
    Ok(Resources::new(tile_map))
}

/// Load a tile map stored as a JSON array of rows, e.g. `[[1,1],[1,0]]`.
pub fn load_tile_map(path: &Path) -> Result<TileMap> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("load tile map {}", path.display()))?;
    parse_tile_map(&text).with_context(|| format!("parse tile map {}", path.display()))
}

pub fn parse_tile_map(text: &str) -> Result<TileMap> {
    let rows: Vec<Vec<u8>> = serde_json::from_str(text)?;
    Ok(TileMap::from_rows(rows)?)
}
