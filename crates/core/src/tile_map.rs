//! Background tile map.

use crate::types::{TileKind, GRASS_SIZE};

/// Built-in layout: 3 rows x 5 columns of grass.
pub const DEFAULT_TILES: [[u8; 5]; 3] = [
    [1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1],
];

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TileMapError {
    #[error("tile map has no tiles")]
    Empty,

    #[error("tile map row {row} has {found} tiles, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Rectangular grid of tile codes, read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    cols: usize,
    rows: usize,
    tiles: Vec<u8>,
}

impl TileMap {
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, TileMapError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(TileMapError::Empty);
        }
        let mut tiles = Vec::with_capacity(cols * rows.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(TileMapError::Ragged {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            tiles.extend_from_slice(row);
        }
        Ok(Self {
            cols,
            rows: rows.len(),
            tiles,
        })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, col: usize, row: usize) -> Option<TileKind> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(TileKind::from_code(self.tiles[row * self.cols + col]))
    }

    /// Iterate `(world_x, world_y, kind)` for every tile, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, TileKind)> + '_ {
        self.tiles.iter().enumerate().map(move |(i, &code)| {
            let col = (i % self.cols) as i32;
            let row = (i / self.cols) as i32;
            (col * GRASS_SIZE, row * GRASS_SIZE, TileKind::from_code(code))
        })
    }
}

impl Default for TileMap {
    fn default() -> Self {
        Self {
            cols: DEFAULT_TILES[0].len(),
            rows: DEFAULT_TILES.len(),
            tiles: DEFAULT_TILES.iter().flatten().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_map_is_all_grass() {
        let m = TileMap::default();
        assert_eq!((m.cols(), m.rows()), (5, 3));
        assert!(m.iter().all(|(_, _, k)| k == TileKind::Grass));
    }

    #[test]
    fn iter_yields_world_origins() {
        let m = TileMap::from_rows(vec![vec![1, 0], vec![0, 1]]).unwrap();
        let tiles: Vec<_> = m.iter().collect();
        assert_eq!(
            tiles,
            vec![
                (0, 0, TileKind::Grass),
                (GRASS_SIZE, 0, TileKind::Empty),
                (0, GRASS_SIZE, TileKind::Empty),
                (GRASS_SIZE, GRASS_SIZE, TileKind::Grass),
            ]
        );
    }

    #[test]
    fn rejects_empty_and_ragged_maps() {
        assert_eq!(TileMap::from_rows(vec![]), Err(TileMapError::Empty));
        assert_eq!(TileMap::from_rows(vec![vec![]]), Err(TileMapError::Empty));
        assert_eq!(
            TileMap::from_rows(vec![vec![1, 1], vec![1]]),
            Err(TileMapError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn get_is_bounds_checked() {
        let m = TileMap::default();
        assert_eq!(m.get(4, 2), Some(TileKind::Grass));
        assert_eq!(m.get(5, 0), None);
        assert_eq!(m.get(0, 3), None);
    }
}
