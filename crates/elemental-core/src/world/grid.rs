//! Tile collision grid

use elemental_simulation::{TILE_HEIGHT, TILE_WIDTH, TileCollisionKind};
use serde::{Deserialize, Serialize};

use crate::world::Aabb;

/// Fixed-size grid of tile collision kinds for one level.
///
/// Queries outside the grid follow the level boundary policy: the sides are
/// sealed (Impassable) so the player cannot leave horizontally, while the top
/// and bottom are open (Passable) so jumps can cross the ceiling and falls
/// can leave the level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileGrid {
    width: i32,
    height: i32,
    cells: Vec<TileCollisionKind>,
}

impl TileGrid {
    /// Build a grid from row-major rows of kinds.
    ///
    /// Panics on an empty grid or ragged rows; the level pipeline must hand
    /// over a uniform rectangle of tiles.
    pub fn from_rows(rows: Vec<Vec<TileCollisionKind>>) -> Self {
        assert!(
            !rows.is_empty() && !rows[0].is_empty(),
            "level grid must contain at least one tile"
        );
        let width = rows[0].len();
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(
                row.len(),
                width,
                "length of row {y} differs from preceding rows"
            );
        }

        let height = rows.len();
        let cells = rows.into_iter().flatten().collect();
        Self {
            width: width as i32,
            height: height as i32,
            cells,
        }
    }

    /// Width of the level measured in tiles
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the level measured in tiles
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total level height in world units
    pub fn pixel_height(&self) -> f32 {
        self.height as f32 * TILE_HEIGHT
    }

    /// Collision kind at a cell, applying the boundary policy out of range
    pub fn kind_at(&self, x: i32, y: i32) -> TileCollisionKind {
        // Prevent escaping past the level sides
        if x < 0 || x >= self.width {
            return TileCollisionKind::Impassable;
        }
        // Allow jumping past the top and falling through the bottom
        if y < 0 || y >= self.height {
            return TileCollisionKind::Passable;
        }

        self.cells[(y * self.width + x) as usize]
    }

    /// Rewrite the kind of one in-bounds cell (pickup collected, hazard
    /// neutralized)
    pub fn replace_kind(&mut self, x: i32, y: i32, kind: TileCollisionKind) {
        assert!(
            x >= 0 && x < self.width && y >= 0 && y < self.height,
            "replace_kind({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        self.cells[(y * self.width + x) as usize] = kind;
    }

    /// World-space bounds of a cell
    pub fn tile_bounds(&self, x: i32, y: i32) -> Aabb {
        Aabb::new(
            x as f32 * TILE_WIDTH,
            y as f32 * TILE_HEIGHT,
            TILE_WIDTH,
            TILE_HEIGHT,
        )
    }
}
