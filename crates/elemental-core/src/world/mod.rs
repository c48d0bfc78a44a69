//! Level container: grid, pickups, spawn and exit

pub mod aabb;
pub mod grid;
pub mod pickups;

pub use aabb::Aabb;
pub use grid::TileGrid;
pub use pickups::{PickupSet, TransformPickup};

use glam::Vec2;

/// A loaded level as the simulation sees it: final collision kinds only.
///
/// Parsing level files into kinds (including things like picking spike
/// orientations from neighboring cells) happens in the level collaborator
/// before this is built.
#[derive(Debug, Clone)]
pub struct World {
    pub grid: TileGrid,
    pub pickups: PickupSet,
    spawn: Vec2,
    exit: Option<(i32, i32)>,
}

impl World {
    /// Build a level from its collision grid. The spawn cell anchors the
    /// player at its bottom center; pickups are collected from the grid's
    /// transform cells.
    pub fn new(grid: TileGrid, spawn_cell: (i32, i32), exit_cell: Option<(i32, i32)>) -> Self {
        let pickups = PickupSet::from_grid(&grid);
        let spawn = grid.tile_bounds(spawn_cell.0, spawn_cell.1).bottom_center();
        Self {
            grid,
            pickups,
            spawn,
            exit: exit_cell,
        }
    }

    /// Where the player comes to life
    pub fn spawn_point(&self) -> Vec2 {
        self.spawn
    }

    /// World-space center of the exit cell, if the level has one
    pub fn exit_center(&self) -> Option<Vec2> {
        self.exit
            .map(|(x, y)| self.grid.tile_bounds(x, y).center())
    }
}
