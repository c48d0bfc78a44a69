//! Transform pickups
//!
//! Grid cells that grant an element on first contact. Built once from the
//! grid at level load; a collected pickup leaves the set and its cell never
//! triggers again.

use elemental_simulation::TileCollisionKind;
use serde::{Deserialize, Serialize};

use crate::world::TileGrid;

/// One uncollected transform pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformPickup {
    pub cell: (i32, i32),
    /// Element granted on collection
    pub element: u8,
    pub collected: bool,
}

/// The level's live pickups
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PickupSet {
    pickups: Vec<TransformPickup>,
}

impl PickupSet {
    /// Scan a grid for transform cells
    pub fn from_grid(grid: &TileGrid) -> Self {
        let mut pickups = Vec::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if let TileCollisionKind::Transform(element) = grid.kind_at(x, y) {
                    pickups.push(TransformPickup {
                        cell: (x, y),
                        element,
                        collected: false,
                    });
                }
            }
        }
        Self { pickups }
    }

    /// Collect the pickup at a cell, returning the element it grants.
    ///
    /// Returns `None` if the cell has no live pickup; collection is
    /// idempotent because the pickup leaves the set.
    pub fn collect_at(&mut self, cell: (i32, i32)) -> Option<u8> {
        let index = self.pickups.iter().position(|p| p.cell == cell)?;
        self.pickups[index].collected = true;
        let pickup = self.pickups.remove(index);
        log::debug!(
            "pickup at {:?} collected, grants element {}",
            pickup.cell,
            pickup.element
        );
        Some(pickup.element)
    }

    pub fn remaining(&self) -> usize {
        self.pickups.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransformPickup> {
        self.pickups.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elemental_simulation::TileCollisionKind::*;

    #[test]
    fn test_from_grid_finds_transform_cells() {
        let grid = TileGrid::from_rows(vec![
            vec![Passable, Transform(1), Passable],
            vec![Transform(3), Passable, Passable],
        ]);
        let pickups = PickupSet::from_grid(&grid);
        assert_eq!(pickups.remaining(), 2);

        let cells: Vec<_> = pickups.iter().map(|p| p.cell).collect();
        assert!(cells.contains(&(1, 0)));
        assert!(cells.contains(&(0, 1)));
    }

    #[test]
    fn test_collect_is_idempotent() {
        let grid = TileGrid::from_rows(vec![vec![Transform(2)]]);
        let mut pickups = PickupSet::from_grid(&grid);

        assert_eq!(pickups.collect_at((0, 0)), Some(2));
        assert_eq!(pickups.remaining(), 0);

        // Second touch of the same cell finds nothing
        assert_eq!(pickups.collect_at((0, 0)), None);
    }

    #[test]
    fn test_collect_wrong_cell() {
        let grid = TileGrid::from_rows(vec![vec![Transform(2), Passable]]);
        let mut pickups = PickupSet::from_grid(&grid);
        assert_eq!(pickups.collect_at((1, 0)), None);
        assert_eq!(pickups.remaining(), 1);
    }
}
