//! Entity-versus-grid collision resolution
//!
//! Scans every cell covered by the player's bounding box in row-major order
//! (top row first, left to right) and separates along the shallower axis.
//! Platforms are one-way: they only push back when the player's bottom edge
//! was at or above the tile top on the previous tick. Trigger tiles never
//! move the player but are reported for the reaction engine, in scan order.

use elemental_simulation::{TILE_HEIGHT, TILE_WIDTH, TileCollisionKind};
use smallvec::SmallVec;

use crate::entity::Player;
use crate::world::TileGrid;

/// A trigger cell overlapped during resolution
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchedTile {
    pub kind: TileCollisionKind,
    pub x: i32,
    pub y: i32,
}

/// Trigger tiles overlapped this tick, in scan order
pub type TouchedList = SmallVec<[TouchedTile; 8]>;

/// Separate the player from solid tiles and report every trigger tile
/// overlapped. Updates `grounded` and the stored previous-bottom edge.
pub fn resolve(player: &mut Player, grid: &TileGrid) -> TouchedList {
    let mut touched = TouchedList::new();
    let mut bounds = player.bounds();

    // Inclusive range of cells the bounding box covers
    let left_tile = (bounds.left / TILE_WIDTH).floor() as i32;
    let right_tile = (bounds.right() / TILE_WIDTH).ceil() as i32 - 1;
    let top_tile = (bounds.top / TILE_HEIGHT).floor() as i32;
    let bottom_tile = (bounds.bottom() / TILE_HEIGHT).ceil() as i32 - 1;

    // Reset flag to search for ground collision
    player.grounded = false;

    for y in top_tile..=bottom_tile {
        for x in left_tile..=right_tile {
            let kind = grid.kind_at(x, y);

            if matches!(
                kind,
                TileCollisionKind::Impassable
                    | TileCollisionKind::Platform
                    | TileCollisionKind::Water
                    | TileCollisionKind::Ice
            ) {
                let tile_bounds = grid.tile_bounds(x, y);
                if let Some(depth) = bounds.intersection_depth(&tile_bounds) {
                    // Resolve along the shallow axis; platforms only ever
                    // resolve vertically
                    if depth.y.abs() < depth.x.abs() || kind == TileCollisionKind::Platform {
                        // Crossing a tile top from above is what counts as
                        // standing on it
                        if player.previous_bottom <= tile_bounds.top {
                            player.grounded = true;
                        }

                        // Platforms don't push back unless we're on the
                        // ground; water and ice never push back at all
                        if kind == TileCollisionKind::Impassable
                            || (kind == TileCollisionKind::Platform && player.grounded)
                        {
                            player.position.y += depth.y;
                            bounds = player.bounds();
                        }
                    } else if kind == TileCollisionKind::Impassable {
                        player.position.x += depth.x;
                        bounds = player.bounds();
                    }
                }
            }

            if kind.is_trigger() {
                touched.push(TouchedTile { kind, x, y });
            }
        }
    }

    // Remembered for next tick's "came from above" platform test
    player.previous_bottom = bounds.bottom();

    touched
}
