//! Element and tile data for Elemental
//!
//! This crate provides the foundational data types for the platformer core:
//! - Element definitions (ElementId, ElementDef, ElementCatalog)
//! - Motion styles (MotionStyle)
//! - Tile collision kinds and metrics (TileCollisionKind, TILE_WIDTH, TILE_HEIGHT)

mod elements;
mod tile;

pub use elements::{CatalogError, ElementCatalog, ElementDef, ElementId, MotionStyle};
pub use tile::{TILE_HEIGHT, TILE_WIDTH, TileCollisionKind};
