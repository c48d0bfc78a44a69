//! Tile collision kinds and metrics
//!
//! Foundational types for the level grid. The level collaborator parses its
//! source format (characters, tilemaps, whatever) into these kinds before the
//! core ever sees them.

use serde::{Deserialize, Serialize};

/// Width of a tile in world units
pub const TILE_WIDTH: f32 = 40.0;

/// Height of a tile in world units
pub const TILE_HEIGHT: f32 = 32.0;

/// Controls the collision behavior of one grid cell.
///
/// Only `Impassable` and `Platform` take part in positional separation. All
/// the other non-passable kinds are triggers: detected by overlap, handled by
/// the reaction engine, never blocking motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileCollisionKind {
    /// Does not hinder motion at all
    Passable,
    /// Completely solid
    Impassable,
    /// Solid only when crossed from above; passable from below and the sides
    Platform,
    /// Lethal on contact regardless of element
    Spikes,
    /// Lethal to flammable elements; neutralized by cryogenic ones
    Fire,
    /// Lethal to gaseous elements only
    Heat,
    /// Lethal unless the element is cryogenic
    Ice,
    /// Lethal unless the element is buoyant or cryogenic
    Water,
    /// Lethal unless the element is buoyant, cryogenic or gaseous
    Debris,
    /// Lethal on contact
    Enemy,
    /// Unlocks the element with this id on first contact
    Transform(u8),
}

impl TileCollisionKind {
    /// Kinds that take part in positional separation
    pub fn blocks_motion(self) -> bool {
        matches!(self, Self::Impassable | Self::Platform)
    }

    /// Kinds recorded in the touched list for the reaction engine
    pub fn is_trigger(self) -> bool {
        matches!(
            self,
            Self::Spikes
                | Self::Fire
                | Self::Heat
                | Self::Ice
                | Self::Water
                | Self::Debris
                | Self::Enemy
                | Self::Transform(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocking_kinds() {
        assert!(TileCollisionKind::Impassable.blocks_motion());
        assert!(TileCollisionKind::Platform.blocks_motion());

        assert!(!TileCollisionKind::Passable.blocks_motion());
        assert!(!TileCollisionKind::Water.blocks_motion());
        assert!(!TileCollisionKind::Spikes.blocks_motion());
        assert!(!TileCollisionKind::Transform(1).blocks_motion());
    }

    #[test]
    fn test_trigger_kinds() {
        assert!(TileCollisionKind::Spikes.is_trigger());
        assert!(TileCollisionKind::Fire.is_trigger());
        assert!(TileCollisionKind::Heat.is_trigger());
        assert!(TileCollisionKind::Ice.is_trigger());
        assert!(TileCollisionKind::Water.is_trigger());
        assert!(TileCollisionKind::Debris.is_trigger());
        assert!(TileCollisionKind::Enemy.is_trigger());
        assert!(TileCollisionKind::Transform(3).is_trigger());

        assert!(!TileCollisionKind::Passable.is_trigger());
        assert!(!TileCollisionKind::Impassable.is_trigger());
        assert!(!TileCollisionKind::Platform.is_trigger());
    }
}
