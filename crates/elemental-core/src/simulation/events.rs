//! Events emitted toward the presentation collaborator
//!
//! Death sounds, unlock overlays and exit fanfare are the host's business;
//! the core only reports what happened and when.

use elemental_simulation::TileCollisionKind;
use serde::{Deserialize, Serialize};

/// How long the host should keep the unlock overlay up, in seconds
pub const UNLOCK_DISPLAY_SECS: f32 = 10.0;

/// What ended the player's life
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    Spikes,
    Fire,
    Heat,
    Ice,
    Water,
    Debris,
    Enemy,
    /// Dropped past the bottom of the level
    Fell,
}

impl DeathCause {
    /// Cause tag for a lethal tile kind
    pub(crate) fn from_kind(kind: TileCollisionKind) -> Self {
        match kind {
            TileCollisionKind::Spikes => Self::Spikes,
            TileCollisionKind::Fire => Self::Fire,
            TileCollisionKind::Heat => Self::Heat,
            TileCollisionKind::Ice => Self::Ice,
            TileCollisionKind::Water => Self::Water,
            TileCollisionKind::Debris => Self::Debris,
            TileCollisionKind::Enemy => Self::Enemy,
            other => panic!("tile kind {other:?} cannot kill"),
        }
    }
}

/// One thing the simulation did this tick that the host needs to hear about
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    PlayerDied {
        cause: DeathCause,
    },
    ElementUnlocked {
        element: u8,
        /// Suggested overlay duration
        display_secs: f32,
    },
    /// The player switched to a different (unlocked) element
    ElementChanged {
        element: u8,
    },
    ExitReached,
}
