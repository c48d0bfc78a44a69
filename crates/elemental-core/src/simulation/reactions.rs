//! Element-versus-hazard outcomes
//!
//! Consumes the resolver's touched list in scan order. The same tile kind
//! can mean death, a free pass, or a world mutation depending on the active
//! element's flags. Death ends the tick: entries after the first lethal one
//! are skipped, while everything applied before it stands.

use elemental_simulation::{ElementCatalog, TileCollisionKind};

use crate::entity::Player;
use crate::simulation::collision::TouchedTile;
use crate::simulation::events::{DeathCause, SimEvent, UNLOCK_DISPLAY_SECS};
use crate::world::{PickupSet, TileGrid};

/// Apply every touched tile's outcome to the player and the world
pub fn apply(
    player: &mut Player,
    catalog: &mut ElementCatalog,
    grid: &mut TileGrid,
    pickups: &mut PickupSet,
    touched: &[TouchedTile],
    events: &mut Vec<SimEvent>,
) {
    for tile in touched {
        if !player.alive {
            break;
        }

        match tile.kind {
            TileCollisionKind::Spikes | TileCollisionKind::Enemy => {
                kill(player, DeathCause::from_kind(tile.kind), events);
            }

            TileCollisionKind::Fire => {
                let element = catalog.get(player.element);
                if element.cryogenic {
                    // Put the fire out
                    grid.replace_kind(tile.x, tile.y, TileCollisionKind::Passable);
                    log::debug!("fire at ({}, {}) neutralized", tile.x, tile.y);
                } else if element.flammable {
                    kill(player, DeathCause::Fire, events);
                }
            }

            TileCollisionKind::Heat => {
                if catalog.get(player.element).gaseous {
                    kill(player, DeathCause::Heat, events);
                }
            }

            TileCollisionKind::Ice => {
                if !catalog.get(player.element).cryogenic {
                    kill(player, DeathCause::Ice, events);
                }
            }

            TileCollisionKind::Water => {
                let element = catalog.get(player.element);
                if !(element.buoyant || element.cryogenic) {
                    kill(player, DeathCause::Water, events);
                }
            }

            TileCollisionKind::Debris => {
                let element = catalog.get(player.element);
                if !(element.buoyant || element.cryogenic || element.gaseous) {
                    kill(player, DeathCause::Debris, events);
                }
            }

            TileCollisionKind::Transform(_) => {
                if let Some(element) = pickups.collect_at((tile.x, tile.y)) {
                    grid.replace_kind(tile.x, tile.y, TileCollisionKind::Passable);
                    catalog.unlock(element);
                    events.push(SimEvent::ElementUnlocked {
                        element,
                        display_secs: UNLOCK_DISPLAY_SECS,
                    });
                }
            }

            // Never appear in the touched list
            TileCollisionKind::Passable
            | TileCollisionKind::Impassable
            | TileCollisionKind::Platform => {}
        }
    }
}

/// Flip the player dead and report the cause
pub(crate) fn kill(player: &mut Player, cause: DeathCause, events: &mut Vec<SimEvent>) {
    player.alive = false;
    events.push(SimEvent::PlayerDied { cause });
    log::debug!("player killed by {:?}", cause);
}
