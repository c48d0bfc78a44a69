//! Per-tick simulation orchestration
//!
//! One deterministic update per frame: element selection, then motion
//! integration, then collision separation, then hazard reactions, then the
//! fall-off and exit checks. State from tick N is the only input to tick
//! N+1; there is no lookahead and nothing runs concurrently.

pub mod collision;
pub mod events;
pub mod physics;
pub mod reactions;

pub use collision::{TouchedList, TouchedTile};
pub use events::{DeathCause, SimEvent, UNLOCK_DISPLAY_SECS};

use elemental_simulation::{CatalogError, ElementCatalog};

use crate::entity::{InputIntent, Player};
use crate::world::World;

/// One playable level being simulated
pub struct Simulation {
    world: World,
    player: Player,
    catalog: ElementCatalog,
    events: Vec<SimEvent>,
    reached_exit: bool,
}

impl Simulation {
    /// Start simulating a level.
    ///
    /// The catalog is validated here, before the first tick; a malformed
    /// catalog never reaches gameplay. Elements whose threshold the level
    /// index has passed come pre-unlocked.
    pub fn new(
        world: World,
        mut catalog: ElementCatalog,
        level_index: u32,
    ) -> Result<Self, CatalogError> {
        catalog.validate()?;
        catalog.unlock_for_level(level_index);
        let player = Player::new(world.spawn_point());
        Ok(Self {
            world,
            player,
            catalog,
            events: Vec::new(),
            reached_exit: false,
        })
    }

    /// Run one tick and return the events it produced.
    ///
    /// A dead player (and a finished level) freezes the simulation until
    /// `respawn` or teardown; ticks in that state are no-ops.
    pub fn update(&mut self, input: &InputIntent, dt: f32) -> Vec<SimEvent> {
        if self.player.alive && !self.reached_exit {
            if let Some(id) = input.element_select {
                self.select_element(id);
            }

            let element = self.catalog.get(self.player.element);
            let touched = physics::integrate(&mut self.player, element, &self.world.grid, input, dt);

            reactions::apply(
                &mut self.player,
                &mut self.catalog,
                &mut self.world.grid,
                &mut self.world.pickups,
                &touched,
                &mut self.events,
            );

            self.check_fall_death();
            self.check_exit();
        }

        std::mem::take(&mut self.events)
    }

    /// Switch the active element if the request is for an unlocked one.
    ///
    /// An id outside the catalog is a caller bug and aborts; a locked
    /// element is a normal gameplay "no" and is ignored.
    fn select_element(&mut self, id: u8) {
        assert!(
            (id as usize) < self.catalog.len(),
            "element select {id} outside catalog of {}",
            self.catalog.len()
        );
        if id != self.player.element && self.catalog.is_unlocked(id) {
            self.player.element = id;
            self.events.push(SimEvent::ElementChanged { element: id });
            log::debug!("player transformed into element {id}");
        }
    }

    // Falling off the bottom of the level kills the player
    fn check_fall_death(&mut self) {
        if self.player.alive && self.player.bounds().top >= self.world.grid.pixel_height() {
            reactions::kill(&mut self.player, DeathCause::Fell, &mut self.events);
        }
    }

    // The exit triggers once, while alive, when the bounding box contains
    // the exit cell's center
    fn check_exit(&mut self) {
        if !self.player.alive || self.reached_exit {
            return;
        }
        if let Some(center) = self.world.exit_center() {
            if self.player.bounds().contains(center) {
                self.reached_exit = true;
                self.events.push(SimEvent::ExitReached);
                log::debug!("exit reached");
            }
        }
    }

    /// Put the player back at the spawn point to try again
    pub fn respawn(&mut self) {
        self.player.respawn();
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn catalog(&self) -> &ElementCatalog {
        &self.catalog
    }

    pub fn reached_exit(&self) -> bool {
        self.reached_exit
    }
}
