//! Player entity state and physics constants

use elemental_simulation::ElementId;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::world::Aabb;

/// The player entity.
///
/// World coordinates follow screen convention: the Y axis points down, so
/// upward velocity is negative. `position` anchors the bottom center of the
/// bounding box and is kept on whole units to keep the tile math stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    pub grounded: bool,
    /// Active element (catalog index)
    pub element: u8,
    pub alive: bool,
    /// Where death puts us back
    pub spawn: Vec2,

    /// Time spent in the current jump ascent
    #[serde(skip)]
    pub jump_time: f32,
    /// Jump intent from the previous tick; a fresh ascent needs a fresh press
    #[serde(skip)]
    pub was_jumping: bool,
    /// Bounding-box bottom edge after the previous tick's resolution, for
    /// the platform "crossed the top" test
    #[serde(skip)]
    pub previous_bottom: f32,
}

impl Player {
    pub const WIDTH: f32 = 24.0; // world units
    pub const HEIGHT: f32 = 48.0; // world units

    // Constants for controlling horizontal movement
    pub const MOVE_ACCELERATION: f32 = 13000.0;
    pub const MAX_MOVE_SPEED: f32 = 1750.0;
    pub const GROUND_DRAG_FACTOR: f32 = 0.48;
    pub const AIR_DRAG_FACTOR: f32 = 0.58;

    // Constants for controlling vertical movement
    pub const MAX_JUMP_TIME: f32 = 0.35;
    pub const JUMP_LAUNCH_VELOCITY: f32 = -3500.0;
    pub const GRAVITY_ACCELERATION: f32 = 3400.0;
    pub const MAX_FALL_SPEED: f32 = 550.0;
    pub const JUMP_CONTROL_POWER: f32 = 0.14;

    /// Analog input below this magnitude reads as no input
    pub const ANALOG_DEAD_ZONE: f32 = 0.5;

    /// Create a player at its spawn point, in the base element
    pub fn new(spawn: Vec2) -> Self {
        let mut player = Self {
            position: spawn,
            velocity: Vec2::ZERO,
            grounded: false,
            element: ElementId::HYDROGEN,
            alive: true,
            spawn,
            jump_time: 0.0,
            was_jumping: false,
            previous_bottom: 0.0,
        };
        player.previous_bottom = player.bounds().bottom();
        player
    }

    /// Bounding box in world space, anchored at the bottom center
    pub fn bounds(&self) -> Aabb {
        Aabb::new(
            self.position.x - Self::WIDTH / 2.0,
            self.position.y - Self::HEIGHT,
            Self::WIDTH,
            Self::HEIGHT,
        )
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Restore spawn state: position, base element, cleared motion
    pub fn respawn(&mut self) {
        self.position = self.spawn;
        self.velocity = Vec2::ZERO;
        self.grounded = false;
        self.element = ElementId::HYDROGEN;
        self.alive = true;
        self.jump_time = 0.0;
        self.was_jumping = false;
        self.previous_bottom = self.bounds().bottom();
        log::debug!("player respawned at {:?}", self.spawn);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let player = Player::new(Vec2::new(100.0, 200.0));
        assert_eq!(player.position, Vec2::new(100.0, 200.0));
        assert_eq!(player.velocity, Vec2::ZERO);
        assert_eq!(player.element, ElementId::HYDROGEN);
        assert!(player.is_alive());
        assert!(!player.grounded);
    }

    #[test]
    fn test_bounds_anchor_at_bottom_center() {
        let player = Player::new(Vec2::new(100.0, 200.0));
        let bounds = player.bounds();

        assert_eq!(bounds.left, 100.0 - Player::WIDTH / 2.0);
        assert_eq!(bounds.right(), 100.0 + Player::WIDTH / 2.0);
        assert_eq!(bounds.bottom(), 200.0);
        assert_eq!(bounds.top, 200.0 - Player::HEIGHT);
    }

    #[test]
    fn test_respawn_restores_spawn_state() {
        let mut player = Player::new(Vec2::new(60.0, 96.0));
        player.position = Vec2::new(500.0, 700.0);
        player.velocity = Vec2::new(30.0, -40.0);
        player.element = ElementId::HELIUM;
        player.alive = false;
        player.jump_time = 0.2;
        player.was_jumping = true;

        player.respawn();

        assert_eq!(player.position, Vec2::new(60.0, 96.0));
        assert_eq!(player.velocity, Vec2::ZERO);
        assert_eq!(player.element, ElementId::HYDROGEN);
        assert!(player.alive);
        assert_eq!(player.jump_time, 0.0);
        assert!(!player.was_jumping);
        assert_eq!(player.previous_bottom, 96.0);
    }
}
