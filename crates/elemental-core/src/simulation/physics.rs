//! Movement integration and the jump arc
//!
//! One tick of platformer physics: input acceleration, gravity (flipped for
//! rising elements), the jump power curve, drag, clamping, integration, then
//! collision separation. Positions land on whole units so the tile math
//! stays stable across ticks.

use elemental_simulation::{ElementDef, MotionStyle};

use crate::entity::{InputIntent, Player};
use crate::simulation::collision::{self, TouchedList};
use crate::world::TileGrid;

/// Apply one tick of movement to the player and resolve it against the
/// grid. Returns the trigger tiles overlapped after separation.
pub fn integrate(
    player: &mut Player,
    element: &ElementDef,
    grid: &TileGrid,
    input: &InputIntent,
    dt: f32,
) -> TouchedList {
    let previous_position = player.position;

    // Base velocity combines horizontal movement control with gravity
    let movement = horizontal_movement(element, input);
    player.velocity.x += movement * Player::MOVE_ACCELERATION * dt;

    // Hovering elements steer vertically instead of jumping
    if element.motion == MotionStyle::Hovering {
        if input.up_pressed {
            player.velocity.y -= element.speed * Player::MOVE_ACCELERATION * dt;
        } else if input.down_pressed {
            player.velocity.y += element.speed * Player::MOVE_ACCELERATION * dt;
        }
    }

    let gravity = match element.motion {
        MotionStyle::Rising => -Player::GRAVITY_ACCELERATION,
        _ => Player::GRAVITY_ACCELERATION,
    };
    player.velocity.y = (player.velocity.y + gravity * dt)
        .clamp(-Player::MAX_FALL_SPEED, Player::MAX_FALL_SPEED);

    if element.motion != MotionStyle::Hovering {
        player.velocity.y = jump_velocity(player, input.jump_pressed, element.jump, player.velocity.y, dt);
    }

    // Pseudo-drag, then the top speed limit
    if player.grounded {
        player.velocity.x *= Player::GROUND_DRAG_FACTOR;
    } else {
        player.velocity.x *= Player::AIR_DRAG_FACTOR;
    }
    player.velocity.x = player
        .velocity
        .x
        .clamp(-Player::MAX_MOVE_SPEED, Player::MAX_MOVE_SPEED);
    player.velocity.y = player
        .velocity
        .y
        .clamp(-Player::MAX_MOVE_SPEED, Player::MAX_MOVE_SPEED);

    player.position += player.velocity * dt;
    player.position = player.position.round();

    let touched = collision::resolve(player, grid);

    // If the collision stopped us from moving, reset the velocity to zero
    if player.position.x == previous_position.x {
        player.velocity.x = 0.0;
    }
    if player.position.y == previous_position.y {
        player.velocity.y = 0.0;
    }

    touched
}

/// Effective horizontal input: digital direction overrides the analog axis
/// and carries the element's speed multiplier.
fn horizontal_movement(element: &ElementDef, input: &InputIntent) -> f32 {
    if input.left_pressed {
        -element.speed
    } else if input.right_pressed {
        element.speed
    } else if input.horizontal_axis.abs() >= Player::ANALOG_DEAD_ZONE {
        input.horizontal_axis
    } else {
        // Ignore small movements to prevent running in place
        0.0
    }
}

/// Y velocity accounting for jumping.
///
/// During the ascent the velocity is completely overridden by a power curve,
/// which gives more height the longer the button is held; releasing early
/// produces a shorter hop. Past the ascent window gravity takes over.
fn jump_velocity(
    player: &mut Player,
    jumping: bool,
    jump_multiplier: f32,
    mut velocity_y: f32,
    dt: f32,
) -> f32 {
    if jumping {
        // Begin or continue a jump
        if (!player.was_jumping && player.grounded) || player.jump_time > 0.0 {
            if player.jump_time == 0.0 {
                log::debug!("jump started");
            }
            player.jump_time += dt;
        }

        if 0.0 < player.jump_time && player.jump_time <= Player::MAX_JUMP_TIME {
            velocity_y = Player::JUMP_LAUNCH_VELOCITY
                * (jump_multiplier
                    - (player.jump_time / Player::MAX_JUMP_TIME).powf(Player::JUMP_CONTROL_POWER));
        } else {
            // Reached the apex of the jump
            player.jump_time = 0.0;
        }
    } else {
        // Continues not jumping or cancels a jump in progress
        player.jump_time = 0.0;
    }
    player.was_jumping = jumping;

    velocity_y
}
