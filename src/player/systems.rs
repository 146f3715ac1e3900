use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{GroundSensor, Player};
use super::rapier::RapierHost;
use crate::controller::{AnimationParams, PlayerController};

/// Translates keyboard state into the controller's input callbacks.
///
/// A/D and the arrow keys form the move axis, Space is the jump button. The
/// controller itself is binding-agnostic; swapping devices only touches this
/// system.
pub fn read_player_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut PlayerController, With<Player>>,
) {
    let mut axis = 0.0;
    if keyboard_input.pressed(KeyCode::KeyA) || keyboard_input.pressed(KeyCode::ArrowLeft) {
        axis -= 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyD) || keyboard_input.pressed(KeyCode::ArrowRight) {
        axis += 1.0;
    }

    let jump_pressed = keyboard_input.just_pressed(KeyCode::Space);
    let jump_released = keyboard_input.just_released(KeyCode::Space);

    for mut controller in query.iter_mut() {
        controller.on_move_input(Vec2::new(axis, 0.0));
        if jump_pressed {
            controller.on_jump_input(true);
        }
        if jump_released {
            controller.on_jump_input(false);
        }
    }
}

/// Fixed-step controller update against the Rapier state.
///
/// Runs before Rapier syncs component state into its world, so the velocity
/// and gravity-scale writes land in the same simulation step.
pub fn step_controller(
    rapier: ReadDefaultRapierContext,
    mut query: Query<
        (
            Entity,
            &Transform,
            &GroundSensor,
            &mut PlayerController,
            &mut Velocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    let context = &*rapier;
    for (entity, transform, sensor, mut controller, mut velocity, mut gravity) in query.iter_mut() {
        let mut host = RapierHost {
            context,
            body: entity,
            origin: transform.translation.truncate(),
            sensor,
            velocity: &mut *velocity,
            gravity: &mut *gravity,
        };
        controller.tick_physics(&mut host);
    }
}

/// Per-frame visual update: sprite mirroring and animation parameters.
pub fn apply_visual_state(
    mut query: Query<
        (
            &mut PlayerController,
            &Velocity,
            &mut Transform,
            &mut AnimationParams,
        ),
        With<Player>,
    >,
) {
    for (mut controller, velocity, mut transform, mut params) in query.iter_mut() {
        let frame = controller.tick_visual(velocity.linvel.y);
        transform.scale.x = transform.scale.x.abs() * frame.facing.sign();
        *params = frame.params;
    }
}
