use bevy::prelude::*;

use crate::player::Player;
use crate::world::LEVEL_HALF_WIDTH;

/// Marker for the main 2D camera.
#[derive(Component)]
pub struct MainCamera;

/// Fraction of the remaining distance closed per second.
const FOLLOW_RATE: f32 = 6.0;

/// Horizontal margin the camera keeps from the level edges.
const EDGE_MARGIN: f32 = 320.0;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((MainCamera, Camera2d));
}

pub fn follow_player(
    time: Res<Time>,
    player: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(target) = player.get_single() else {
        return;
    };
    let Ok(mut camera_transform) = camera.get_single_mut() else {
        return;
    };

    let goal = Vec2::new(
        target
            .translation
            .x
            .clamp(-LEVEL_HALF_WIDTH + EDGE_MARGIN, LEVEL_HALF_WIDTH - EDGE_MARGIN),
        target.translation.y,
    );
    let blend = (FOLLOW_RATE * time.delta_secs()).min(1.0);
    let next = camera_transform.translation.truncate().lerp(goal, blend);
    camera_transform.translation.x = next.x;
    camera_transform.translation.y = next.y;
}
