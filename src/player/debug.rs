//! Debug-only visualization of the ground sensor.

use bevy::prelude::*;

use super::components::{GroundSensor, Player};

/// Whether the sensor overlay is drawn. Off by default, toggled with F3.
#[derive(Resource, Default)]
pub struct SensorOverlay(pub bool);

/// Draws the ground-probe circle as a wireframe gizmo. Registered by the
/// binary rather than [`super::PlayerPlugin`] so headless hosts skip it.
pub struct PlayerDebugPlugin;

impl Plugin for PlayerDebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SensorOverlay>()
            .add_systems(Update, (toggle_overlay, draw_ground_sensor).chain());
    }
}

fn toggle_overlay(keyboard_input: Res<ButtonInput<KeyCode>>, mut overlay: ResMut<SensorOverlay>) {
    if keyboard_input.just_pressed(KeyCode::F3) {
        overlay.0 = !overlay.0;
        info!(
            "Ground sensor overlay {}",
            if overlay.0 { "on" } else { "off" }
        );
    }
}

fn draw_ground_sensor(
    overlay: Res<SensorOverlay>,
    mut gizmos: Gizmos,
    query: Query<(&Transform, &GroundSensor), With<Player>>,
) {
    if !overlay.0 {
        return;
    }
    for (transform, sensor) in query.iter() {
        let center = transform.translation.truncate() + sensor.offset;
        gizmos.circle_2d(center, sensor.radius, Color::srgb(1.0, 0.2, 0.2));
    }
}
