use bevy::{prelude::*, window::PresentMode};
use bevy_rapier2d::prelude::*;

use caper::camera::CameraPlugin;
use caper::player::{PlayerDebugPlugin, PlayerPlugin};
use caper::world::WorldPlugin;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Caper".to_string(),
                    present_mode: PresentMode::AutoNoVsync,
                    ..default()
                }),
                ..default()
            }),
        )
        .add_plugins(
            RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(100.0).in_fixed_schedule(),
        )
        // Advance the simulation by a constant step per FixedUpdate run
        .insert_resource(TimestepMode::Fixed {
            dt: 1.0 / 64.0,
            substeps: 1,
        })
        .add_plugins((WorldPlugin, PlayerPlugin, CameraPlugin, PlayerDebugPlugin))
        .run();
}
