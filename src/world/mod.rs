pub mod setup;

use bevy::prelude::*;

use crate::config::load_tunables;
use setup::{setup_level, spawn_player};

// Level dimensions, in pixels
pub const LEVEL_HALF_WIDTH: f32 = 900.0;
pub const GROUND_TOP: f32 = -140.0;
pub const WALL_THICKNESS: f32 = 40.0;
pub const WALL_HEIGHT: f32 = 600.0;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (load_tunables, setup_level, spawn_player).chain());
    }
}
