pub mod components;
pub mod debug;
pub mod rapier;
pub mod systems;

use bevy::prelude::*;
use bevy_rapier2d::plugin::PhysicsSet;

pub use components::{GroundSensor, Player, GROUND_GROUP, PLAYER_GROUP};
pub use debug::PlayerDebugPlugin;

use systems::{apply_visual_state, read_player_input, step_controller};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (read_player_input, apply_visual_state).chain())
            .add_systems(FixedUpdate, step_controller.before(PhysicsSet::SyncBackend));
    }
}
