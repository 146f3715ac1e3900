use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::config::SensorTuning;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Membership group for level geometry the ground sensor accepts.
pub const GROUND_GROUP: Group = Group::GROUP_1;

/// Membership group for the player body.
pub const PLAYER_GROUP: Group = Group::GROUP_2;

/// Geometry of the ground overlap probe, fixed at spawn time.
#[derive(Component, Debug, Clone, Copy)]
pub struct GroundSensor {
    /// Offset from the body origin to the probe center.
    pub offset: Vec2,
    pub radius: f32,
    /// Collision groups the probe is allowed to hit.
    pub mask: CollisionGroups,
}

impl GroundSensor {
    pub fn from_tuning(tuning: &SensorTuning) -> Self {
        Self {
            offset: Vec2::from(tuning.offset),
            radius: tuning.radius,
            mask: CollisionGroups::new(PLAYER_GROUP, GROUND_GROUP),
        }
    }
}
