//! Rapier-backed implementation of the controller's physics capability.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::GroundSensor;
use crate::controller::PhysicsHost;

/// Borrows one body's Rapier state for the duration of a physics tick.
///
/// Velocity and gravity scale are the entity's own components; the ground
/// probe is a circle overlap query against the sensor's collision mask,
/// excluding the body's own collider.
pub struct RapierHost<'a> {
    pub context: &'a RapierContext,
    pub body: Entity,
    /// Body origin in world space this tick.
    pub origin: Vec2,
    pub sensor: &'a GroundSensor,
    pub velocity: &'a mut Velocity,
    pub gravity: &'a mut GravityScale,
}

impl PhysicsHost for RapierHost<'_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.linvel
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.linvel = velocity;
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity.0 = scale;
    }

    fn probe_ground(&self) -> bool {
        let filter = QueryFilter::new()
            .groups(self.sensor.mask)
            .exclude_collider(self.body);
        self.context
            .intersection_with_shape(
                self.origin + self.sensor.offset,
                0.0,
                &Collider::ball(self.sensor.radius),
                filter,
            )
            .is_some()
    }
}
