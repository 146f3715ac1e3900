//! Caper: a small 2D platformer built around an engine-agnostic player
//! controller wired to Rapier as its physics host.

pub mod camera;
pub mod config;
pub mod controller;
pub mod player;
pub mod world;

pub use config::{ConfigError, PlayerConfig, SensorTuning};
pub use controller::{
    AnimationParams, Facing, JumpCommand, MovementTuning, PhysicsHost, PlayerController,
    VisualFrame, AXIS_DEADZONE, VELOCITY_EPSILON,
};
