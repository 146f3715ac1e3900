//! Engine-agnostic player controller: horizontal movement, variable-gravity
//! jumping with jump-cut, ground sensing, facing, and animation signaling.
//!
//! The controller never talks to a physics engine directly; it reads and
//! overwrites host-owned kinematic state through [`PhysicsHost`]. Any host
//! loop can drive it by calling [`PlayerController::tick_physics`] at a fixed
//! rate and [`PlayerController::tick_visual`] once per rendered frame.

use bevy::math::Vec2;
use bevy::prelude::Component;
use serde::Deserialize;

/// Input magnitude below which the move axis is treated as neutral.
pub const AXIS_DEADZONE: f32 = 0.1;

/// Vertical-speed band treated as "not moving" by gravity selection and
/// animation signaling. Prevents chatter when hovering near zero.
pub const VELOCITY_EPSILON: f32 = 0.1;

/// Movement tunables, fixed at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Horizontal speed at full axis deflection (px/s).
    pub move_speed: f32,
    /// Vertical velocity set on a successful jump (px/s).
    pub jump_impulse: f32,
    /// Factor applied to upward velocity when the jump button is released
    /// early.
    pub jump_cut_multiplier: f32,
    /// Gravity scale while vertical speed sits inside the deadband.
    pub normal_gravity: f32,
    /// Gravity scale while falling.
    pub fall_gravity: f32,
    /// Gravity scale while rising.
    pub jump_gravity: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 220.0,
            jump_impulse: 420.0,
            jump_cut_multiplier: 0.5,
            normal_gravity: 1.0,
            fall_gravity: 2.4,
            jump_gravity: 1.5,
        }
    }
}

/// Horizontal facing of the sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Mirror sign for the horizontal transform scale.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Jump request lifecycle.
///
/// A press moves to `Requested`; a grounded physics tick consumes it into
/// `Consumed`. A request made while airborne stays `Requested` until the
/// character lands, so jumps are effectively buffered — releasing the button
/// does not cancel a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpCommand {
    #[default]
    None,
    Requested,
    Consumed,
}

/// Named animation parameters pushed to the animation host every visual tick.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationParams {
    pub is_jumping: bool,
    pub is_grounded: bool,
    /// True only while grounded with the move axis inside the deadzone;
    /// always false airborne.
    pub is_idle: bool,
    /// True only while grounded with the move axis outside the deadzone;
    /// always false airborne.
    pub is_walking: bool,
    pub y_velocity: f32,
}

/// Result of a visual tick: facing plus the animation parameters to push.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualFrame {
    pub facing: Facing,
    pub params: AnimationParams,
}

/// Capability interface over the host-owned kinematic state.
///
/// The host owns velocity and gravity scale and performs the geometric ground
/// overlap test; the controller only decides what to write. Sensor geometry
/// (offset, radius, collision mask) is host-side configuration.
pub trait PhysicsHost {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn set_gravity_scale(&mut self, scale: f32);
    /// Overlap test at the host's ground sensor. Recomputed every call, no
    /// hysteresis.
    fn probe_ground(&self) -> bool;
}

/// Per-character platforming state. See the module docs for the tick model.
#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    tuning: MovementTuning,
    move_input: Vec2,
    jump: JumpCommand,
    jump_released: bool,
    facing: Facing,
    grounded: bool,
}

impl PlayerController {
    pub fn new(tuning: MovementTuning) -> Self {
        Self {
            tuning,
            move_input: Vec2::ZERO,
            jump: JumpCommand::None,
            jump_released: false,
            facing: Facing::Right,
            grounded: false,
        }
    }

    /// Stores the latest move vector verbatim; last value wins.
    pub fn on_move_input(&mut self, input: Vec2) {
        self.move_input = input;
    }

    /// Records a jump press or release edge.
    ///
    /// Rapid press/release between two physics ticks coalesces into whichever
    /// flag the later call sets; a pending request survives a release.
    pub fn on_jump_input(&mut self, pressed: bool) {
        if pressed {
            self.jump = JumpCommand::Requested;
            self.jump_released = false;
        } else {
            self.jump_released = true;
            if self.jump == JumpCommand::Consumed {
                self.jump = JumpCommand::None;
            }
        }
    }

    /// Fixed-rate update. Order matters: gravity selection, ground probe,
    /// horizontal movement, jump handling.
    pub fn tick_physics(&mut self, host: &mut impl PhysicsHost) {
        self.select_gravity(host);
        self.grounded = host.probe_ground();
        self.apply_horizontal(host);
        self.handle_jump(host);
    }

    /// Per-frame visual update: facing, then the animation parameters.
    ///
    /// `vertical_velocity` is the host's current raw vertical speed; grounded
    /// is whatever the last physics tick observed.
    pub fn tick_visual(&mut self, vertical_velocity: f32) -> VisualFrame {
        if self.move_input.x > AXIS_DEADZONE {
            self.facing = Facing::Right;
        } else if self.move_input.x < -AXIS_DEADZONE {
            self.facing = Facing::Left;
        }

        let axis = self.move_input.x.abs();
        VisualFrame {
            facing: self.facing,
            params: AnimationParams {
                is_jumping: vertical_velocity > VELOCITY_EPSILON,
                is_grounded: self.grounded,
                is_idle: axis < AXIS_DEADZONE && self.grounded,
                is_walking: axis > AXIS_DEADZONE && self.grounded,
                y_velocity: vertical_velocity,
            },
        }
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn grounded(&self) -> bool {
        self.grounded
    }

    pub fn jump_command(&self) -> JumpCommand {
        self.jump
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    fn select_gravity(&self, host: &mut impl PhysicsHost) {
        let vertical = host.velocity().y;
        let scale = if vertical < -VELOCITY_EPSILON {
            self.tuning.fall_gravity
        } else if vertical > VELOCITY_EPSILON {
            self.tuning.jump_gravity
        } else {
            self.tuning.normal_gravity
        };
        host.set_gravity_scale(scale);
    }

    fn apply_horizontal(&self, host: &mut impl PhysicsHost) {
        let velocity = host.velocity();
        host.set_velocity(Vec2::new(
            self.move_input.x * self.tuning.move_speed,
            velocity.y,
        ));
    }

    fn handle_jump(&mut self, host: &mut impl PhysicsHost) {
        if self.jump == JumpCommand::Requested && self.grounded {
            let velocity = host.velocity();
            // Instantaneous, not additive: prior vertical speed is discarded.
            host.set_velocity(Vec2::new(velocity.x, self.tuning.jump_impulse));
            self.jump = JumpCommand::Consumed;
            self.jump_released = false;
        } else if self.jump_released {
            let velocity = host.velocity();
            if velocity.y > 0.0 {
                host.set_velocity(Vec2::new(
                    velocity.x,
                    velocity.y * self.tuning.jump_cut_multiplier,
                ));
            }
            // A release is consumed exactly once, effect or not.
            self.jump_released = false;
        }
    }
}
