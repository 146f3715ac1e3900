//! Headless end-to-end checks of the player controller against real Rapier
//! colliders: landing, ground sensing, jumping, and jump-cut.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use caper::config::PlayerConfig;
use caper::controller::{JumpCommand, PlayerController, VELOCITY_EPSILON};
use caper::player::{Player, PlayerPlugin};
use caper::world::WorldPlugin;

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, TransformPlugin))
        .add_plugins(
            RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(100.0).in_fixed_schedule(),
        )
        .insert_resource(TimestepMode::Fixed {
            dt: 1.0 / 64.0,
            substeps: 1,
        })
        .add_plugins((WorldPlugin, PlayerPlugin));
    app.init_resource::<ButtonInput<KeyCode>>();
    // Keep the runner from sneaking in fixed steps of its own; the tests
    // drive the fixed schedule by hand.
    app.insert_resource(Time::<Fixed>::from_seconds(1_000_000.0));
    // Run Startup so the level and player exist.
    app.update();
    app
}

fn step_physics(app: &mut App, steps: usize) {
    for _ in 0..steps {
        app.world_mut().run_schedule(FixedUpdate);
    }
}

fn player_entity(app: &mut App) -> Entity {
    let mut query = app.world_mut().query_filtered::<Entity, With<Player>>();
    query.single(app.world())
}

#[test]
fn player_lands_and_reports_grounded() {
    let mut app = test_app();
    let player = player_entity(&mut app);

    step_physics(&mut app, 60);

    let controller = app.world().get::<PlayerController>(player).unwrap();
    assert!(controller.grounded(), "player should have settled on ground");

    let velocity = app.world().get::<Velocity>(player).unwrap();
    assert!(
        velocity.linvel.y.abs() < 1.0,
        "resting vertical velocity was {}",
        velocity.linvel.y
    );

    let gravity = app.world().get::<GravityScale>(player).unwrap();
    let expected = PlayerConfig::default().movement.normal_gravity;
    assert!(
        (gravity.0 - expected).abs() < f32::EPSILON,
        "resting gravity scale was {}",
        gravity.0
    );
}

#[test]
fn grounded_jump_launches_and_selects_rising_gravity() {
    let mut app = test_app();
    let player = player_entity(&mut app);
    step_physics(&mut app, 60);

    let movement = PlayerConfig::default().movement;

    app.world_mut()
        .get_mut::<PlayerController>(player)
        .unwrap()
        .on_jump_input(true);
    step_physics(&mut app, 1);

    let velocity = app.world().get::<Velocity>(player).unwrap();
    assert!(
        velocity.linvel.y > movement.jump_impulse * 0.9,
        "vertical velocity after jump was {}",
        velocity.linvel.y
    );
    let controller = app.world().get::<PlayerController>(player).unwrap();
    assert_eq!(controller.jump_command(), JumpCommand::Consumed);

    // Next tick re-evaluates gravity against the upward velocity.
    step_physics(&mut app, 1);
    let gravity = app.world().get::<GravityScale>(player).unwrap();
    assert!(
        (gravity.0 - movement.jump_gravity).abs() < f32::EPSILON,
        "rising gravity scale was {}",
        gravity.0
    );

    // A few ticks later the sensor has left the ground.
    step_physics(&mut app, 3);
    let controller = app.world().get::<PlayerController>(player).unwrap();
    assert!(!controller.grounded());
}

#[test]
fn releasing_jump_early_cuts_the_ascent() {
    let mut app = test_app();
    let player = player_entity(&mut app);
    step_physics(&mut app, 60);

    app.world_mut()
        .get_mut::<PlayerController>(player)
        .unwrap()
        .on_jump_input(true);
    step_physics(&mut app, 3);

    let before = app.world().get::<Velocity>(player).unwrap().linvel.y;
    assert!(before > VELOCITY_EPSILON, "still rising before the cut");

    app.world_mut()
        .get_mut::<PlayerController>(player)
        .unwrap()
        .on_jump_input(false);
    step_physics(&mut app, 1);

    let after = app.world().get::<Velocity>(player).unwrap().linvel.y;
    assert!(
        after < before * 0.55 && after > before * 0.35,
        "expected roughly half of {}, got {}",
        before,
        after
    );
}

#[test]
fn airborne_jump_request_fires_on_landing() {
    let mut app = test_app();
    let player = player_entity(&mut app);
    step_physics(&mut app, 60);

    let movement = PlayerConfig::default().movement;

    // Jump, then request again mid-air; the request must buffer.
    app.world_mut()
        .get_mut::<PlayerController>(player)
        .unwrap()
        .on_jump_input(true);
    step_physics(&mut app, 10);
    app.world_mut()
        .get_mut::<PlayerController>(player)
        .unwrap()
        .on_jump_input(true);
    step_physics(&mut app, 1);
    assert_eq!(
        app.world()
            .get::<PlayerController>(player)
            .unwrap()
            .jump_command(),
        JumpCommand::Requested
    );

    // Ride the arc back down; landing consumes the buffered request.
    let mut relaunched = false;
    for _ in 0..400 {
        step_physics(&mut app, 1);
        let controller = app.world().get::<PlayerController>(player).unwrap();
        if controller.jump_command() == JumpCommand::Consumed {
            relaunched = true;
            break;
        }
    }
    assert!(relaunched, "buffered jump never fired");
    let velocity = app.world().get::<Velocity>(player).unwrap();
    assert!(velocity.linvel.y > movement.jump_impulse * 0.8);
}
