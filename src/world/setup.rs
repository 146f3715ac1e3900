use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::config::PlayerConfig;
use crate::controller::{AnimationParams, PlayerController};
use crate::player::{GroundSensor, Player, GROUND_GROUP, PLAYER_GROUP};

use super::{GROUND_TOP, LEVEL_HALF_WIDTH, WALL_HEIGHT, WALL_THICKNESS};

const GROUND_THICKNESS: f32 = 80.0;

// Floating platforms: center x, center y, half width
const PLATFORMS: [(f32, f32, f32); 3] = [
    (-320.0, -20.0, 90.0),
    (40.0, 80.0, 70.0),
    (380.0, -60.0, 120.0),
];
const PLATFORM_THICKNESS: f32 = 20.0;

// Player body: sprite size matches the capsule collider
const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

pub fn setup_level(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.35, 0.3);
    let platform_color = Color::srgb(0.55, 0.5, 0.42);

    // Ground slab
    commands.spawn((
        Sprite::from_color(
            ground_color,
            Vec2::new(LEVEL_HALF_WIDTH * 2.0, GROUND_THICKNESS),
        ),
        Transform::from_xyz(0.0, GROUND_TOP - GROUND_THICKNESS / 2.0, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(LEVEL_HALF_WIDTH, GROUND_THICKNESS / 2.0),
        CollisionGroups::new(GROUND_GROUP, Group::ALL),
    ));

    for (x, y, half_width) in PLATFORMS {
        commands.spawn((
            Sprite::from_color(
                platform_color,
                Vec2::new(half_width * 2.0, PLATFORM_THICKNESS),
            ),
            Transform::from_xyz(x, y, 0.0),
            RigidBody::Fixed,
            Collider::cuboid(half_width, PLATFORM_THICKNESS / 2.0),
            CollisionGroups::new(GROUND_GROUP, Group::ALL),
        ));
    }

    // Edge walls keep the player inside the level
    for side in [-1.0, 1.0] {
        commands.spawn((
            Sprite::from_color(ground_color, Vec2::new(WALL_THICKNESS, WALL_HEIGHT)),
            Transform::from_xyz(
                side * (LEVEL_HALF_WIDTH + WALL_THICKNESS / 2.0),
                GROUND_TOP + WALL_HEIGHT / 2.0,
                0.0,
            ),
            RigidBody::Fixed,
            Collider::cuboid(WALL_THICKNESS / 2.0, WALL_HEIGHT / 2.0),
            CollisionGroups::new(GROUND_GROUP, Group::ALL),
        ));
    }
}

pub fn spawn_player(mut commands: Commands, config: Res<PlayerConfig>) {
    commands.spawn((
        Player,
        PlayerController::new(config.movement),
        GroundSensor::from_tuning(&config.ground_sensor),
        AnimationParams::default(),
        Sprite::from_color(Color::srgb(0.9, 0.55, 0.2), PLAYER_SIZE),
        Transform::from_xyz(0.0, GROUND_TOP + 40.0, 1.0),
        RigidBody::Dynamic,
        Collider::capsule_y(PLAYER_SIZE.y / 4.0, PLAYER_SIZE.x / 2.0),
        CollisionGroups::new(PLAYER_GROUP, Group::ALL),
        LockedAxes::ROTATION_LOCKED,
        Velocity::zero(),
        // Source behavior: gravity scale starts at normal until the first tick
        GravityScale(config.movement.normal_gravity),
        Ccd::enabled(),
    ));
    info!("Player spawned");
}
