//! Body construction for the paddle, ball, brick and arena walls

use rapier2d::prelude::*;

use super::world::PhysicsWorld;
use crate::config::GameConfig;
use crate::consts::{BODY_DENSITY, WALL_THICKNESS};
use crate::to_engine;

/// What a collider belongs to. Stored in the collider's `user_data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Player,
    Ball,
    Brick,
    Wall,
}

impl BodyKind {
    pub fn tag(self) -> u128 {
        match self {
            BodyKind::Player => 1,
            BodyKind::Ball => 2,
            BodyKind::Brick => 3,
            BodyKind::Wall => 4,
        }
    }

    pub fn from_tag(tag: u128) -> Option<Self> {
        match tag {
            1 => Some(BodyKind::Player),
            2 => Some(BodyKind::Ball),
            3 => Some(BodyKind::Brick),
            4 => Some(BodyKind::Wall),
            _ => None,
        }
    }
}

/// Handles to everything spawned for one session
#[derive(Debug, Clone)]
pub struct Bodies {
    pub player: RigidBodyHandle,
    pub ball: RigidBodyHandle,
    pub brick: RigidBodyHandle,
    /// Present only while the brick is in play
    pub brick_collider: Option<ColliderHandle>,
    pub walls: Vec<RigidBodyHandle>,
}

impl Bodies {
    /// Create the paddle, ball, walls and the (collider-less) brick
    pub fn spawn(world: &mut PhysicsWorld, config: &GameConfig) -> Self {
        let half_player = config.player_size / 2.0;
        let (player, _) = world.spawn(
            RigidBodyBuilder::kinematic_position_based()
                .translation(to_engine(config.player_pos))
                .build(),
            [ColliderBuilder::cuboid(half_player.x, half_player.y)
                .friction(0.0)
                .user_data(BodyKind::Player.tag())
                .build()],
        );

        let (ball, _) = world.spawn(
            RigidBodyBuilder::dynamic()
                .translation(to_engine(config.ball_pos))
                .lock_rotations()
                .ccd_enabled(true)
                .build(),
            [ball_collider(config.ball_radius)],
        );

        // Brick body exists from the start so its pose is always reportable;
        // the collider is attached once the spawn wait has elapsed.
        let brick = world.bodies.insert(
            RigidBodyBuilder::fixed()
                .translation(to_engine(config.brick_pos))
                .build(),
        );

        let walls = wall_layout(config)
            .into_iter()
            .map(|(center, half)| {
                world
                    .spawn(
                        RigidBodyBuilder::fixed().translation(center).build(),
                        [ColliderBuilder::cuboid(half.x, half.y)
                            .friction(0.0)
                            .user_data(BodyKind::Wall.tag())
                            .build()],
                    )
                    .0
            })
            .collect();

        Self {
            player,
            ball,
            brick,
            brick_collider: None,
            walls,
        }
    }

    /// Attach the brick collider. Does nothing if it is already attached.
    pub fn show_brick(&mut self, world: &mut PhysicsWorld, config: &GameConfig) -> bool {
        if self.brick_collider.is_some() {
            return false;
        }
        let half = config.brick_size / 2.0;
        let collider = ColliderBuilder::cuboid(half.x, half.y)
            .friction(0.0)
            .user_data(BodyKind::Brick.tag())
            .build();
        self.brick_collider = Some(world.attach(collider, self.brick));
        true
    }

    /// Detach the brick collider. Returns false if the brick was not in play.
    pub fn hide_brick(&mut self, world: &mut PhysicsWorld) -> bool {
        match self.brick_collider.take() {
            Some(collider) => world.detach(collider),
            None => false,
        }
    }
}

/// Perfectly bouncy, frictionless ball that reports its contacts
fn ball_collider(radius: f32) -> Collider {
    ColliderBuilder::ball(radius)
        .density(BODY_DENSITY)
        .restitution(1.0)
        .restitution_combine_rule(CoefficientCombineRule::Max)
        .friction(0.0)
        .friction_combine_rule(CoefficientCombineRule::Min)
        .active_events(ActiveEvents::COLLISION_EVENTS)
        .user_data(BodyKind::Ball.tag())
        .build()
}

/// Left, right and top walls as (center, half extents). The bottom stays open.
fn wall_layout(config: &GameConfig) -> [(Vector<Real>, Vector<Real>); 3] {
    let size = config.arena_size;
    let t = WALL_THICKNESS / 2.0;
    [
        (
            Vector::new(-t, size.y / 2.0),
            Vector::new(t, size.y / 2.0 + WALL_THICKNESS),
        ),
        (
            Vector::new(size.x + t, size.y / 2.0),
            Vector::new(t, size.y / 2.0 + WALL_THICKNESS),
        ),
        (
            Vector::new(size.x / 2.0, size.y + t),
            Vector::new(size.x / 2.0 + WALL_THICKNESS, t),
        ),
    ]
}
