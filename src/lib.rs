//! Brick Drop - a paddle, a ball and a brick on top of rapier2d
//!
//! Core modules:
//! - `sim`: Physics world ownership, body setup, stepping and the game controller
//! - `config`: Data-driven tunables (positions, sizes, launch strength)
//! - `error`: Crate error type

pub mod config;
pub mod error;
pub mod sim;

pub use config::GameConfig;
pub use error::{BrickDropError, BrickDropResult};
pub use sim::{GameEvent, ObjectPositions, PhysicsWorldController, Pose, Score};

use glam::Vec2;
use rapier2d::prelude::{Real, Vector};

/// Game configuration constants
pub mod consts {
    /// Brick spawn position and size
    pub const BRICK_POS_X: f32 = 400.0;
    pub const BRICK_POS_Y: f32 = 550.0;
    pub const BRICK_WIDTH: f32 = 100.0;
    pub const BRICK_HEIGHT: f32 = 10.0;
    /// Seconds of simulated time before the brick drops in
    pub const BRICK_WAIT: f32 = 1.5;

    /// Player paddle spawn position and size
    pub const PLAYER_POS_X: f32 = 400.0;
    pub const PLAYER_POS_Y: f32 = 100.0;
    pub const PLAYER_WIDTH: f32 = 100.0;
    pub const PLAYER_HEIGHT: f32 = 10.0;

    /// Ball defaults
    pub const BALL_POS_X: f32 = 400.0;
    pub const BALL_POS_Y: f32 = 330.0;
    pub const BALL_RADIUS: f32 = 15.0;
    /// Launch impulse (mass * velocity), applied upward
    pub const BALL_VELOCITY: f32 = 100_000.0;
    pub const BALL_SPHERE_SEGS: u32 = 128;

    /// Arena dimensions (screen pixels, origin bottom-left)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    /// Wall thickness for the static arena edges
    pub const WALL_THICKNESS: f32 = 20.0;

    /// Largest single engine step; longer frames are split into substeps
    pub const MAX_TIMESTEP: f32 = 1.0 / 60.0;

    /// All bodies use unit density so impulse / area gives launch speed
    pub const BODY_DENSITY: f32 = 1.0;
}

/// Convert a glam vector to the engine's vector type
#[inline]
pub fn to_engine(v: Vec2) -> Vector<Real> {
    Vector::new(v.x, v.y)
}

/// Convert an engine vector back to glam
#[inline]
pub fn from_engine(v: &Vector<Real>) -> Vec2 {
    Vec2::new(v.x, v.y)
}
