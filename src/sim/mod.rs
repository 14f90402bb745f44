//! Simulation module
//!
//! Everything that touches the physics engine lives here:
//! - `world`: owned rapier2d state and single-step advancement
//! - `bodies`: paddle, ball, brick and wall construction
//! - `controller`: game actions, substepping, contact dispatch, scoring
//! - `snapshot`: typed poses handed to the renderer

pub mod bodies;
pub mod controller;
pub mod snapshot;
pub mod world;

pub use bodies::{Bodies, BodyKind};
pub use controller::{ContactListener, GameEvent, PhysicsWorldController, Score};
pub use snapshot::{ObjectPositions, POSE_COUNT, POSE_FLOATS, Pose};
pub use world::PhysicsWorld;
