//! Owned rapier2d world
//!
//! Bundles every set the engine needs into one value with an explicit
//! lifetime. Nothing here knows about paddles or bricks.

use std::sync::Mutex;

use glam::Vec2;
use rapier2d::prelude::*;

use crate::to_engine;

/// Collects collision events raised while the pipeline steps.
///
/// The engine reports events through `&self`, so the buffer sits behind a
/// mutex even though stepping is single threaded.
#[derive(Default)]
struct ContactCollector {
    events: Mutex<Vec<CollisionEvent>>,
}

impl ContactCollector {
    fn drain(&self) -> Vec<CollisionEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl EventHandler for ContactCollector {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }

    fn handle_contact_force_event(
        &self,
        _dt: Real,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: Real,
    ) {
    }
}

/// A physics world and all engine state needed to step it
pub struct PhysicsWorld {
    pub gravity: Vector<Real>,
    pub integration_parameters: IntegrationParameters,
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    physics_pipeline: PhysicsPipeline,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    island_manager: IslandManager,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    collector: ContactCollector,
}

impl PhysicsWorld {
    /// Create an empty world with the given gravity
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity: to_engine(gravity),
            integration_parameters: IntegrationParameters::default(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            physics_pipeline: PhysicsPipeline::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            island_manager: IslandManager::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            collector: ContactCollector::default(),
        }
    }

    /// Insert a body together with its colliders
    pub fn spawn(
        &mut self,
        body: RigidBody,
        colliders: impl IntoIterator<Item = Collider>,
    ) -> (RigidBodyHandle, Vec<ColliderHandle>) {
        let handle = self.bodies.insert(body);
        let colliders = colliders
            .into_iter()
            .map(|c| self.attach(c, handle))
            .collect();
        (handle, colliders)
    }

    /// Attach a collider to an existing body
    pub fn attach(&mut self, collider: Collider, body: RigidBodyHandle) -> ColliderHandle {
        self.colliders
            .insert_with_parent(collider, body, &mut self.bodies)
    }

    /// Detach and drop a collider, leaving its body in place
    pub fn detach(&mut self, collider: ColliderHandle) -> bool {
        self.colliders
            .remove(collider, &mut self.island_manager, &mut self.bodies, true)
            .is_some()
    }

    pub fn body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle)
    }

    pub fn body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle)
    }

    /// `user_data` tag of a collider, if it still exists
    pub fn collider_tag(&self, collider: ColliderHandle) -> Option<u128> {
        self.colliders.get(collider).map(|c| c.user_data)
    }

    /// Advance the engine by `dt` seconds in a single step.
    ///
    /// Returns every collision event the step produced, in engine order.
    pub fn step(&mut self, dt: f32) -> Vec<CollisionEvent> {
        self.integration_parameters.dt = dt;
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &self.collector,
        );
        self.collector.drain()
    }
}
