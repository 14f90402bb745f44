//! Game controller
//!
//! Owns the physics world and translates game actions (launch, move,
//! update) into engine calls. Contacts raised during a step are classified
//! and dispatched before `update` returns.

use glam::Vec2;
use rapier2d::prelude::{ColliderHandle, CollisionEvent, Isometry, RigidBodyHandle};
use serde::{Deserialize, Serialize};

use super::bodies::{Bodies, BodyKind};
use super::snapshot::{ObjectPositions, Pose};
use super::world::PhysicsWorld;
use crate::config::GameConfig;
use crate::error::BrickDropResult;
use crate::{from_engine, to_engine};

/// Points scored this session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Brick hits
    pub player: u32,
    /// Balls that got past the paddle
    pub ai: u32,
}

/// Something that happened during an update (audio, HUD, effects)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BallLaunched,
    /// Brick collider became active
    BrickSpawned,
    /// Ball struck the brick; carries the player's new score
    BrickHit { player_score: u32 },
    PaddleHit,
    WallHit,
    /// Ball fell past the bottom edge; carries the AI's new score
    BallLost { ai_score: u32 },
}

/// Receives game events synchronously while `update` runs
pub trait ContactListener {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> ContactListener for F {
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Paddle, ball and brick on top of an owned physics world
pub struct PhysicsWorldController {
    config: GameConfig,
    world: PhysicsWorld,
    bodies: Bodies,
    /// Simulated seconds since construction (or last reset)
    elapsed: f32,
    /// Simulated time at which the brick (re)appears; `None` while it is up
    brick_ready_at: Option<f32>,
    ball_in_play: bool,
    score: Score,
    events: Vec<GameEvent>,
    listener: Option<Box<dyn ContactListener>>,
}

impl Default for PhysicsWorldController {
    fn default() -> Self {
        Self::build(GameConfig::default())
    }
}

impl std::fmt::Debug for PhysicsWorldController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhysicsWorldController")
            .field("elapsed", &self.elapsed)
            .field("brick_ready_at", &self.brick_ready_at)
            .field("ball_in_play", &self.ball_in_play)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

impl PhysicsWorldController {
    /// Validate the config, create the world and spawn all bodies
    pub fn new(config: GameConfig) -> BrickDropResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: GameConfig) -> Self {
        let mut world = PhysicsWorld::new(config.gravity);
        let bodies = Bodies::spawn(&mut world, &config);
        log::info!(
            "World created: ball at {}, brick at {} after {}s, player at {}",
            config.ball_pos,
            config.brick_pos,
            config.brick_wait,
            config.player_pos
        );
        Self {
            brick_ready_at: Some(config.brick_wait),
            config,
            world,
            bodies,
            elapsed: 0.0,
            ball_in_play: false,
            score: Score::default(),
            events: Vec::new(),
            listener: None,
        }
    }

    /// Register a listener invoked for every event before `update` returns.
    /// While a listener is set, events go to it instead of the drain queue.
    pub fn set_listener(&mut self, listener: impl ContactListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Simulated seconds since the session began
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn ball_in_play(&self) -> bool {
        self.ball_in_play
    }

    pub fn brick_visible(&self) -> bool {
        self.bodies.brick_collider.is_some()
    }

    /// Take all events queued since the last drain.
    /// Nothing is queued while a listener is set.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Tear down and rebuild the world with the same config.
    /// Scores, time and events start over; the listener is kept.
    pub fn reset(&mut self) {
        let listener = self.listener.take();
        *self = Self::build(self.config.clone());
        self.listener = listener;
    }

    /// Give the ball its launch impulse. Ignored while the ball is already in play.
    pub fn launch_ball(&mut self) {
        if self.ball_in_play {
            log::debug!("Launch ignored: ball already in play");
            return;
        }
        let velocity = self.config.launch_direction() * self.config.launch_speed();
        if let Some(ball) = self.world.body_mut(self.bodies.ball) {
            ball.set_linvel(to_engine(velocity), true);
        }
        self.ball_in_play = true;
        self.emit(GameEvent::BallLaunched);
    }

    /// Slide the paddle horizontally by `delta`, clamped to the arena
    pub fn move_player(&mut self, delta: f32) {
        debug_assert!(delta.is_finite(), "move_player({delta}) needs a finite delta");
        if !delta.is_finite() {
            log::warn!("Ignoring non-finite paddle movement {delta}");
            return;
        }
        let (min_x, max_x) = self.config.player_x_range();
        if let Some(player) = self.world.body_mut(self.bodies.player) {
            let pos = from_engine(player.translation());
            let x = (pos.x + delta).clamp(min_x, max_x);
            player.set_position(Isometry::translation(x, pos.y), true);
        }
    }

    /// Advance the simulation by `elapsed_time` seconds.
    ///
    /// Long frames are split into substeps no longer than `max_timestep`;
    /// the whole of `elapsed_time` is always simulated. A zero step does nothing.
    pub fn update(&mut self, elapsed_time: f32) {
        debug_assert!(
            elapsed_time.is_finite() && elapsed_time >= 0.0,
            "update({elapsed_time}) needs a finite, non-negative step"
        );
        if !(elapsed_time.is_finite() && elapsed_time >= 0.0) {
            log::warn!("Ignoring update with invalid step {elapsed_time}");
            return;
        }

        // The last substep takes exactly what is left, so this always ends at zero
        let mut remaining = elapsed_time;
        while remaining > 0.0 {
            let dt = remaining.min(self.config.max_timestep);
            self.substep(dt);
            remaining -= dt;
        }
    }

    fn substep(&mut self, dt: f32) {
        if let Some(ready_at) = self.brick_ready_at {
            if self.elapsed >= ready_at && self.bodies.show_brick(&mut self.world, &self.config) {
                self.brick_ready_at = None;
                log::debug!("Brick spawned at t={:.3}s", self.elapsed);
                self.emit(GameEvent::BrickSpawned);
            }
        }

        let contacts = self.world.step(dt);
        self.elapsed += dt;

        for contact in contacts {
            self.dispatch_contact(contact);
        }

        if self.ball_in_play {
            let ball_top = self.ball_pose().y + self.config.ball_radius;
            if ball_top < 0.0 {
                self.score.ai += 1;
                log::info!("Ball lost, AI scores ({})", self.score.ai);
                self.reset_ball();
                self.emit(GameEvent::BallLost {
                    ai_score: self.score.ai,
                });
            }
        }
    }

    fn dispatch_contact(&mut self, contact: CollisionEvent) {
        if !contact.started() {
            return;
        }
        let kinds = (
            self.kind_of(contact.collider1()),
            self.kind_of(contact.collider2()),
        );
        let other = match kinds {
            (Some(BodyKind::Ball), Some(other)) | (Some(other), Some(BodyKind::Ball)) => other,
            _ => return,
        };
        match other {
            BodyKind::Brick => self.register_hit(),
            BodyKind::Player => self.emit(GameEvent::PaddleHit),
            BodyKind::Wall => self.emit(GameEvent::WallHit),
            BodyKind::Ball => {}
        }
    }

    fn kind_of(&self, collider: ColliderHandle) -> Option<BodyKind> {
        self.world.collider_tag(collider).and_then(BodyKind::from_tag)
    }

    /// Record a ball/brick hit: score it, take the brick down until its wait
    /// elapses again, and park the ball at its spawn point.
    ///
    /// Does nothing while the brick is down, so one contact scores once.
    pub fn register_hit(&mut self) {
        if !self.bodies.hide_brick(&mut self.world) {
            log::debug!("Hit ignored: brick not in play");
            return;
        }
        self.score.player += 1;
        self.brick_ready_at = Some(self.elapsed + self.config.brick_wait);
        self.reset_ball();
        log::info!("Brick hit, player scores ({})", self.score.player);
        self.emit(GameEvent::BrickHit {
            player_score: self.score.player,
        });
    }

    /// Current poses of the ball, brick and paddle
    pub fn get_object_positions(&self) -> ObjectPositions {
        ObjectPositions {
            ball: self.pose_of(self.bodies.ball),
            brick: self.pose_of(self.bodies.brick),
            player: self.pose_of(self.bodies.player),
            ball_radius: self.config.ball_radius,
            brick_visible: self.brick_visible(),
            ball_in_play: self.ball_in_play,
        }
    }

    fn ball_pose(&self) -> Pose {
        self.pose_of(self.bodies.ball)
    }

    fn pose_of(&self, handle: RigidBodyHandle) -> Pose {
        self.world
            .body(handle)
            .map(|b| Pose::new(from_engine(b.translation()), b.rotation().angle()))
            .unwrap_or_default()
    }

    fn reset_ball(&mut self) {
        let spawn = self.config.ball_pos;
        if let Some(ball) = self.world.body_mut(self.bodies.ball) {
            ball.set_position(Isometry::translation(spawn.x, spawn.y), true);
            ball.set_linvel(to_engine(Vec2::ZERO), true);
            ball.set_angvel(0.0, true);
        }
        self.ball_in_play = false;
    }

    fn emit(&mut self, event: GameEvent) {
        match self.listener.as_mut() {
            Some(listener) => listener.on_event(&event),
            None => self.events.push(event),
        }
    }
}
