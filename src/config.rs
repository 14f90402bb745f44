//! Game tunables
//!
//! Everything the header used to hardcode lives here so a session can be
//! rebalanced from a JSON file without recompiling.

use std::f32::consts::PI;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{BrickDropError, BrickDropResult};

/// Positions, sizes and launch parameters for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Brick ===
    /// Brick center
    pub brick_pos: Vec2,
    /// Brick width and height
    pub brick_size: Vec2,
    /// Simulated seconds before the brick appears (and after each hit)
    pub brick_wait: f32,

    // === Player ===
    /// Paddle center
    pub player_pos: Vec2,
    /// Paddle width and height
    pub player_size: Vec2,

    // === Ball ===
    /// Ball spawn (and reset) point
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    /// Launch impulse magnitude
    pub ball_velocity: f32,
    /// Rim points used when tessellating the ball for drawing
    pub ball_render_segments: u32,
    /// Launch direction in radians, measured from straight up (positive = left)
    pub launch_angle: f32,

    // === World ===
    pub gravity: Vec2,
    /// Arena width and height; origin is the bottom-left corner
    pub arena_size: Vec2,
    /// Largest single engine step
    pub max_timestep: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            brick_pos: Vec2::new(BRICK_POS_X, BRICK_POS_Y),
            brick_size: Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
            brick_wait: BRICK_WAIT,

            player_pos: Vec2::new(PLAYER_POS_X, PLAYER_POS_Y),
            player_size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),

            ball_pos: Vec2::new(BALL_POS_X, BALL_POS_Y),
            ball_radius: BALL_RADIUS,
            ball_velocity: BALL_VELOCITY,
            ball_render_segments: BALL_SPHERE_SEGS,
            launch_angle: 0.0,

            gravity: Vec2::ZERO,
            arena_size: Vec2::new(ARENA_WIDTH, ARENA_HEIGHT),
            max_timestep: MAX_TIMESTEP,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> BrickDropResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config from disk
    pub fn load(path: impl AsRef<Path>) -> BrickDropResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> BrickDropResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the engine cannot build a sensible world from
    pub fn validate(&self) -> BrickDropResult<()> {
        let vectors = [
            ("brick_pos", self.brick_pos),
            ("brick_size", self.brick_size),
            ("player_pos", self.player_pos),
            ("player_size", self.player_size),
            ("ball_pos", self.ball_pos),
            ("gravity", self.gravity),
            ("arena_size", self.arena_size),
        ];
        for (name, v) in vectors {
            if !v.is_finite() {
                return Err(invalid(format!("{name} must be finite, got {v}")));
            }
        }

        for (name, size) in [
            ("brick_size", self.brick_size),
            ("player_size", self.player_size),
            ("arena_size", self.arena_size),
        ] {
            if size.x <= 0.0 || size.y <= 0.0 {
                return Err(invalid(format!("{name} must be positive, got {size}")));
            }
        }

        if !(self.ball_radius.is_finite() && self.ball_radius > 0.0) {
            return Err(invalid(format!(
                "ball_radius must be positive, got {}",
                self.ball_radius
            )));
        }
        if !(self.ball_velocity.is_finite() && self.ball_velocity >= 0.0) {
            return Err(invalid(format!(
                "ball_velocity must be non-negative, got {}",
                self.ball_velocity
            )));
        }
        if !(self.brick_wait.is_finite() && self.brick_wait >= 0.0) {
            return Err(invalid(format!(
                "brick_wait must be non-negative, got {}",
                self.brick_wait
            )));
        }
        if !(self.max_timestep.is_finite() && self.max_timestep > 0.0) {
            return Err(invalid(format!(
                "max_timestep must be positive, got {}",
                self.max_timestep
            )));
        }
        if !self.launch_angle.is_finite() {
            return Err(invalid("launch_angle must be finite".to_string()));
        }
        if self.ball_render_segments < 3 {
            return Err(invalid(format!(
                "ball_render_segments must be at least 3, got {}",
                self.ball_render_segments
            )));
        }
        if self.player_size.x > self.arena_size.x {
            return Err(invalid("player is wider than the arena".to_string()));
        }

        for (name, pos) in [
            ("brick_pos", self.brick_pos),
            ("player_pos", self.player_pos),
            ("ball_pos", self.ball_pos),
        ] {
            if !self.contains(pos) {
                return Err(invalid(format!(
                    "{name} {pos} lies outside the {} arena",
                    self.arena_size
                )));
            }
        }

        Ok(())
    }

    /// Whether a point lies inside the arena rectangle
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.cmpge(Vec2::ZERO).all() && pos.cmple(self.arena_size).all()
    }

    /// Ball mass at unit density
    pub fn ball_mass(&self) -> f32 {
        BODY_DENSITY * PI * self.ball_radius * self.ball_radius
    }

    /// Speed the ball leaves with once the launch impulse is applied
    pub fn launch_speed(&self) -> f32 {
        self.ball_velocity / self.ball_mass()
    }

    /// Unit launch direction: straight up, rotated by `launch_angle`
    pub fn launch_direction(&self) -> Vec2 {
        Vec2::from_angle(self.launch_angle).rotate(Vec2::Y)
    }

    /// Horizontal range the paddle center may occupy
    pub fn player_x_range(&self) -> (f32, f32) {
        let half = self.player_size.x / 2.0;
        (half, self.arena_size.x - half)
    }
}

fn invalid(msg: String) -> BrickDropError {
    BrickDropError::InvalidConfig(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_header_constants() {
        let config = GameConfig::default();
        assert_eq!(config.brick_pos, Vec2::new(400.0, 550.0));
        assert_eq!(config.brick_size, Vec2::new(100.0, 10.0));
        assert_eq!(config.brick_wait, 1.5);
        assert_eq!(config.player_pos, Vec2::new(400.0, 100.0));
        assert_eq!(config.ball_pos, Vec2::new(400.0, 330.0));
        assert_eq!(config.ball_radius, 15.0);
        assert_eq!(config.ball_velocity, 100_000.0);
        assert_eq!(config.ball_render_segments, 128);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "brick_wait": 0.25 }"#).unwrap();
        assert_eq!(config.brick_wait, 0.25);
        assert_eq!(config.ball_radius, BALL_RADIUS);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "ball_radius": -1.0 }"#),
            Err(BrickDropError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "ball_render_segments": 2 }"#),
            Err(BrickDropError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "ball_pos": [900.0, 10.0] }"#),
            Err(BrickDropError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(BrickDropError::Serde(_))
        ));
    }

    #[test]
    fn test_launch_speed_from_impulse() {
        let config = GameConfig::default();
        // 100000 / (pi * 15^2) ~= 141.47
        assert!((config.launch_speed() - 141.47).abs() < 0.01);
    }

    #[test]
    fn test_launch_direction() {
        let mut config = GameConfig::default();
        let up = config.launch_direction();
        assert!(up.x.abs() < 1e-6 && (up.y - 1.0).abs() < 1e-6);

        config.launch_angle = std::f32::consts::FRAC_PI_2;
        let left = config.launch_direction();
        assert!((left.x + 1.0).abs() < 1e-6 && left.y.abs() < 1e-6);
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig {
            brick_wait: 0.75,
            launch_angle: 0.3,
            gravity: Vec2::new(0.0, -9.8),
            ball_render_segments: 64,
            ..GameConfig::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            GameConfig::load("/definitely/not/here.json"),
            Err(BrickDropError::Io(_))
        ));
    }
}
