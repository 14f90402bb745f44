//! Render-facing snapshot of body poses

use std::f32::consts::TAU;

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position and orientation of one body
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    /// Rotation in radians, counter-clockwise
    pub angle: f32,
}

impl Pose {
    pub fn new(pos: Vec2, angle: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            angle,
        }
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Floats per pose in the flattened buffer
pub const POSE_FLOATS: usize = 3;
/// Number of poses in the flattened buffer (ball, brick, player)
pub const POSE_COUNT: usize = 3;

/// Where everything is as of the last update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectPositions {
    pub ball: Pose,
    pub brick: Pose,
    pub player: Pose,
    pub ball_radius: f32,
    /// False while the brick is waiting to (re)appear
    pub brick_visible: bool,
    /// True between a launch and the next ball reset
    pub ball_in_play: bool,
}

impl ObjectPositions {
    /// Poses in buffer order: ball, brick, player
    pub fn poses(&self) -> [Pose; POSE_COUNT] {
        [self.ball, self.brick, self.player]
    }

    /// Flattened layout for GPU upload:
    /// `[ball.x, ball.y, ball.angle, brick.x, brick.y, brick.angle, player.x, player.y, player.angle]`
    pub fn as_floats(&self) -> [f32; POSE_COUNT * POSE_FLOATS] {
        bytemuck::cast(self.poses())
    }

    /// Ball rim as `segments` points, counter-clockwise from +x.
    /// Prepend the center for a triangle fan.
    pub fn ball_outline(&self, segments: u32) -> Vec<Vec2> {
        let center = self.ball.pos();
        let step = TAU / segments as f32;
        (0..segments)
            .map(|i| {
                let theta = self.ball.angle + i as f32 * step;
                center + Vec2::from_angle(theta) * self.ball_radius
            })
            .collect()
    }
}
