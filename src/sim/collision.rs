//! Collision geometry for the player and the gates
//!
//! All boxes are computed from simulation state alone: the player's vertical
//! position and rotation, and the gate's horizontal position at the current
//! simulation time. Screen space has y growing downward from the ceiling.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::obstacles::Obstacle;
use super::state::Player;
use crate::config::GameConfig;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }
}

/// Player boxes for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerBounds {
    /// Bounds of the rotated sprite (used for the ground test)
    pub visual: Aabb,
    /// Forgiving hit box centred inside `visual` (used against gates)
    pub hit: Aabb,
}

/// Compute the player's boxes from position and rotation
pub fn player_bounds(player: &Player, config: &GameConfig) -> PlayerBounds {
    let size = Vec2::new(config.player_width, config.player_height);
    let center = Vec2::new(config.player_x, player.position) + size / 2.0;

    let (sin, cos) = player.rotation.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    let visual_size = Vec2::new(
        size.x * cos + size.y * sin,
        size.x * sin + size.y * cos,
    );
    let visual = Aabb::from_center_size(center, visual_size);

    // The shrink term takes the sine of |rotation| / 90 as-is (radians), so
    // a fully rotated sprite loses sin(1) * shrink rather than the full shrink.
    let hit_width = size.x - (player.rotation.abs() / 90.0).sin() * config.hitbox_shrink;
    let hit_height = (size.y + visual_size.y) / 2.0;
    let hit = Aabb::from_center_size(center, Vec2::new(hit_width, hit_height));

    PlayerBounds { visual, hit }
}

/// Has the sprite reached the ground?
#[inline]
pub fn hits_ground(bounds: &PlayerBounds, config: &GameConfig) -> bool {
    bounds.visual.max.y >= config.fly_area_height
}

/// Is the hit box poking through the ceiling?
#[inline]
pub fn above_ceiling(bounds: &PlayerBounds) -> bool {
    bounds.hit.min.y <= 0.0
}

/// A gate's opening at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gate {
    pub left: f32,
    pub right: f32,
    pub gap_top: f32,
    pub gap_bottom: f32,
}

impl Gate {
    pub fn of(obstacle: &Obstacle, config: &GameConfig, now: f32) -> Self {
        let center = obstacle.center_x(config.scroll_speed, now);
        let half = config.pipe_width / 2.0;
        Self {
            left: center - half,
            right: center + half,
            gap_top: obstacle.top_height,
            gap_bottom: obstacle.top_height + obstacle.gap_height,
        }
    }

    /// Box has reached the gate's horizontal span
    #[inline]
    pub fn entered(&self, hit: &Aabb) -> bool {
        hit.max.x > self.left
    }

    /// Box is strictly between the two pipe segments
    #[inline]
    pub fn contains(&self, hit: &Aabb) -> bool {
        hit.min.y > self.gap_top && hit.max.y < self.gap_bottom
    }

    /// Box has fully passed the gate's right edge
    #[inline]
    pub fn cleared(&self, hit: &Aabb) -> bool {
        hit.min.x > self.right
    }

    /// Inside the gate's span but touching a pipe
    #[inline]
    pub fn violated_by(&self, hit: &Aabb) -> bool {
        self.entered(hit) && !self.contains(hit)
    }

    /// The opening as a box (debug drawing)
    pub fn opening(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.left, self.gap_top),
            Vec2::new(self.right, self.gap_bottom),
        )
    }
}
