//! Axis-aligned bounding boxes and the run-ending collision test

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Obstacle, PlayerBody};

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Rectangle whose bottom edge is centered on `anchor`
    pub fn from_midbottom(anchor: Vec2, size: Vec2) -> Self {
        Self {
            min: Vec2::new(anchor.x - size.x / 2.0, anchor.y - size.y),
            size,
        }
    }

    /// Rectangle centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Strict overlap on both axes; shared edges do not count
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Check whether the player touches any live obstacle
pub fn detect(player: &PlayerBody, obstacles: &[Obstacle]) -> bool {
    let hitbox = player.rect();
    obstacles
        .iter()
        .filter(|o| o.alive)
        .any(|o| hitbox.intersects(&o.rect()))
}
