//! Player and obstacle bodies
//!
//! Positions are sprite mid-bottom points in screen space (y grows downward),
//! so "grounded" is simply `pos.y >= ground_y`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::ANIMATION_STEP;
use crate::settings::World;

/// Frames in every walk/crawl/flap cycle
pub const CYCLE_FRAMES: usize = 2;

/// Fractional animation counter.
///
/// Invariant: `phase ∈ [0, frames)`; each advance adds `step` and wraps to 0
/// once the phase reaches `frames`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationCycle {
    phase: f32,
    frames: usize,
    step: f32,
}

impl Default for AnimationCycle {
    fn default() -> Self {
        Self::new(CYCLE_FRAMES, ANIMATION_STEP)
    }
}

impl AnimationCycle {
    pub fn new(frames: usize, step: f32) -> Self {
        Self {
            phase: 0.0,
            frames: frames.max(1),
            step,
        }
    }

    pub fn advance(&mut self) {
        self.phase += self.step;
        if self.phase >= self.frames as f32 {
            self.phase = 0.0;
        }
    }

    /// Frame index to display
    pub fn frame(&self) -> usize {
        (self.phase as usize).min(self.frames - 1)
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

/// Which player sprite to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerPose {
    Walk(usize),
    Jump,
}

/// The runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerBody {
    /// Mid-bottom point; x never changes
    pub pos: Vec2,
    /// Vertical velocity (px per tick, negative is up)
    pub vel_y: f32,
    pub size: Vec2,
    pub walk: AnimationCycle,
    pub pose: PlayerPose,
    ground_y: f32,
}

impl PlayerBody {
    pub fn new(world: &World) -> Self {
        Self {
            pos: Vec2::new(world.player_start_x, world.ground_y),
            vel_y: 0.0,
            size: world.player_size,
            walk: AnimationCycle::default(),
            pose: PlayerPose::Walk(0),
            ground_y: world.ground_y,
        }
    }

    /// Back to the start column on the ground, at rest
    pub fn reset(&mut self, world: &World) {
        self.pos = Vec2::new(world.player_start_x, world.ground_y);
        self.vel_y = 0.0;
        self.walk.reset();
        self.pose = PlayerPose::Walk(0);
    }

    /// Lower edge at or below the ground line
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.pos.y >= self.ground_y
    }

    /// Apply the jump impulse if standing. Returns true if a jump started.
    pub fn try_jump(&mut self, jump_held: bool, world: &World) -> bool {
        if jump_held && self.is_grounded() {
            self.vel_y = world.jump_impulse;
            true
        } else {
            false
        }
    }

    /// Integrate gravity and clamp to the ground. The clamp leaves velocity alone.
    pub fn apply_gravity(&mut self, world: &World) {
        self.vel_y += world.gravity;
        self.pos.y += self.vel_y;
        if self.pos.y >= self.ground_y {
            self.pos.y = self.ground_y;
        }
    }

    pub fn animate(&mut self) {
        if self.is_grounded() {
            self.walk.advance();
            self.pose = PlayerPose::Walk(self.walk.frame());
        } else {
            self.pose = PlayerPose::Jump;
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_midbottom(self.pos, self.size)
    }
}

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Airborne, hovers above the ground line
    Flyer,
    /// Ground-based
    Crawler,
}

impl ObstacleKind {
    /// Weighted spawn pool: one flyer for every three crawlers
    pub const SPAWN_POOL: [ObstacleKind; 4] = [
        ObstacleKind::Flyer,
        ObstacleKind::Crawler,
        ObstacleKind::Crawler,
        ObstacleKind::Crawler,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::Flyer => "flyer",
            ObstacleKind::Crawler => "crawler",
        }
    }

    /// Sprite/hitbox size
    pub fn size(&self, world: &World) -> Vec2 {
        match self {
            ObstacleKind::Flyer => world.flyer_size,
            ObstacleKind::Crawler => world.crawler_size,
        }
    }

    /// Lower-edge y for this kind
    pub fn bottom_y(&self, world: &World) -> f32 {
        match self {
            ObstacleKind::Flyer => world.ground_y - world.flyer_altitude,
            ObstacleKind::Crawler => world.ground_y,
        }
    }
}

/// A moving obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Mid-bottom point
    pub pos: Vec2,
    pub size: Vec2,
    pub anim: AnimationCycle,
    pub alive: bool,
}

impl Obstacle {
    /// Create an obstacle with its mid-bottom at `x`
    pub fn new(kind: ObstacleKind, x: f32, world: &World) -> Self {
        Self {
            kind,
            pos: Vec2::new(x, kind.bottom_y(world)),
            size: kind.size(world),
            anim: AnimationCycle::default(),
            alive: true,
        }
    }

    /// Animate, move left, and die once fully past the left edge
    pub fn update(&mut self, speed: f32) {
        if !self.alive {
            return;
        }
        self.anim.advance();
        self.pos.x -= speed;
        if self.rect().right() <= 0.0 {
            self.alive = false;
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_midbottom(self.pos, self.size)
    }
}
