//! Timed obstacle spawning
//!
//! Uses a seeded PCG so a run can be replayed from its seed.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{Obstacle, ObstacleKind};
use crate::consts::{SPAWN_MAX_OFFSET, SPAWN_MIN_OFFSET};
use crate::settings::World;

#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
    interval: f64,
    /// Clock reading of the next spawn (seconds)
    next_spawn_at: f64,
}

impl Spawner {
    pub fn new(seed: u64, interval: f64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            interval,
            next_spawn_at: interval,
        }
    }

    /// Restart the timer so the first spawn lands one interval after `now`
    pub fn arm(&mut self, now: f64) {
        self.next_spawn_at = now + self.interval;
    }

    pub fn next_spawn_at(&self) -> f64 {
        self.next_spawn_at
    }

    /// Spawn if the timer fired. At most one obstacle per call; a stalled
    /// loop re-arms from `now` instead of bursting.
    pub fn poll(&mut self, now: f64, world: &World) -> Option<Obstacle> {
        if now < self.next_spawn_at {
            return None;
        }
        self.next_spawn_at += self.interval;
        if self.next_spawn_at <= now {
            self.next_spawn_at = now + self.interval;
        }
        Some(self.spawn(world))
    }

    /// Pick a weighted kind and place it just past the right edge
    pub fn spawn(&mut self, world: &World) -> Obstacle {
        let kind = ObstacleKind::SPAWN_POOL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(ObstacleKind::Crawler);
        let right = world.width as i32;
        let x = self
            .rng
            .random_range(right + SPAWN_MIN_OFFSET..=right + SPAWN_MAX_OFFSET);
        log::debug!("Spawned {} at x={x}", kind.as_str());
        Obstacle::new(kind, x as f32, world)
    }
}
