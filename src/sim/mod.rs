//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Clock readings are passed in, never queried
//! - Seeded RNG only
//! - No rendering, audio or storage dependencies

pub mod collision;
pub mod entity;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Rect, detect};
pub use entity::{AnimationCycle, Obstacle, ObstacleKind, PlayerBody, PlayerPose};
pub use spawner::Spawner;
pub use state::{GameEvent, GameMode, GameState};
pub use tick::{TickInput, tick};
