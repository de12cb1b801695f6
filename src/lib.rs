//! Pixel Runner - a single-screen endless runner
//!
//! Core modules:
//! - `sim`: Game state machine, physics, collision and obstacle spawning
//! - `highscores`: Top-5 leaderboard
//! - `persistence`: Leaderboard storage (JSON file or in-memory)
//! - `settings`: Startup configuration and derived world constants
//! - `platform`: Clock and input abstractions plus the terminal frontend
//! - `renderer` / `ui`: Frame description handed to a renderer, and its layout
//! - `audio`: Fire-and-forget sound collaborator
//! - `game`: Fixed-rate driver tying the collaborators to the simulation

pub mod audio;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use game::{Flow, Game};
pub use highscores::Leaderboard;
pub use persistence::{JsonFileStore, LeaderboardStore, MemoryStore, StoreError};
pub use settings::{Settings, World};

/// Game configuration constants
pub mod consts {
    /// Target loop rate
    pub const TICK_RATE: u32 = 60;
    /// Seconds per tick at the target rate
    pub const TICK_DT: f64 = 1.0 / TICK_RATE as f64;

    /// Vertical extent of the nominal world, used to derive the scale factor
    pub const GAME_WORLD_HEIGHT: f32 = 700.0;
    /// Fallback display size when none is detected
    pub const DEFAULT_SCREEN_WIDTH: u32 = 1280;
    pub const DEFAULT_SCREEN_HEIGHT: u32 = 720;

    /// Ground line as a fraction of screen height
    pub const GROUND_LINE_RATIO: f32 = 0.75;
    /// Player start column as a fraction of screen width
    pub const PLAYER_START_RATIO: f32 = 0.1;

    /// Gravity pull per tick, before scaling
    pub const GRAVITY_PULL: f32 = 1.0;
    /// Jump impulse per tick, before scaling (negative is up)
    pub const JUMP_IMPULSE: f32 = -20.0;
    /// Obstacle speed per tick at the nominal 800 px width
    pub const BASE_OBSTACLE_SPEED: f32 = 6.0;
    pub const NOMINAL_SCREEN_WIDTH: f32 = 800.0;
    /// Damping applied to obstacle speed so runs stay readable on wide displays
    pub const OBSTACLE_SPEED_TRIM: f32 = 4.0 / 7.0;

    /// Seconds between obstacle spawns
    pub const SPAWN_INTERVAL_SECS: f64 = 1.5;
    /// Spawn band past the right edge of the screen (px)
    pub const SPAWN_MIN_OFFSET: i32 = 100;
    pub const SPAWN_MAX_OFFSET: i32 = 300;
    /// Height of the flyer above the ground line, before scaling
    pub const FLYER_ALTITUDE: f32 = 90.0;

    /// Animation step per tick for walk/crawl/flap cycles
    pub const ANIMATION_STEP: f32 = 0.1;

    /// Leaderboard length
    pub const NUM_TOP_SCORES: usize = 5;
}
