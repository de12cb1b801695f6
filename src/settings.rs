//! Game settings and derived world constants
//!
//! Settings are read once at startup from an optional JSON file; every
//! physics and layout constant is then derived from the display size.

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::DEFAULT_SCORES_FILE;

/// Default settings location, relative to the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Startup configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Display ===
    /// Screen width in pixels
    pub screen_width: u32,
    /// Screen height in pixels
    pub screen_height: u32,
    /// Nominal world height the constants are tuned for
    pub game_world_height: f32,

    // === Feel ===
    /// Player sprite scale on top of the world scale
    pub player_scale: f32,
    /// Font size multiplier
    pub font_scale: f32,
    /// Gravity and jump multiplier
    pub physics_speed: f32,

    // === Audio ===
    /// Jump effect volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,

    // === Misc ===
    /// Fixed RNG seed for obstacle spawning (random when unset)
    pub seed: Option<u64>,
    /// Leaderboard file
    pub scores_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            game_world_height: GAME_WORLD_HEIGHT,

            player_scale: 0.8,
            font_scale: 0.9,
            physics_speed: 1.2,

            sfx_volume: 0.1,
            music_volume: 0.1,

            seed: None,
            scores_path: PathBuf::from(DEFAULT_SCORES_FILE),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let Ok(json) = fs::read_to_string(path) else {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        };

        match serde_json::from_str::<Settings>(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Same settings with a different screen size
    pub fn with_screen(mut self, width: u32, height: u32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self.sanitized()
    }

    /// Replace degenerate values with defaults
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.screen_width == 0 || self.screen_height == 0 {
            self.screen_width = defaults.screen_width;
            self.screen_height = defaults.screen_height;
        }
        let positive_or = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };
        self.game_world_height = positive_or(self.game_world_height, defaults.game_world_height);
        self.player_scale = positive_or(self.player_scale, defaults.player_scale);
        self.font_scale = positive_or(self.font_scale, defaults.font_scale);
        self.physics_speed = positive_or(self.physics_speed, defaults.physics_speed);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        self
    }
}

/// Nominal sprite sizes at scale 1.0 (px)
pub mod sprite_size {
    pub const PLAYER_WALK: (f32, f32) = (68.0, 84.0);
    pub const PLAYER_STAND: (f32, f32) = (66.0, 84.0);
    pub const FLYER: (f32, f32) = (84.0, 40.0);
    pub const CRAWLER: (f32, f32) = (72.0, 36.0);
}

/// Runtime constants derived from [`Settings`]
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub width: f32,
    pub height: f32,
    /// Screen height over nominal world height
    pub scale: f32,
    /// Walking surface (y, grows downward)
    pub ground_y: f32,
    /// Player's fixed horizontal center
    pub player_start_x: f32,
    /// Added to the player's velocity every tick
    pub gravity: f32,
    /// Velocity assigned on jump (negative)
    pub jump_impulse: f32,
    /// Obstacle travel per tick
    pub obstacle_speed: f32,
    /// Obstacle spawn period (seconds)
    pub spawn_interval: f64,
    /// Player hitbox
    pub player_size: Vec2,
    /// Splash screen sprite
    pub player_stand_size: Vec2,
    pub flyer_size: Vec2,
    pub crawler_size: Vec2,
    /// Flyer lower edge above the ground line
    pub flyer_altitude: f32,
    pub font_large: f32,
    pub font_medium: f32,
    pub font_small: f32,
}

impl World {
    pub fn from_settings(settings: &Settings) -> Self {
        let width = settings.screen_width as f32;
        let height = settings.screen_height as f32;
        let scale = height / settings.game_world_height;
        let player_scale = scale * settings.player_scale;
        let size = |(w, h): (f32, f32), s: f32| Vec2::new(w * s, h * s);

        Self {
            width,
            height,
            scale,
            ground_y: (height * GROUND_LINE_RATIO).floor(),
            player_start_x: (width * PLAYER_START_RATIO).floor(),
            gravity: GRAVITY_PULL * scale * settings.physics_speed,
            jump_impulse: JUMP_IMPULSE * scale * settings.physics_speed,
            obstacle_speed: BASE_OBSTACLE_SPEED
                * (width / NOMINAL_SCREEN_WIDTH)
                * OBSTACLE_SPEED_TRIM,
            spawn_interval: SPAWN_INTERVAL_SECS,
            player_size: size(sprite_size::PLAYER_WALK, player_scale),
            player_stand_size: size(sprite_size::PLAYER_STAND, player_scale * 2.0),
            flyer_size: size(sprite_size::FLYER, scale),
            crawler_size: size(sprite_size::CRAWLER, scale),
            flyer_altitude: (FLYER_ALTITUDE * scale).floor(),
            font_large: (height * 0.125 * settings.font_scale).floor(),
            font_medium: (height * 0.08 * settings.font_scale).floor(),
            font_small: (height * 0.05 * settings.font_scale).floor(),
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
