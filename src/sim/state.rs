//! Game state aggregate and mode transitions

use serde::{Deserialize, Serialize};

use super::entity::{Obstacle, PlayerBody};
use super::spawner::Spawner;
use crate::highscores::Leaderboard;
use crate::settings::World;

/// Current mode of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Splash screen before the first run, score screen after each one
    Menu,
    /// A run is in progress
    Playing,
}

/// Things that happened during a tick, for the driver and collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    RunStarted,
    Jumped,
    /// Run ended on a collision; `rank` is the leaderboard position reached
    RunEnded { score: u64, rank: Option<usize> },
    /// Maintenance reset zeroed the leaderboard
    ScoresReset,
}

/// Everything the loop owns
#[derive(Debug, Clone)]
pub struct GameState {
    pub world: World,
    pub mode: GameMode,
    pub player: PlayerBody,
    pub obstacles: Vec<Obstacle>,
    /// Current run score, frozen after a collision until the next start
    pub score: u64,
    /// Whole-second clock reading when the run began
    pub start_secs: u64,
    pub leaderboard: Leaderboard,
    pub spawner: Spawner,
    /// Ticks simulated while Playing
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh state in Menu with no run played yet
    pub fn new(world: World, leaderboard: Leaderboard, seed: u64) -> Self {
        let spawner = Spawner::new(seed, world.spawn_interval);
        Self {
            player: PlayerBody::new(&world),
            world,
            mode: GameMode::Menu,
            obstacles: Vec::new(),
            score: 0,
            start_secs: 0,
            leaderboard,
            spawner,
            time_ticks: 0,
        }
    }

    /// Splash screen: Menu before any scored run
    pub fn is_splash(&self) -> bool {
        self.mode == GameMode::Menu && self.score == 0
    }

    /// Menu → Playing
    pub fn start_run(&mut self, now: f64) {
        self.obstacles.clear();
        self.player.reset(&self.world);
        self.start_secs = whole_secs(now);
        self.score = 0;
        self.time_ticks = 0;
        self.spawner.arm(now);
        self.mode = GameMode::Playing;
        log::info!("Run started");
    }

    /// Playing → Menu; records the frozen score on the leaderboard
    pub fn end_run(&mut self) -> Option<usize> {
        self.mode = GameMode::Menu;
        let rank = self.leaderboard.insert(self.score);
        log::info!(
            "Run ended with score {} after {} ticks (rank {:?})",
            self.score,
            self.time_ticks,
            rank
        );
        rank
    }

    /// Zero the leaderboard (only honoured in Menu)
    pub fn reset_scores(&mut self) -> bool {
        if self.mode != GameMode::Menu {
            return false;
        }
        self.leaderboard.clear();
        log::info!("Leaderboard reset");
        true
    }

    /// Recompute the score from the clock
    pub fn update_score(&mut self, now: f64) {
        self.score = whole_secs(now).saturating_sub(self.start_secs);
    }
}

/// Whole seconds of a clock reading
fn whole_secs(now: f64) -> u64 {
    now.max(0.0).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::ObstacleKind;

    fn state() -> GameState {
        GameState::new(World::default(), Leaderboard::new(), 1)
    }

    #[test]
    fn test_initial_state_is_splash() {
        let state = state();
        assert_eq!(state.mode, GameMode::Menu);
        assert_eq!(state.score, 0);
        assert!(state.is_splash());
    }

    #[test]
    fn test_start_run_resets_everything() {
        let mut state = state();
        let world = state.world.clone();
        state
            .obstacles
            .push(Obstacle::new(ObstacleKind::Crawler, 300.0, &world));
        state.player.pos.y -= 50.0;
        state.player.vel_y = 3.0;
        state.score = 12;
        state.time_ticks = 900;

        state.start_run(42.7);
        assert_eq!(state.mode, GameMode::Playing);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player.pos.y, world.ground_y);
        assert_eq!(state.player.pos.x, world.player_start_x);
        assert_eq!(state.player.vel_y, 0.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.start_secs, 42);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_score_is_whole_seconds_since_start() {
        let mut state = state();
        state.start_run(3.9);
        state.update_score(4.1);
        assert_eq!(state.score, 1);
        state.update_score(10.0);
        assert_eq!(state.score, 7);
    }

    #[test]
    fn test_reset_ignored_while_playing() {
        let mut state = GameState::new(
            World::default(),
            Leaderboard::from_scores(vec![100, 90, 80, 70, 60]),
            1,
        );
        state.start_run(0.0);
        assert!(!state.reset_scores());
        assert_eq!(state.leaderboard.top_score(), 100);

        state.end_run();
        assert!(state.reset_scores());
        assert_eq!(state.leaderboard, Leaderboard::new());
    }
}
