//! Fixed-rate simulation tick
//!
//! One call per loop iteration. Time comes in as a clock reading so the
//! score and spawn timer do not depend on how regularly ticks arrive.

use super::collision::detect;
use super::state::{GameEvent, GameMode, GameState};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start a run (edge-triggered, Menu only)
    pub start: bool,
    /// Jump key currently held (level-triggered)
    pub jump_held: bool,
    /// Hidden leaderboard reset (edge-triggered, Menu only)
    pub reset_scores: bool,
}

/// Advance the game by one tick at clock reading `now` (seconds)
pub fn tick(state: &mut GameState, input: &TickInput, now: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.mode == GameMode::Menu {
        if input.reset_scores && state.reset_scores() {
            events.push(GameEvent::ScoresReset);
        }
        if input.start {
            state.start_run(now);
            events.push(GameEvent::RunStarted);
        }
        // The run's first physics step happens on the next tick
        return events;
    }

    state.time_ticks += 1;
    state.update_score(now);

    if let Some(obstacle) = state.spawner.poll(now, &state.world) {
        state.obstacles.push(obstacle);
    }

    // Player
    if state.player.try_jump(input.jump_held, &state.world) {
        events.push(GameEvent::Jumped);
    }
    state.player.apply_gravity(&state.world);
    state.player.animate();

    // Obstacles
    let speed = state.world.obstacle_speed;
    for obstacle in &mut state.obstacles {
        obstacle.update(speed);
    }
    state.obstacles.retain(|o| o.alive);

    if detect(&state.player, &state.obstacles) {
        let score = state.score;
        let rank = state.end_run();
        events.push(GameEvent::RunEnded { score, rank });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TICK_DT;
    use crate::highscores::Leaderboard;
    use crate::settings::World;
    use crate::sim::entity::{Obstacle, ObstacleKind};

    fn new_state(board: Leaderboard) -> GameState {
        GameState::new(World::default(), board, 12345)
    }

    fn start() -> TickInput {
        TickInput {
            start: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_tick_menu_to_playing() {
        let mut state = new_state(Leaderboard::new());
        let events = tick(&mut state, &TickInput::default(), 0.0);
        assert!(events.is_empty());
        assert_eq!(state.mode, GameMode::Menu);

        let events = tick(&mut state, &start(), 0.0);
        assert_eq!(events, vec![GameEvent::RunStarted]);
        assert_eq!(state.mode, GameMode::Playing);
        assert_eq!(state.player.vel_y, 0.0);
        assert_eq!(state.player.pos.y, state.world.ground_y);
    }

    #[test]
    fn test_first_tick_applies_gravity_then_clamps() {
        let mut state = new_state(Leaderboard::new());
        tick(&mut state, &start(), 0.0);
        assert_eq!(state.time_ticks, 0);
        tick(&mut state, &TickInput::default(), TICK_DT);
        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.player.vel_y, state.world.gravity);
        assert_eq!(state.player.pos.y, state.world.ground_y);
    }

    #[test]
    fn test_jump_emits_event() {
        let mut state = new_state(Leaderboard::new());
        tick(&mut state, &start(), 0.0);
        let input = TickInput {
            jump_held: true,
            ..Default::default()
        };
        let events = tick(&mut state, &input, TICK_DT);
        assert_eq!(events, vec![GameEvent::Jumped]);
        assert_eq!(
            state.player.vel_y,
            state.world.jump_impulse + state.world.gravity
        );
        assert!(!state.player.is_grounded());

        // Holding jump mid-air does nothing
        let events = tick(&mut state, &input, 2.0 * TICK_DT);
        assert!(events.is_empty());
    }

    #[test]
    fn test_start_ignored_while_playing() {
        let mut state = new_state(Leaderboard::new());
        tick(&mut state, &start(), 0.0);
        let events = tick(&mut state, &start(), 5.0);
        assert!(!events.contains(&GameEvent::RunStarted));
        assert_eq!(state.score, 5);
    }

    #[test]
    fn test_collision_ends_run_and_records_score() {
        let mut state = new_state(Leaderboard::from_scores(vec![50, 40, 30, 20, 10]));
        tick(&mut state, &start(), 100.0);

        let world = state.world.clone();
        // Crawler about to run into the player
        let x = world.player_start_x + world.obstacle_speed;
        state
            .obstacles
            .push(Obstacle::new(ObstacleKind::Crawler, x, &world));

        let events = tick(&mut state, &TickInput::default(), 135.2);
        assert_eq!(
            events,
            vec![GameEvent::RunEnded {
                score: 35,
                rank: Some(3)
            }]
        );
        assert_eq!(state.mode, GameMode::Menu);
        assert_eq!(state.score, 35);
        assert!(!state.is_splash());
        assert_eq!(state.leaderboard.scores(), &[50, 40, 35, 30, 20]);
    }

    #[test]
    fn test_reset_only_in_menu() {
        let mut state = new_state(Leaderboard::from_scores(vec![100, 90, 80, 70, 60]));
        let reset = TickInput {
            reset_scores: true,
            ..Default::default()
        };

        tick(&mut state, &start(), 0.0);
        let events = tick(&mut state, &reset, TICK_DT);
        assert!(!events.contains(&GameEvent::ScoresReset));
        assert_eq!(state.leaderboard.top_score(), 100);

        state.end_run();
        let events = tick(&mut state, &reset, 1.0);
        assert_eq!(events, vec![GameEvent::ScoresReset]);
        assert_eq!(state.leaderboard, Leaderboard::new());
    }

    #[test]
    fn test_obstacles_spawn_and_leave() {
        let mut state = new_state(Leaderboard::new());
        tick(&mut state, &start(), 0.0);

        // Obstacles are dropped before they reach the player so the run never ends
        let mut spawned = 0;
        let mut now = 0.0;
        for _ in 0..(10 * 60) {
            now += TICK_DT;
            let before = state.obstacles.len();
            tick(&mut state, &TickInput::default(), now);
            if state.obstacles.len() > before {
                spawned += 1;
            }
            state
                .obstacles
                .retain(|o| o.rect().left() > state.world.player_start_x + 100.0);
            assert_eq!(state.mode, GameMode::Playing);
        }
        // One spawn every 1.5 s over 10 s
        assert_eq!(spawned, 6);
    }

    #[test]
    fn test_determinism() {
        let mut a = new_state(Leaderboard::new());
        let mut b = new_state(Leaderboard::new());
        let inputs = [
            start(),
            TickInput::default(),
            TickInput {
                jump_held: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        let mut now = 0.0;
        for _ in 0..200 {
            for input in &inputs {
                now += TICK_DT;
                assert_eq!(tick(&mut a, input, now), tick(&mut b, input, now));
            }
        }
        assert_eq!(a.mode, b.mode);
        assert_eq!(a.score, b.score);
        assert_eq!(a.obstacles.len(), b.obstacles.len());
        assert_eq!(a.player.pos, b.player.pos);
        assert_eq!(a.time_ticks, b.time_ticks);
    }
}
