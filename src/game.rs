//! Game driver
//!
//! Owns the simulation state and the collaborators around it: the clock,
//! the leaderboard store, and (per call) input, audio and rendering. Storage
//! I/O only happens at startup, at the end of a run, and on a reset.

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use crate::audio::{AudioSink, Music, SoundEffect};
use crate::consts::TICK_DT;
use crate::persistence::LeaderboardStore;
use crate::platform::{Clock, InputEvent, InputFrame, InputSource};
use crate::renderer::Renderer;
use crate::settings::World;
use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::ui;

/// Whether the loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Game<S, C> {
    state: GameState,
    store: S,
    clock: C,
}

impl<S: LeaderboardStore, C: Clock> Game<S, C> {
    /// Load the leaderboard and enter the menu
    pub fn new(world: World, store: S, clock: C, seed: u64) -> Self {
        let leaderboard = store.load();
        log::info!("Starting with leaderboard {:?}", leaderboard.scores());
        Self {
            state: GameState::new(world, leaderboard, seed),
            store,
            clock,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Run one tick with already-polled input
    pub fn step(
        &mut self,
        input: &InputFrame,
        audio: &mut dyn AudioSink,
    ) -> (Flow, Vec<GameEvent>) {
        if input.has(InputEvent::Quit) {
            log::info!("Quit requested");
            return (Flow::Quit, Vec::new());
        }

        let tick_input = TickInput {
            start: input.has(InputEvent::Start),
            jump_held: input.jump_held,
            reset_scores: input.has(InputEvent::ResetScores),
        };
        let events = tick(&mut self.state, &tick_input, self.clock.now());

        for event in &events {
            match event {
                GameEvent::Jumped => audio.play(SoundEffect::Jump),
                GameEvent::RunEnded { .. } => self.persist(),
                GameEvent::ScoresReset => {
                    self.state.leaderboard = self.store.reset();
                }
                GameEvent::RunStarted => {}
            }
        }

        (Flow::Continue, events)
    }

    /// Save the leaderboard; failure is logged and the session carries on
    fn persist(&self) {
        if let Err(e) = self.store.save(&self.state.leaderboard) {
            log::error!("Failed to save leaderboard: {e}");
        }
    }

    /// Fixed-rate loop until quit
    pub fn run(
        &mut self,
        input: &mut impl InputSource,
        renderer: &mut impl Renderer,
        audio: &mut dyn AudioSink,
    ) -> io::Result<()> {
        let frame_budget = Duration::from_secs_f64(TICK_DT);
        audio.play_looping(Music::Background);

        loop {
            let frame_start = Instant::now();

            let (flow, _) = self.step(&input.poll(), audio);
            if flow == Flow::Quit {
                return Ok(());
            }
            renderer.render(&ui::layout(&self.state))?;

            if let Some(rest) = frame_budget.checked_sub(frame_start.elapsed()) {
                thread::sleep(rest);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentAudio;
    use crate::highscores::Leaderboard;
    use crate::persistence::{MemoryStore, StoreError};
    use crate::platform::ManualClock;
    use crate::sim::GameMode;

    /// Store whose writes always fail
    struct ReadOnlyStore;

    impl LeaderboardStore for ReadOnlyStore {
        fn load(&self) -> Leaderboard {
            Leaderboard::from_scores(vec![30])
        }

        fn save(&self, _board: &Leaderboard) -> Result<(), StoreError> {
            Err(StoreError::Io {
                path: "scores.json".into(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    fn frame(events: &[InputEvent]) -> InputFrame {
        InputFrame {
            events: events.to_vec(),
            jump_held: false,
        }
    }

    #[test]
    fn test_quit_from_menu() {
        let mut game = Game::new(World::default(), MemoryStore::new(), ManualClock::new(0.0), 1);
        let (flow, _) = game.step(&frame(&[InputEvent::Quit]), &mut SilentAudio::default());
        assert_eq!(flow, Flow::Quit);
        assert_eq!(game.store().save_count(), 0);
    }

    #[test]
    fn test_jump_plays_sound() {
        let mut game = Game::new(World::default(), MemoryStore::new(), ManualClock::new(0.0), 1);
        let mut audio = SilentAudio::default();
        game.step(&frame(&[InputEvent::Start]), &mut audio);
        game.clock().advance(TICK_DT);
        game.step(
            &InputFrame {
                events: Vec::new(),
                jump_held: true,
            },
            &mut audio,
        );
        assert_eq!(audio.played, vec![SoundEffect::Jump]);
    }

    #[test]
    fn test_reset_in_menu_persists_zeros() {
        let store = MemoryStore::with_board(Leaderboard::from_scores(vec![100, 90, 80, 70, 60]));
        let mut game = Game::new(World::default(), store, ManualClock::new(0.0), 1);
        let (_, events) = game.step(
            &frame(&[InputEvent::ResetScores]),
            &mut SilentAudio::default(),
        );

        assert_eq!(events, vec![GameEvent::ScoresReset]);
        assert_eq!(game.state().leaderboard, Leaderboard::new());
        assert_eq!(game.store().load(), Leaderboard::new());
        assert_eq!(game.store().save_count(), 1);
    }

    #[test]
    fn test_reset_while_playing_is_ignored() {
        let store = MemoryStore::with_board(Leaderboard::from_scores(vec![100, 90, 80, 70, 60]));
        let mut game = Game::new(World::default(), store, ManualClock::new(0.0), 1);
        let mut audio = SilentAudio::default();
        game.step(&frame(&[InputEvent::Start]), &mut audio);
        let (_, events) = game.step(&frame(&[InputEvent::ResetScores]), &mut audio);

        assert!(events.is_empty());
        assert_eq!(game.state().mode, GameMode::Playing);
        assert_eq!(game.state().leaderboard.top_score(), 100);
        assert_eq!(game.store().save_count(), 0);
    }

    #[test]
    fn test_failed_save_keeps_session_alive() {
        let mut game = Game::new(World::default(), ReadOnlyStore, ManualClock::new(0.0), 1);
        let mut audio = SilentAudio::default();
        game.step(&frame(&[InputEvent::Start]), &mut audio);

        // Run until the first obstacle arrives
        let mut ended = None;
        for _ in 0..(60 * 60) {
            game.clock().advance(TICK_DT);
            let (flow, events) = game.step(&InputFrame::default(), &mut audio);
            assert_eq!(flow, Flow::Continue);
            if let Some(GameEvent::RunEnded { score, .. }) = events.first() {
                ended = Some(*score);
                break;
            }
        }

        let score = ended.expect("an obstacle should end the run");
        assert_eq!(game.state().mode, GameMode::Menu);
        assert!(game.state().leaderboard.scores().contains(&score));
    }
}
