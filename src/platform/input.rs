//! Input collaborator

use std::collections::VecDeque;

/// Discrete input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Begin a run from the menu
    Start,
    /// Quit key or window close
    Quit,
    /// Hidden maintenance key: zero the leaderboard
    ResetScores,
}

/// Everything read from the input device for one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub events: Vec<InputEvent>,
    /// Jump key is down right now
    pub jump_held: bool,
}

impl InputFrame {
    pub fn has(&self, event: InputEvent) -> bool {
        self.events.contains(&event)
    }
}

/// Source of per-tick input
pub trait InputSource {
    fn poll(&mut self) -> InputFrame;
}

/// Replays a fixed list of frames, then reports `Quit`
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputFrame>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputFrame {
        self.frames.pop_front().unwrap_or_else(|| InputFrame {
            events: vec![InputEvent::Quit],
            jump_held: false,
        })
    }
}
