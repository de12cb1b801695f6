//! Audio collaborator
//!
//! Fire-and-forget: the game never waits on or hears back from audio.

use std::io::Write;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player left the ground
    Jump,
}

/// Looping tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Music {
    Background,
}

/// Anything that can play sounds
pub trait AudioSink {
    /// Play an effect once
    fn play(&mut self, effect: SoundEffect);

    /// Start a track on loop
    fn play_looping(&mut self, music: Music);
}

/// Records requests without making noise
#[derive(Debug, Default)]
pub struct SilentAudio {
    pub played: Vec<SoundEffect>,
    pub looping: Option<Music>,
}

impl AudioSink for SilentAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("Sound: {effect:?}");
        self.played.push(effect);
    }

    fn play_looping(&mut self, music: Music) {
        log::debug!("Music: {music:?}");
        self.looping = Some(music);
    }
}

/// Terminal bell for effects; music is accepted but has no output
pub struct TerminalBell<W: Write> {
    out: W,
    sfx_volume: f32,
    music_volume: f32,
    looping: Option<Music>,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W, sfx_volume: f32, music_volume: f32) -> Self {
        Self {
            out,
            sfx_volume: sfx_volume.clamp(0.0, 1.0),
            music_volume: music_volume.clamp(0.0, 1.0),
            looping: None,
        }
    }

    /// Track currently requested on loop (none when music is muted)
    pub fn looping(&self) -> Option<Music> {
        self.looping
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, effect: SoundEffect) {
        if self.sfx_volume <= 0.0 {
            return;
        }
        match effect {
            SoundEffect::Jump => {
                let _ = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
            }
        }
    }

    fn play_looping(&mut self, music: Music) {
        if self.music_volume <= 0.0 {
            log::debug!("Music muted, not starting {music:?}");
            return;
        }
        log::info!(
            "No music output in the terminal, {music:?} at volume {:.2} stays silent",
            self.music_volume
        );
        self.looping = Some(music);
    }
}
