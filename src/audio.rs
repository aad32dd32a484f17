//! Sound cue routing
//!
//! The sim never plays audio. It raises `GameEvent`s; the host drains them
//! and hands the derived cues to an `AudioBackend` through `AudioManager`,
//! which applies volume and mute. Playback is fire-and-forget.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Named sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Player took damage
    Hit,
    /// Level reached, skill choice opened
    LevelUp,
    /// Chest collected
    ChestOpen,
    /// Boss entered the arena
    BossAppear,
    /// Run ended (either outcome)
    GameOver,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Hit => "hit",
            SoundCue::LevelUp => "levelup",
            SoundCue::ChestOpen => "chest_open",
            SoundCue::BossAppear => "boss_appear",
            SoundCue::GameOver => "gameover",
        }
    }
}

/// Whatever actually makes noise
pub trait AudioBackend {
    /// `volume` is already scaled to 0.0 - 1.0
    fn play(&mut self, cue: SoundCue, volume: f32);
}

/// Backend that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogAudio {
    pub played: usize,
}

impl AudioBackend for LogAudio {
    fn play(&mut self, cue: SoundCue, volume: f32) {
        self.played += 1;
        log::debug!("♪ {} (vol {:.2})", cue.as_str(), volume);
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Box<dyn AudioBackend>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a cue; returns false when muted or silent
    pub fn play(&mut self, cue: SoundCue) -> bool {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return false;
        }
        self.backend.play(cue, vol);
        true
    }

    /// Play the cues for a batch of drained events, returns how many played
    pub fn dispatch(&mut self, events: &[GameEvent]) -> usize {
        events
            .iter()
            .filter_map(GameEvent::cue)
            .filter(|cue| self.play(*cue))
            .count()
    }
}
