//! Sound effect dispatch
//!
//! The simulation never talks to an audio device; it emits `GameEvent`s and
//! the shell routes them here. Playback is fire-and-forget: the sink may drop
//! a trigger and nothing in the game cares.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player fired a shot
    Shot,
    /// An enemy was destroyed
    Explosion,
}

/// Output device abstraction; implementations must not block
pub trait SoundSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Default sink: traces triggers to the log instead of a device
#[derive(Debug, Default)]
pub struct LogSink;

impl SoundSink for LogSink {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("sfx {effect:?}");
    }
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Box<dyn SoundSink>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(Box::new(LogSink))
    }
}

impl AudioManager {
    pub fn new(sink: Box<dyn SoundSink>) -> Self {
        Self {
            sink,
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

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        if self.effective_volume() <= 0.0 {
            return;
        }
        self.sink.play(effect);
    }

    /// Route one tick's events to the sink. Enemy shots are silent;
    /// only the player's gun and kill explosions have sounds.
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::PlayerShotFired => self.play(SoundEffect::Shot),
                GameEvent::EnemyDestroyed { .. } => self.play(SoundEffect::Explosion),
                _ => {}
            }
        }
    }
}
