//! Audio system
//!
//! Sounds are fire-and-forget: the game asks for an effect and never hears
//! back. Overlapping requests are fine.

use std::path::Path;

use crate::settings::AssetManifest;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Blade cut through a fruit
    Slice,
}

impl SoundEffect {
    /// Sound for a game event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::FruitSliced { .. } => Some(SoundEffect::Slice),
            GameEvent::FruitSpawned { .. } | GameEvent::FruitMissed { .. } => None,
        }
    }

    /// Sample file backing this effect
    pub fn asset<'a>(&self, assets: &'a AssetManifest) -> &'a Path {
        match self {
            SoundEffect::Slice => assets.slice_sound.as_path(),
        }
    }
}

/// Audio collaborator
pub trait Audio {
    /// Start playing an effect. Must not block.
    fn play(&mut self, effect: SoundEffect);
}

/// Audio backend that only logs what it would play
///
/// Used by the headless driver and wherever no output device exists.
#[derive(Debug, Clone)]
pub struct LogAudio {
    assets: AssetManifest,
    master_volume: f32,
    muted: bool,
    played: u64,
}

impl LogAudio {
    pub fn new(assets: AssetManifest) -> Self {
        Self {
            assets,
            master_volume: 0.8,
            muted: false,
            played: 0,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    /// Number of effects actually played
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl Audio for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.played += 1;
        log::trace!(
            "play {:?} ({}) at volume {:.2}",
            effect,
            effect.asset(&self.assets).display(),
            vol
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::FruitKind;
    use glam::Vec2;

    #[test]
    fn test_only_slices_make_noise() {
        let sliced = GameEvent::FruitSliced {
            id: 1,
            kind: FruitKind::Apple,
            pos: Vec2::ZERO,
        };
        let missed = GameEvent::FruitMissed {
            id: 1,
            kind: FruitKind::Apple,
        };
        assert_eq!(SoundEffect::for_event(&sliced), Some(SoundEffect::Slice));
        assert_eq!(SoundEffect::for_event(&missed), None);
    }

    #[test]
    fn test_muted_audio_drops_effects() {
        let mut audio = LogAudio::new(AssetManifest::default());
        audio.play(SoundEffect::Slice);
        audio.set_muted(true);
        audio.play(SoundEffect::Slice);
        assert_eq!(audio.played(), 1);
        assert_eq!(
            SoundEffect::Slice.asset(&AssetManifest::default()),
            Path::new("swish.mp3")
        );
    }

    #[test]
    fn test_zero_volume_is_silent() {
        let mut audio = LogAudio::new(AssetManifest::default());
        audio.set_master_volume(-1.0);
        audio.play(SoundEffect::Slice);
        assert_eq!(audio.played(), 0);
    }
}
