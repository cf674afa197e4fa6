//! Audio collaborator
//!
//! The game only ever fires sounds and forgets about them. Backends that
//! fail to produce audio stay quiet and never report back.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Button press
    Fish,
    /// Background track, looped from startup
    BackgroundMusic,
}

impl SoundEffect {
    /// Asset name a playback backend would load
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundEffect::Fish => "FISH.wav",
            SoundEffect::BackgroundMusic => "BACKGROUND.wav",
        }
    }
}

/// Fire-and-forget playback
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
    fn play_looped(&mut self, effect: SoundEffect);
}

/// Discards everything
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
    fn play_looped(&mut self, _effect: SoundEffect) {}
}

/// Writes each request to the log instead of a device
#[derive(Debug)]
pub struct LogAudio {
    master_volume: f32,
    muted: bool,
    played: u64,
    looping: Option<SoundEffect>,
}

impl Default for LogAudio {
    fn default() -> Self {
        Self::new(0.8, false)
    }
}

impl LogAudio {
    pub fn new(master_volume: f32, muted: bool) -> Self {
        Self {
            master_volume: master_volume.clamp(0.0, 1.0),
            muted,
            played: 0,
            looping: None,
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

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    /// One-shot effects actually played so far
    pub fn played(&self) -> u64 {
        self.played
    }

    pub fn looping(&self) -> Option<SoundEffect> {
        self.looping
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.played += 1;
        log::trace!("play {} at volume {:.2}", effect.asset_name(), vol);
    }

    fn play_looped(&mut self, effect: SoundEffect) {
        self.looping = Some(effect);
        log::info!(
            "Looping {} at volume {:.2}",
            effect.asset_name(),
            self.effective_volume()
        );
    }
}
