//! Game settings and preferences
//!
//! Read once at startup from a JSON file named by `FISH_TANK_SETTINGS`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_PARTICLES, PARTICLE_COUNT, TICK_INTERVAL_MS};
use crate::sim::Rules;

/// Environment variable holding the settings file path
pub const SETTINGS_ENV: &str = "FISH_TANK_SETTINGS";

/// The three shipped flavours of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RulesPreset {
    /// Fixed gauge of 10, no colour or particles
    Classic,
    /// Fixed gauge, fish changes colour and particles fall
    Colorful,
    /// Gauge grows by one per depletion, with colour and particles
    #[default]
    Escalating,
}

impl RulesPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            RulesPreset::Classic => "classic",
            RulesPreset::Colorful => "colorful",
            RulesPreset::Escalating => "escalating",
        }
    }

    pub fn rules(&self) -> Rules {
        match self {
            RulesPreset::Classic => Rules {
                escalating: false,
                visual_feedback: false,
            },
            RulesPreset::Colorful => Rules {
                escalating: false,
                visual_feedback: true,
            },
            RulesPreset::Escalating => Rules {
                escalating: true,
                visual_feedback: true,
            },
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Which flavour of the game to run
    pub rules: RulesPreset,
    /// Fixed RNG seed (random per launch when unset)
    pub seed: Option<u64>,

    // === Animation ===
    pub tick_interval_ms: u32,
    pub particle_count: usize,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    pub muted: bool,
    /// Loop the background track from startup
    pub background_music: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rules: RulesPreset::default(),
            seed: None,

            tick_interval_ms: TICK_INTERVAL_MS,
            particle_count: PARTICLE_COUNT,

            master_volume: 0.8,
            muted: false,
            background_music: true,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        settings.tick_interval_ms = settings.tick_interval_ms.max(1);
        settings.particle_count = settings.particle_count.clamp(1, MAX_PARTICLES);
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load from a file, falling back to defaults if it can't be read
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from the file named by `FISH_TANK_SETTINGS`, if any
    pub fn load() -> Self {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}
