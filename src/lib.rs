//! FISH TANK'D - a tiny fish clicker
//!
//! Core modules:
//! - `sim`: Gauge/points state, particle animation clock, session driver
//! - `timer`: Fixed-interval ticker that schedules animation ticks
//! - `renderer`: CPU-side frame builder (fish, particles, health bar)
//! - `audio`: Fire-and-forget sound collaborator
//! - `hud`: Text labels shown next to the button

pub mod audio;
pub mod hud;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod timer;

pub use settings::{RulesPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Gauge capacity at startup (and permanently, without escalation)
    pub const START_GAUGE_CAPACITY: u32 = 10;
    /// Points awarded per depletion
    pub const POINTS_PER_DEPLETION: u64 = 200;

    /// Animation tick interval
    pub const TICK_INTERVAL_MS: u32 = 30;
    /// Maximum ticks run per update to prevent spiral of death
    pub const MAX_TICKS_PER_UPDATE: u32 = 8;

    /// Particles spawned per animation
    pub const PARTICLE_COUNT: usize = 30;
    /// Maximum particles per animation
    pub const MAX_PARTICLES: usize = 256;
    /// Vertical distance a particle falls each tick
    pub const PARTICLE_STEP: f32 = 0.05;
    /// Lower visible bound (normalized device coordinates)
    pub const VISIBLE_FLOOR: f32 = -1.0;
    /// Horizontal spawn range
    pub const SPAWN_X_MIN: f32 = -1.0;
    pub const SPAWN_X_MAX: f32 = 1.0;
    /// Vertical spawn band, just above the top edge
    pub const SPAWN_Y_MIN: f32 = 0.8;
    pub const SPAWN_Y_MAX: f32 = 1.0;

    /// Full width of the health bar
    pub const BAR_MAX_WIDTH: f32 = 1.6;

    /// Fish colour before the first retint
    pub const DEFAULT_TINT: (f32, f32, f32) = (1.0, 0.75, 0.30);
}
