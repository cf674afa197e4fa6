//! Gauge, points and fish tint
//!
//! The only state the button ever touches lives here.

use rand::Rng;

use crate::consts::*;

/// RGB tint applied to the fish, each channel in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Default for Tint {
    fn default() -> Self {
        let (r, g, b) = DEFAULT_TINT;
        Self { r, g, b }
    }
}

impl Tint {
    /// Three independent uniform draws in [0, 1]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.random_range(0.0..=1.0),
            g: rng.random_range(0.0..=1.0),
            b: rng.random_range(0.0..=1.0),
        }
    }

    pub fn to_rgba(self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }
}

/// Which of the game's behaviours are switched on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Grow the gauge capacity by one on every depletion
    pub escalating: bool,
    /// Retint the fish and drop particles on every depletion
    pub visual_feedback: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            escalating: true,
            visual_feedback: true,
        }
    }
}

/// Result of a single trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Gauge went down by one
    Decremented,
    /// Gauge hit zero and was refilled
    Depleted {
        /// Whether the particle animation should start
        start_animation: bool,
    },
}

/// Gauge/points state
#[derive(Debug, Clone)]
pub struct GameState {
    rules: Rules,
    gauge: u32,
    gauge_capacity: u32,
    points: u64,
    tint: Tint,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

impl GameState {
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            gauge: START_GAUGE_CAPACITY,
            gauge_capacity: START_GAUGE_CAPACITY,
            points: 0,
            tint: Tint::default(),
        }
    }

    /// Apply one button press.
    ///
    /// The gauge is refilled within the same call that empties it, so callers
    /// never observe `gauge == 0`.
    pub fn on_trigger<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TriggerOutcome {
        if self.gauge > 0 {
            self.gauge -= 1;
        }
        if self.gauge > 0 {
            return TriggerOutcome::Decremented;
        }

        self.points += POINTS_PER_DEPLETION;
        if self.rules.escalating {
            self.gauge_capacity += 1;
        }
        self.gauge = self.gauge_capacity;

        if self.rules.visual_feedback {
            self.tint = Tint::random(rng);
        }

        log::info!(
            "Gauge depleted: points={} capacity={}",
            self.points,
            self.gauge_capacity
        );

        TriggerOutcome::Depleted {
            start_animation: self.rules.visual_feedback,
        }
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn gauge(&self) -> u32 {
        self.gauge
    }

    pub fn gauge_capacity(&self) -> u32 {
        self.gauge_capacity
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    pub fn tint(&self) -> Tint {
        self.tint
    }
}
